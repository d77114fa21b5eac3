//! Markdown ordered lists numbered with letters and Roman numerals.
//!
//! The first marker of a list decides its numbering: `1.` counts in decimal,
//! `a.`/`A.` in letters, `i.`/`I.` in Roman numerals, starting from the value
//! of that marker. Tokens that are valid Roman numerals are always read as
//! Roman (`c.` starts a Roman list at 100).

pub mod block_parser;
pub mod config;
pub mod html;
pub mod numerals;
pub mod syntax;

pub use block_parser::{
    BlockParser, ListBlock, ListKind, ListNumbering, NumberingStyle, classify_marker, segment,
};
pub use config::Config;
pub use config::ConfigBuilder;
pub use syntax::SyntaxNode;

/// CRLF to LF, tabs to spaces.
fn normalize_input(input: &str, config: &Config) -> String {
    block_parser::utils::expand_tabs(&input.replace("\r\n", "\n"), config.effective_tab_width())
}

/// Parses a document into the list tree.
///
/// # Examples
///
/// ```rust
/// use fancylists::parse;
///
/// let tree = parse("iv. four\nv. five\n", None);
/// println!("{:#?}", tree);
/// ```
pub fn parse(input: &str, config: Option<Config>) -> SyntaxNode {
    let config = config.unwrap_or_default();
    let normalized_input = normalize_input(input, &config);
    block_parser::BlockParser::new(&normalized_input, &config).parse()
}

/// Parses a document and renders it as HTML.
///
/// # Examples
///
/// ```rust
/// use fancylists::render;
///
/// let html = render("B. bee\nC. sea\n", None);
/// assert!(html.starts_with("<ol start=\"2\" type=\"A\">"));
/// ```
pub fn render(input: &str, config: Option<Config>) -> String {
    html::render_tree(&parse(input, config))
}
