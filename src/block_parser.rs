use crate::config::Config;
use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::GreenNodeBuilder;

mod list_renderer;
mod lists;
mod markers;
mod paragraphs;
pub(crate) mod utils;


pub use lists::{ListBlock, ListKind, segment};
pub use markers::{ListNumbering, NumberingStyle, classify_marker};

use list_renderer::try_parse_list;
use lists::LineGrammar;
use paragraphs::emit_paragraph;

/// Lists nested deeper than this are kept as plain item text.
pub(crate) const MAX_LIST_DEPTH: usize = 64;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// What the blocks being parsed sit inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Container {
    Document,
    TightItem,
    LooseItem,
}

impl Container {
    fn paragraph_kind(self) -> SyntaxKind {
        match self {
            Container::TightItem => SyntaxKind::PLAIN,
            Container::Document | Container::LooseItem => SyntaxKind::PARAGRAPH,
        }
    }
}

pub struct BlockParser<'a> {
    input: &'a str,
    config: &'a Config,
    builder: GreenNodeBuilder<'static>,
}

impl<'a> BlockParser<'a> {
    /// `input` must already have `\n` line endings and no tabs.
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        Self {
            input,
            config,
            builder: GreenNodeBuilder::new(),
        }
    }

    pub fn parse(mut self) -> SyntaxNode {
        #[cfg(debug_assertions)]
        {
            init_logger();
        }

        self.builder.start_node(SyntaxKind::ROOT.into());
        self.builder.start_node(SyntaxKind::DOCUMENT.into());

        log::debug!("Starting document parse");
        parse_blocks(
            &mut self.builder,
            self.input,
            self.config,
            Container::Document,
            0,
        );

        self.builder.finish_node();
        self.builder.finish_node();

        SyntaxNode::new_root(self.builder.finish())
    }
}

/// Parse `text` as a sequence of blocks into the currently open node.
///
/// `depth` counts the lists enclosing `text`. At [`MAX_LIST_DEPTH`] no further
/// lists are opened and every block becomes a paragraph.
pub(crate) fn parse_blocks(
    builder: &mut GreenNodeBuilder<'static>,
    text: &str,
    config: &Config,
    container: Container,
    depth: usize,
) {
    let blocks = utils::split_blocks(text);
    let mut pos = 0;

    while pos < blocks.len() {
        log::debug!("Parsing block {} in {:?}", pos + 1, container);

        if depth < MAX_LIST_DEPTH
            && let Some(new_pos) = try_parse_list(&blocks, pos, builder, config, depth)
        {
            pos = new_pos;
            continue;
        }

        if depth >= MAX_LIST_DEPTH
            && LineGrammar::new(config.effective_tab_width())
                .list_kind(&blocks[pos])
                .is_some()
        {
            log::warn!(
                "Lists nested deeper than {} levels, keeping as text",
                MAX_LIST_DEPTH
            );
        }
        emit_paragraph(builder, &blocks[pos], container.paragraph_kind());
        pos += 1;
    }
}
