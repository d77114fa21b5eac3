use crate::config::{Config, MAX_TAB_WIDTH};

use super::markers::{ListNumbering, classify_marker};

/// Marker at the start of a list line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ItemMarker<'a> {
    /// Alphanumeric token, without the trailing `.`
    Ordered(&'a str),
    Bullet(char),
}

/// A line that opens a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MarkerLine<'a> {
    /// Leading spaces before the marker
    pub indent: usize,
    pub marker: ItemMarker<'a>,
    /// Everything after the spaces that follow the marker
    pub text: &'a str,
}

/// Split `line` into indentation, marker and text.
///
/// Indentation and the gap after the marker are spaces only. The gap must be at
/// least one space; the text may be empty.
fn try_parse_marker_line(line: &str) -> Option<MarkerLine<'_>> {
    let rest = line.trim_start_matches(' ');
    let indent = line.len() - rest.len();

    let (marker, after_marker) = match rest.chars().next()? {
        ch @ ('*' | '+' | '-') => (ItemMarker::Bullet(ch), &rest[1..]),
        _ => {
            let token_len = rest.bytes().take_while(u8::is_ascii_alphanumeric).count();
            if token_len == 0 {
                return None;
            }
            let after_marker = rest[token_len..].strip_prefix('.')?;
            (ItemMarker::Ordered(&rest[..token_len]), after_marker)
        }
    };

    let text = after_marker.trim_start_matches(' ');
    if text.len() == after_marker.len() {
        return None;
    }

    Some(MarkerLine {
        indent,
        marker,
        text,
    })
}

/// Line matchers for one tab width.
///
/// - marker line: `^[ ]{0,tab-1}([0-9a-zA-Z]+)\.[ ]+(.*)$`
/// - child line: `^[ ]{0,tab-1}(([0-9a-zA-Z]+\.)|[*+-])[ ]+(.*)$`
/// - nested line: `^[ ]{tab,2*tab-1}(([0-9a-zA-Z]+\.)|[*+-])[ ]+.*$`
#[derive(Debug, Clone, Copy)]
pub(crate) struct LineGrammar {
    tab_width: usize,
}

impl LineGrammar {
    pub fn new(tab_width: usize) -> Self {
        Self {
            tab_width: tab_width.clamp(1, MAX_TAB_WIDTH),
        }
    }

    pub fn tab_width(&self) -> usize {
        self.tab_width
    }

    /// An ordered marker that can open a list.
    pub fn marker_line<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        self.child_line(line)
            .filter(|m| matches!(m.marker, ItemMarker::Ordered(_)))
    }

    /// A bullet marker that can open a list.
    pub fn bullet_line<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        self.child_line(line)
            .filter(|m| matches!(m.marker, ItemMarker::Bullet(_)))
    }

    /// Any marker at top-level indentation: starts a new item.
    pub fn child_line<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        try_parse_marker_line(line).filter(|m| m.indent < self.tab_width)
    }

    /// Any marker indented by one level: belongs to a nested list.
    pub fn nested_line<'a>(&self, line: &'a str) -> Option<MarkerLine<'a>> {
        try_parse_marker_line(line)
            .filter(|m| m.indent >= self.tab_width && m.indent < 2 * self.tab_width)
    }

    /// Which kind of list a raw block opens, judged by its first line.
    pub fn list_kind(&self, block: &str) -> Option<ListKind> {
        let first_line = block.split('\n').next()?;
        if self.marker_line(first_line).is_some() {
            Some(ListKind::Ordered)
        } else if self.bullet_line(first_line).is_some() {
            Some(ListKind::Bullet)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Bullet,
}

/// One raw block broken into items.
///
/// Each item is the text after its marker plus every continuation line, joined
/// with `\n`. Items that begin with a full tab width of spaces hold nested
/// content for the item before them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListBlock {
    pub kind: ListKind,
    pub items: Vec<String>,
    pub numbering: ListNumbering,
}

fn classify_first_item(
    kind: ListKind,
    marker: ItemMarker<'_>,
    config: &Config,
) -> Option<ListNumbering> {
    match (kind, marker) {
        (ListKind::Ordered, ItemMarker::Ordered(token)) => {
            let numbering = classify_marker(token, config);
            if numbering.is_none() {
                log::debug!("Marker '{}' is unclassifiable, keeping decimal", token);
            }
            numbering
        }
        _ => None,
    }
}

/// Break a raw block into list items and number the list from its first
/// marker.
///
/// The first marker in the block is the only one classified; later markers are
/// taken as they come. A nested-indentation line or a plain line that arrives
/// before any item is promoted to the first top-level item. A promoted plain
/// line has no marker, so the next marker still numbers the list.
pub fn segment(block: &str, kind: ListKind, config: &Config) -> ListBlock {
    let grammar = LineGrammar::new(config.effective_tab_width());
    let nested_indent = " ".repeat(grammar.tab_width());

    let mut items: Vec<String> = Vec::new();
    let mut numbering = None;
    let mut first_marker_seen = false;

    for line in block.split('\n') {
        if let Some(child) = grammar.child_line(line) {
            if !first_marker_seen {
                numbering = classify_first_item(kind, child.marker, config);
                first_marker_seen = true;
            }
            log::debug!("New list item: {:?}", child.marker);
            items.push(child.text.to_string());
        } else if let Some(nested) = grammar.nested_line(line) {
            match items.last_mut() {
                Some(last) if last.starts_with(&nested_indent) => {
                    last.push('\n');
                    last.push_str(line);
                }
                Some(_) => items.push(line.to_string()),
                None => {
                    log::warn!(
                        "Nested list line before any item, promoting to top level: {}",
                        line
                    );
                    numbering = classify_first_item(kind, nested.marker, config);
                    first_marker_seen = true;
                    items.push(nested.text.to_string());
                }
            }
        } else if let Some(last) = items.last_mut() {
            last.push('\n');
            last.push_str(line);
        } else if !line.trim().is_empty() {
            log::warn!("Continuation line before any item, promoting to top level: {}", line);
            items.push(line.trim_start().to_string());
        }
    }

    ListBlock {
        kind,
        items,
        numbering: numbering.unwrap_or_default(),
    }
}
