//! HTML output for the parsed tree.
//!
//! Ordered lists carry `start` when they do not count from 1 and `type` when
//! they are not decimal. Tight items keep their text inline; nested blocks go
//! on their own lines.

use crate::block_parser::NumberingStyle;
use crate::syntax::{AstNode, List, ListItem, SyntaxKind, SyntaxNode};

/// Serialise a tree produced by [`crate::parse`].
pub fn render_tree(tree: &SyntaxNode) -> String {
    let mut writer = HtmlWriter::default();
    writer.write_node(tree);
    writer.output
}

#[derive(Default)]
struct HtmlWriter {
    output: String,
}

impl HtmlWriter {
    fn write_node(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::ROOT => {
                for child in node.children() {
                    self.write_node(&child);
                }
            }
            SyntaxKind::DOCUMENT => {
                let mut wrote_any = false;
                for child in node.children() {
                    if wrote_any {
                        self.output.push('\n');
                    }
                    self.write_block(&child);
                    wrote_any = true;
                }
                if wrote_any {
                    self.output.push('\n');
                }
            }
            _ => self.write_block(node),
        }
    }

    fn write_block(&mut self, node: &SyntaxNode) {
        match node.kind() {
            SyntaxKind::PARAGRAPH => {
                self.output.push_str("<p>");
                self.write_text(node);
                self.output.push_str("</p>");
            }
            SyntaxKind::PLAIN => self.write_text(node),
            SyntaxKind::ORDERED_LIST | SyntaxKind::BULLET_LIST => {
                if let Some(list) = List::cast(node.clone()) {
                    self.write_list(&list);
                }
            }
            kind => log::warn!("No HTML for {:?} outside its parent", kind),
        }
    }

    fn write_list(&mut self, list: &List) {
        let tag = if list.is_ordered() { "ol" } else { "ul" };

        self.output.push('<');
        self.output.push_str(tag);
        if let Some(start) = list.start() {
            self.output.push_str(&format!(" start=\"{start}\""));
        }
        let style = list.numbering_style();
        if style != NumberingStyle::Decimal {
            self.output
                .push_str(&format!(" type=\"{}\"", style.marker_char()));
        }
        self.output.push_str(">\n");

        for item in list.items() {
            self.write_item(&item);
            self.output.push('\n');
        }

        self.output.push_str("</");
        self.output.push_str(tag);
        self.output.push('>');
    }

    fn write_item(&mut self, item: &ListItem) {
        self.output.push_str("<li>");

        let mut ends_with_block = false;
        for (i, child) in item.syntax().children().enumerate() {
            if i == 0 && child.kind() == SyntaxKind::PLAIN {
                self.write_text(&child);
                ends_with_block = false;
            } else {
                self.output.push('\n');
                self.write_block(&child);
                ends_with_block = true;
            }
        }
        if ends_with_block {
            self.output.push('\n');
        }

        self.output.push_str("</li>");
    }

    fn write_text(&mut self, node: &SyntaxNode) {
        for token in node
            .children_with_tokens()
            .filter_map(|it| it.into_token())
        {
            match token.kind() {
                SyntaxKind::NEWLINE => self.output.push('\n'),
                _ => self
                    .output
                    .push_str(&html_escape::encode_text(token.text())),
            }
        }
    }
}
