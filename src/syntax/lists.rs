//! List AST node wrappers.
//!
//! A list is either ordered (`ORDERED_LIST`) or bulleted (`BULLET_LIST`).
//! Ordered lists may carry a `LIST_START` token ahead of their items and a
//! `LIST_TYPE` token after them; a list without those tokens counts from 1 in
//! decimal.

use super::ast::support;
use super::{AstNode, SyntaxKind, SyntaxNode};
use crate::block_parser::NumberingStyle;

pub struct List(SyntaxNode);

impl AstNode for List {
    fn kind() -> SyntaxKind {
        SyntaxKind::ORDERED_LIST
    }

    fn can_cast(kind: SyntaxKind) -> bool {
        matches!(kind, SyntaxKind::ORDERED_LIST | SyntaxKind::BULLET_LIST)
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl List {
    pub fn is_ordered(&self) -> bool {
        self.0.kind() == SyntaxKind::ORDERED_LIST
    }

    /// Returns true if the items wrap their text in PARAGRAPH nodes.
    pub fn is_loose(&self) -> bool {
        self.items().any(|item| item.is_loose())
    }

    /// Returns an iterator over the list items (LIST_ITEM nodes).
    pub fn items(&self) -> impl Iterator<Item = ListItem> + '_ {
        support::children(&self.0)
    }

    /// The numbering style stamped on the list, decimal when absent.
    pub fn numbering_style(&self) -> NumberingStyle {
        support::token(&self.0, SyntaxKind::LIST_TYPE)
            .and_then(|tok| tok.text().chars().next())
            .and_then(NumberingStyle::from_marker_char)
            .unwrap_or_default()
    }

    /// The explicit start index, if one was emitted.
    pub fn start(&self) -> Option<u64> {
        support::token(&self.0, SyntaxKind::LIST_START).and_then(|tok| tok.text().parse().ok())
    }
}

pub struct ListItem(SyntaxNode);

impl AstNode for ListItem {
    fn kind() -> SyntaxKind {
        SyntaxKind::LIST_ITEM
    }

    fn can_cast(kind: SyntaxKind) -> bool {
        kind == SyntaxKind::LIST_ITEM
    }

    fn cast(syntax: SyntaxNode) -> Option<Self> {
        if Self::can_cast(syntax.kind()) {
            Some(Self(syntax))
        } else {
            None
        }
    }

    fn syntax(&self) -> &SyntaxNode {
        &self.0
    }
}

impl ListItem {
    /// Returns true if this list item contains PARAGRAPH nodes (loose style).
    pub fn is_loose(&self) -> bool {
        self.0
            .children()
            .any(|child| child.kind() == SyntaxKind::PARAGRAPH)
    }

    /// Text of the item's own paragraphs, excluding nested lists.
    pub fn text(&self) -> String {
        self.0
            .children()
            .filter(|child| matches!(child.kind(), SyntaxKind::PLAIN | SyntaxKind::PARAGRAPH))
            .map(|child| child.text().to_string())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Lists nested directly inside this item.
    pub fn nested_lists(&self) -> impl Iterator<Item = List> + '_ {
        support::children(&self.0)
    }
}
