use crate::block_parser::BlockParser;
use crate::config::Config;
use crate::syntax::{SyntaxKind, SyntaxNode};

pub fn parse_blocks(input: &str) -> SyntaxNode {
    parse_blocks_with(input, &Config::default())
}

pub fn parse_blocks_with(input: &str, config: &Config) -> SyntaxNode {
    BlockParser::new(input, config).parse()
}

pub fn find_first(node: &SyntaxNode, kind: SyntaxKind) -> Option<SyntaxNode> {
    node.descendants().find(|n| n.kind() == kind)
}

pub fn find_all(node: &SyntaxNode, kind: SyntaxKind) -> Vec<SyntaxNode> {
    node.descendants().filter(|n| n.kind() == kind).collect()
}

pub fn get_blocks(node: &SyntaxNode) -> Vec<SyntaxNode> {
    let document = node
        .children()
        .find(|n| n.kind() == SyntaxKind::DOCUMENT)
        .unwrap();
    document.children().collect()
}

pub fn assert_block_kinds(input: &str, expected: &[SyntaxKind]) {
    let node = parse_blocks(input);
    let blocks = get_blocks(&node);
    let actual: Vec<_> = blocks.iter().map(|n| n.kind()).collect();
    assert_eq!(
        actual, expected,
        "Block kinds did not match for input:\n{}",
        input
    );
}

/// Text of the first direct child token of the given kind
pub fn token_text(node: &SyntaxNode, kind: SyntaxKind) -> Option<String> {
    node.children_with_tokens()
        .filter_map(|it| it.into_token())
        .find(|t| t.kind() == kind)
        .map(|t| t.text().to_string())
}

/// Text of each direct LIST_ITEM child
pub fn item_texts(list: &SyntaxNode) -> Vec<String> {
    list.children()
        .filter(|n| n.kind() == SyntaxKind::LIST_ITEM)
        .map(|item| {
            item.children()
                .filter(|c| matches!(c.kind(), SyntaxKind::PLAIN | SyntaxKind::PARAGRAPH))
                .map(|c| c.text().to_string())
                .collect::<Vec<_>>()
                .join("\n\n")
        })
        .collect()
}

/// Count direct children of a specific kind
pub fn count_children(node: &SyntaxNode, kind: SyntaxKind) -> usize {
    node.children().filter(|n| n.kind() == kind).count()
}
