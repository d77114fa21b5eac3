//! Emission of segmented list blocks into the output tree.
//!
//! Consecutive list blocks of the same kind, and blocks indented under a
//! list, form one list. The numbering comes from the first block only.

use rowan::GreenNodeBuilder;

use crate::config::Config;
use crate::syntax::SyntaxKind;

use super::lists::{LineGrammar, ListKind, segment};
use super::markers::{ListNumbering, NumberingStyle};
use super::utils::dedent;
use super::{Container, parse_blocks};

/// One rendered item: its own text plus dedented nested chunks.
#[derive(Debug, Default)]
struct ItemEntry {
    head: String,
    children: Vec<String>,
}

/// Pair nested entries with the item before them.
fn group_items(items: Vec<String>, tab_width: usize, entries: &mut Vec<ItemEntry>) {
    let nested_indent = " ".repeat(tab_width);

    for item in items {
        if item.starts_with(&nested_indent) {
            let chunk = dedent(&item, tab_width);
            match entries.last_mut() {
                Some(entry) => entry.children.push(chunk),
                None => entries.push(ItemEntry {
                    head: chunk,
                    children: Vec::new(),
                }),
            }
        } else {
            entries.push(ItemEntry {
                head: item,
                children: Vec::new(),
            });
        }
    }
}

/// Try to parse a list starting at `blocks[pos]`.
/// Returns the index of the first block after the list.
pub(crate) fn try_parse_list(
    blocks: &[String],
    pos: usize,
    builder: &mut GreenNodeBuilder<'static>,
    config: &Config,
    depth: usize,
) -> Option<usize> {
    let grammar = LineGrammar::new(config.effective_tab_width());
    let tab_width = grammar.tab_width();
    let first = blocks.get(pos)?;
    let kind = grammar.list_kind(first)?;

    let block = segment(first, kind, config);
    log::debug!(
        "List block at {}: {:?} with {} entries",
        pos,
        block.numbering,
        block.items.len()
    );

    let numbering = block.numbering;
    let mut entries = Vec::new();
    group_items(block.items, tab_width, &mut entries);

    let nested_indent = " ".repeat(tab_width);
    let mut loose = false;
    let mut next = pos + 1;

    while let Some(sibling) = blocks.get(next) {
        if grammar.list_kind(sibling) == Some(kind) {
            // Later blocks add items but never renumber the list.
            let more = segment(sibling, kind, config);
            group_items(more.items, tab_width, &mut entries);
        } else if sibling.starts_with(&nested_indent)
            && let Some(entry) = entries.last_mut()
        {
            entry.children.push(dedent(sibling, tab_width));
        } else {
            break;
        }
        loose = true;
        next += 1;
    }

    emit_list(builder, kind, numbering, &entries, loose, config, depth + 1);
    Some(next)
}

/// Emit the list node, its items, and finally its numbering style.
///
/// `depth` is the nesting level of the items' contents, this list included.
fn emit_list(
    builder: &mut GreenNodeBuilder<'static>,
    kind: ListKind,
    numbering: ListNumbering,
    entries: &[ItemEntry],
    loose: bool,
    config: &Config,
    depth: usize,
) {
    let node_kind = match kind {
        ListKind::Ordered => SyntaxKind::ORDERED_LIST,
        ListKind::Bullet => SyntaxKind::BULLET_LIST,
    };
    builder.start_node(node_kind.into());

    if kind == ListKind::Ordered && config.extensions.startnum && numbering.start != 1 {
        builder.token(SyntaxKind::LIST_START.into(), &numbering.start.to_string());
    }

    let container = if loose {
        Container::LooseItem
    } else {
        Container::TightItem
    };

    for entry in entries {
        builder.start_node(SyntaxKind::LIST_ITEM.into());
        parse_blocks(builder, &entry.head, config, container, depth);
        for child in &entry.children {
            parse_blocks(builder, child, config, container, depth);
        }
        builder.finish_node();
    }

    if kind == ListKind::Ordered {
        stamp_numbering_style(builder, numbering.style);
    }

    builder.finish_node();
}

/// Attach the style marker to the open list node, unless it is decimal.
fn stamp_numbering_style(builder: &mut GreenNodeBuilder<'static>, style: NumberingStyle) {
    if style == NumberingStyle::Decimal {
        return;
    }
    builder.token(
        SyntaxKind::LIST_TYPE.into(),
        style.marker_char().encode_utf8(&mut [0; 4]),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_entries_attach_to_previous_item() {
        let mut entries = Vec::new();
        group_items(
            vec![
                "outer".to_string(),
                "    a. inner\n    b. more".to_string(),
                "next".to_string(),
            ],
            4,
            &mut entries,
        );
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].head, "outer");
        assert_eq!(entries[0].children, vec!["a. inner\nb. more"]);
        assert_eq!(entries[1].head, "next");
        assert!(entries[1].children.is_empty());
    }

    #[test]
    fn nested_entry_without_item_becomes_one() {
        let mut entries = Vec::new();
        group_items(vec!["    - stray".to_string()], 4, &mut entries);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].head, "- stray");
    }
}
