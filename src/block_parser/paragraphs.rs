use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

use super::utils::emit_text_lines;

/// Emit a raw block as a paragraph-like node (`PARAGRAPH` or `PLAIN`).
pub(crate) fn emit_paragraph(
    builder: &mut GreenNodeBuilder<'static>,
    block: &str,
    kind: SyntaxKind,
) {
    log::debug!("Emitting {:?}: {:?}", kind, block);

    builder.start_node(kind.into());
    emit_text_lines(builder, block.trim_start());
    builder.finish_node();
}
