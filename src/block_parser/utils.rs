//! Shared utilities for block parsing.

use crate::syntax::SyntaxKind;
use rowan::GreenNodeBuilder;

/// Emit the lines of `text` as TEXT tokens separated by NEWLINE tokens.
pub(crate) fn emit_text_lines(builder: &mut GreenNodeBuilder<'static>, text: &str) {
    for (i, line) in text.split('\n').enumerate() {
        if i > 0 {
            builder.token(SyntaxKind::NEWLINE.into(), "\n");
        }
        if !line.is_empty() {
            builder.token(SyntaxKind::TEXT.into(), line);
        }
    }
}

/// Group lines into raw blocks separated by blank lines.
pub(crate) fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.split('\n') {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }

    blocks
}

/// Strip up to `width` leading spaces from every line.
pub(crate) fn dedent(text: &str, width: usize) -> String {
    text.split('\n')
        .map(|line| {
            let spaces = line.bytes().take(width).take_while(|b| *b == b' ').count();
            &line[spaces..]
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Replace tabs with spaces up to the next multiple of `width`.
pub(crate) fn expand_tabs(text: &str, width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut column = 0;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let fill = width - column % width;
                out.extend(std::iter::repeat_n(' ', fill));
                column += fill;
            }
            '\n' => {
                out.push(ch);
                column = 0;
            }
            _ => {
                out.push(ch);
                column += 1;
            }
        }
    }
    out
}
