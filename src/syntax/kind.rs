//! Syntax kinds and language definition for the rendered list tree.

use rowan::Language;

#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u16)]
pub enum SyntaxKind {
    // Tokens
    TEXT = 0,
    NEWLINE,
    LIST_START, // start index of an ordered list, e.g. 5
    LIST_TYPE,  // numbering style marker: a, A, i or I

    // Composite nodes
    ROOT,
    DOCUMENT,
    PARAGRAPH,
    PLAIN, // item text of a tight list
    ORDERED_LIST,
    BULLET_LIST,
    LIST_ITEM,
}

impl SyntaxKind {
    const LAST: SyntaxKind = SyntaxKind::LIST_ITEM;
}

impl From<SyntaxKind> for rowan::SyntaxKind {
    fn from(kind: SyntaxKind) -> Self {
        Self(kind as u16)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FancyListLanguage {}

impl Language for FancyListLanguage {
    type Kind = SyntaxKind;

    fn kind_from_raw(raw: rowan::SyntaxKind) -> Self::Kind {
        assert!(raw.0 <= SyntaxKind::LAST as u16);
        unsafe { std::mem::transmute::<u16, SyntaxKind>(raw.0) }
    }

    fn kind_to_raw(kind: Self::Kind) -> rowan::SyntaxKind {
        kind.into()
    }
}
