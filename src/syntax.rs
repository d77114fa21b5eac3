//! Output tree for rendered lists and the typed wrappers over it.

mod ast;
mod kind;
mod lists;

pub use ast::AstNode;
pub use kind::{FancyListLanguage, SyntaxKind};
pub use lists::{List, ListItem};

pub type SyntaxNode = rowan::SyntaxNode<FancyListLanguage>;
pub type SyntaxToken = rowan::SyntaxToken<FancyListLanguage>;
