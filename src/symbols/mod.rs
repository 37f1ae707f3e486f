//! Hierarchical document symbols as returned by the host's symbol provider.

use crate::text::{Position, Range};

/// The kind of a document symbol, as reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    File,
    Module,
    Namespace,
    Class,
    Method,
    Property,
    Field,
    Constructor,
    Enum,
    Interface,
    Function,
    Variable,
    Constant,
    Struct,
    Other,
}

/// One node of the symbol hierarchy: a named region of the document with
/// zero or more child symbols nested inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolNode {
    pub name: String,
    pub kind: SymbolKind,
    pub range: Range,
    pub children: Vec<SymbolNode>,
}

impl SymbolNode {
    pub fn new(name: impl Into<String>, kind: SymbolKind, range: Range) -> Self {
        Self {
            name: name.into(),
            kind,
            range,
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<SymbolNode>) -> Self {
        self.children = children;
        self
    }
}

/// Find the deepest symbol whose range encloses `position`.
///
/// Depth-first over the sibling list: the first symbol containing the
/// position wins, and its children are searched before settling for the
/// symbol itself (a method inside a class beats the class).
pub fn deepest_symbol_at(symbols: &[SymbolNode], position: Position) -> Option<&SymbolNode> {
    for symbol in symbols {
        if symbol.range.contains(position) {
            return Some(deepest_symbol_at(&symbol.children, position).unwrap_or(symbol));
        }
    }
    None
}
