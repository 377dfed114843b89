use std::{collections::HashMap, fmt::Display};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

/// What a name was declared as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdKind {
    Constant,
    Variable,
}

impl Display for IdKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdKind::Constant => write!(f, "constant"),
            IdKind::Variable => write!(f, "variable"),
        }
    }
}

/// Attributes recorded for a declared name.
#[derive(Debug, Clone, PartialEq)]
pub struct IdAttrs {
    pub kind: IdKind,
    /// Where the name was declared
    pub position: Position,
    /// Storage slot, assigned in declaration order starting at 0
    pub offset: usize,
}

/// The single, global scope of a program. Names are case-sensitive and are
/// never removed or overwritten once declared.
#[derive(Debug, Default)]
pub struct SymbolTable {
    lookup: HashMap<String, IdAttrs>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            lookup: HashMap::new(),
        }
    }

    /// Declares `name`, giving it the next free offset.
    ///
    /// A second declaration of the same name fails and leaves the existing
    /// entry untouched; the error sits at `position`.
    pub fn insert(&mut self, name: &str, kind: IdKind, position: Position) -> Result<&IdAttrs, Error> {
        if let Some(existing) = self.lookup.get(name) {
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    name: name.to_string(),
                    kind,
                    existing_kind: existing.kind,
                },
                position,
            ));
        }

        let offset = self.size();
        let attrs: &IdAttrs = self.lookup.entry(name.to_string()).or_insert(IdAttrs {
            kind,
            position,
            offset,
        });

        Ok(attrs)
    }

    pub fn lookup(&self, name: &str) -> Option<&IdAttrs> {
        self.lookup.get(name)
    }

    pub fn is_defined(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Number of declared names, which is also the next offset to hand out.
    pub fn size(&self) -> usize {
        self.lookup.len()
    }

    /// Declared names ordered by offset.
    pub fn names(&self) -> Vec<&str> {
        let mut entries: Vec<(&String, &IdAttrs)> = self.lookup.iter().collect();
        entries.sort_by_key(|(_, attrs)| attrs.offset);

        entries.into_iter().map(|(name, _)| name.as_str()).collect()
    }
}
