//! Node schema registry.
//!
//! One [`SchemaEntry`] per facade type: the semantic type name and the set
//! of tree kinds it accepts. The entries are emitted by the same
//! declarative macro invocation that generates the facade types
//! (`src/ast/types.rs`), so relation targets are checked by the compiler
//! and the table can never drift from the generated code.
//!
//! The registry is fixed at build time. [`validate`] re-checks the
//! data-level invariants the compiler cannot see and is exercised by the
//! test suite, not on any runtime path.

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::syntax::SyntaxKind;

/// Declarative description of one facade type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaEntry {
    /// Semantic type name, identical to the generated facade type name.
    pub name: &'static str,
    /// Tree kinds the facade accepts. More than one kind is deliberate
    /// surface variation of a single semantic type (timestamp variants,
    /// standard vs rule table rows).
    pub kinds: &'static [SyntaxKind],
}

/// The full static table, one entry per facade type.
pub fn registry() -> &'static [SchemaEntry] {
    crate::ast::REGISTRY
}

/// Look up an entry by its semantic type name.
pub fn lookup(name: &str) -> Option<&'static SchemaEntry> {
    static BY_NAME: Lazy<HashMap<&'static str, &'static SchemaEntry>> =
        Lazy::new(|| registry().iter().map(|entry| (entry.name, entry)).collect());
    BY_NAME.get(name).copied()
}

/// Data-level invariant violations in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// An entry declares no accepted kinds.
    EmptyKindSet { name: &'static str },
    /// Two entries share a semantic type name.
    DuplicateName { name: &'static str },
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemaError::EmptyKindSet { name } => {
                write!(f, "schema entry `{name}` accepts no kinds")
            }
            SchemaError::DuplicateName { name } => {
                write!(f, "schema entry `{name}` is declared twice")
            }
        }
    }
}

impl std::error::Error for SchemaError {}

/// Check registry invariants: every entry accepts at least one kind and no
/// semantic type name appears twice.
pub fn validate() -> Result<(), SchemaError> {
    let mut seen = HashMap::new();
    for entry in registry() {
        if entry.kinds.is_empty() {
            return Err(SchemaError::EmptyKindSet { name: entry.name });
        }
        if seen.insert(entry.name, entry).is_some() {
            return Err(SchemaError::DuplicateName { name: entry.name });
        }
    }
    Ok(())
}
