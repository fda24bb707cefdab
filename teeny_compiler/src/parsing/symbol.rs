use crate::error::{CompileError, CompileResult};
use smol_str::SmolStr;
use std::collections::BTreeSet;

/// Names known to the program being compiled.
///
/// There is a single global scope. Labels and variables
/// live in separate namespaces.
#[derive(Debug, Default)]
pub struct SymbolTable {
    variables: BTreeSet<SmolStr>,
    labels: BTreeSet<SmolStr>,
    /// Targets of `GOTO`, which may be declared later in the source.
    jumps: BTreeSet<SmolStr>,
}

impl SymbolTable {
    /// Returns `true` if this is the first time the variable is declared.
    #[inline]
    pub fn declare_variable(&mut self, name: &SmolStr) -> bool {
        self.variables.insert(name.clone())
    }

    #[inline]
    pub fn contains_variable(&self, name: &str) -> bool {
        self.variables.contains(name)
    }

    pub fn declare_label(&mut self, name: &SmolStr) -> CompileResult<()> {
        if self.labels.insert(name.clone()) {
            Ok(())
        } else {
            Err(CompileError::DuplicateLabel(name.clone()))
        }
    }

    #[inline]
    pub fn contains_label(&self, name: &str) -> bool {
        self.labels.contains(name)
    }

    #[inline]
    pub fn reference_label(&mut self, name: &SmolStr) {
        self.jumps.insert(name.clone());
    }

    /// Jump targets that were never declared, in sorted order.
    pub fn undeclared_labels(&self) -> impl Iterator<Item = &SmolStr> {
        self.jumps.difference(&self.labels)
    }

    /// Reconcile jump targets against declared labels.
    ///
    /// Only meaningful once the whole program has been consumed.
    pub fn check_labels(&self) -> CompileResult<()> {
        match self.undeclared_labels().next() {
            Some(name) => Err(CompileError::UndeclaredLabel(name.clone())),
            None => Ok(()),
        }
    }
}
