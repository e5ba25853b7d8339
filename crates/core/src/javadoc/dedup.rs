//! First-wins duplicate suppression across input documents.
//!
//! The JOGL interfaces redeclare many constants and functions; emitting all
//! of them would leave the generated class full of colliding declarations.
//! The first occurrence is kept, later ones are skipped and reported.

use std::collections::HashSet;

use crate::javadoc::ir::Emit;
use crate::javadoc::signature::FunctionRecord;

/// Names and signatures already emitted in this run.
#[derive(Debug, Default)]
pub struct SeenRecords {
    constants: HashSet<String>,
    functions: HashSet<String>,
    skipped: usize,
}

impl SeenRecords {
    /// Start with nothing seen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a constant name. Returns false, with a warning, when the name
    /// was already emitted.
    pub fn insert_constant(&mut self, name: &str) -> bool {
        if self.constants.insert(name.to_string()) {
            true
        } else {
            tracing::warn!("duplicate constant {name} skipped");
            self.skipped += 1;
            false
        }
    }

    /// Record a function signature. Overloads with different parameter
    /// types are distinct; only an identical name-plus-parameter-types
    /// signature counts as a duplicate.
    pub fn insert_function(&mut self, record: &FunctionRecord) -> bool {
        let key = signature_key(record);
        if self.functions.insert(key.clone()) {
            true
        } else {
            tracing::warn!("duplicate function {key} skipped");
            self.skipped += 1;
            false
        }
    }

    /// Number of records suppressed as duplicates so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

fn signature_key(record: &FunctionRecord) -> String {
    let types = record
        .params
        .iter()
        .map(|p| p.ty.emit())
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({types})", record.name)
}
