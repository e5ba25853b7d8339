//! Javadoc-to-Java generation pipeline.
//!
//! This module turns javadoc-generated `GL*.html` pages into the body of the
//! generated pass-through class:
//! 1. Scan: classify each line (`scan`)
//! 2. Accumulate: rebuild multi-line signatures (`signature`)
//! 3. Codegen: completed records to Java AST nodes (`ir`)
//! 4. Emit: AST nodes to Java text (`ir::Emit`)
//! 5. Assemble: fixed prologue, per-document banners, fixed epilogue
//!    (`assembly`)
//!
//! Documents are streamed line by line and never fully buffered; records are
//! emitted in document and line order, the moment they complete.

pub mod assembly;
pub mod dedup;
pub mod ir;
pub mod scan;
pub mod signature;

use std::io::{BufRead, Write};

use crate::error::GenerateError;
use assembly::Assembler;
use dedup::SeenRecords;
use ir::{codegen_constant, codegen_function};
use signature::{Record, SignatureState};

/// Per-document record counts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentCounts {
    /// Constant aliases emitted from this document.
    pub constants: usize,
    /// Forwarding stubs emitted from this document.
    pub functions: usize,
}

/// Stream one document through the pipeline, emitting its records through
/// the assembler. `document` is the display name used in banners and
/// errors. Reads block until a line or end of input is available; the first
/// I/O failure aborts.
pub fn emit_document<R: BufRead, W: Write>(
    document: &str,
    mut reader: R,
    asm: &mut Assembler<W>,
    seen: &mut SeenRecords,
) -> Result<DocumentCounts, GenerateError> {
    let mut counts = DocumentCounts::default();
    let mut state = SignatureState::Idle;
    let mut line = String::new();
    let mut lineno = 0usize;

    loop {
        line.clear();
        let n = reader
            .read_line(&mut line)
            .map_err(|e| GenerateError::Read {
                document: document.to_string(),
                source: e,
            })?;
        if n == 0 {
            break;
        }
        lineno += 1;
        match state.feed(line.trim_end_matches(['\n', '\r']), lineno) {
            Some(Record::Constant(record)) => {
                if seen.insert_constant(&record.name) {
                    asm.record(&codegen_constant(&record))?;
                    counts.constants += 1;
                }
            }
            Some(Record::Function(record)) => {
                if seen.insert_function(&record) {
                    asm.record(&codegen_function(record))?;
                    counts.functions += 1;
                }
            }
            None => {}
        }
    }

    state.end_of_document(document)?;
    Ok(counts)
}

/// Run the whole pipeline in memory over `(name, content)` documents and
/// return the generated Java source.
pub fn generate_to_string(documents: &[(&str, &str)]) -> Result<String, GenerateError> {
    let mut asm = Assembler::new(Vec::new(), "<memory>");
    let mut seen = SeenRecords::new();

    asm.prologue()?;
    for (name, content) in documents {
        asm.banner(name)?;
        emit_document(name, content.as_bytes(), &mut asm, &mut seen)?;
    }
    asm.epilogue()?;

    let bytes = asm.finish()?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
