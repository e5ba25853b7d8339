//! File-level orchestration of a generation run.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::common::Timer;
use crate::error::GenerateError;
use crate::javadoc::{self, assembly::Assembler, dedup::SeenRecords};

/// Counters describing a completed run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    /// Documents processed, in input order.
    pub documents: usize,
    /// Constant aliases emitted.
    pub constants: usize,
    /// Forwarding stubs emitted.
    pub functions: usize,
    /// Records suppressed as duplicates.
    pub duplicates: usize,
}

/// Generate the pass-through class from `inputs` into `output`.
///
/// Documents are streamed one at a time, in order, and the whole run is
/// strictly sequential. The output file is created up front, owned for the
/// duration of the run, and closed on every exit path; the first I/O
/// failure aborts with no retry.
pub fn generate(inputs: &[PathBuf], output: &Path) -> Result<GenerateReport, GenerateError> {
    let timer = Timer::start("generate");
    let sink = output.display().to_string();
    let file = File::create(output).map_err(|e| GenerateError::Write {
        sink: sink.clone(),
        source: e,
    })?;
    let mut asm = Assembler::new(BufWriter::new(file), sink);
    let mut seen = SeenRecords::new();
    let mut report = GenerateReport::default();

    asm.prologue()?;
    for input in inputs {
        let document = document_name(input);
        info!("processing {document}");
        let reader = File::open(input)
            .map(BufReader::new)
            .map_err(|e| GenerateError::Read {
                document: input.display().to_string(),
                source: e,
            })?;
        asm.banner(&document)?;
        let counts = javadoc::emit_document(&document, reader, &mut asm, &mut seen)?;
        report.documents += 1;
        report.constants += counts.constants;
        report.functions += counts.functions;
    }
    asm.epilogue()?;
    asm.finish()?;

    report.duplicates = seen.skipped();
    timer.finish();
    info!(
        documents = report.documents,
        constants = report.constants,
        functions = report.functions,
        duplicates = report.duplicates,
        "generation complete"
    );
    Ok(report)
}

/// Banner name for an input: the file name when there is one, the full
/// path otherwise.
fn document_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
