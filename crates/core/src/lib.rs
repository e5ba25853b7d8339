//! Turns JOGL's javadoc-generated `GL*.html` reference pages into a single
//! Java class of OpenGL constant aliases and pass-through functions.
//!
//! The pipeline is:
//! 1. Scan: classify each document line (`javadoc::scan`)
//! 2. Accumulate: rebuild signatures that span several lines
//!    (`javadoc::signature`)
//! 3. Codegen: completed records to a small Java AST (`javadoc::ir`)
//! 4. Emit: AST to Java source text via the `Emit` trait
//! 5. Assemble: fixed prologue, per-document banners, fixed epilogue
//!    (`javadoc::assembly`)
//!
//! [`generator::generate`] drives the pipeline over real files;
//! [`javadoc::generate_to_string`] runs it fully in memory.

pub mod config;
pub mod error;
pub mod generator;
pub mod javadoc;

mod common;

pub use config::GenerateConfig;
pub use error::GenerateError;
pub use generator::{GenerateReport, generate};
