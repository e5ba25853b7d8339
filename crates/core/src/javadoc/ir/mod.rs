//! Intermediate representation for the generated Java class.
//!
//! Records parsed from the documents are lowered to a small Java AST before
//! any text is produced. The separation keeps the layers independently
//! testable:
//! - `types`: AST nodes (JavaType, JavaParam, ConstField, StubMethod)
//! - `codegen`: parsed records to AST nodes
//! - `emit`: AST nodes to Java source text via the `Emit` trait

mod codegen;
mod emit;
mod types;

pub use codegen::{CONSTANT_NAMESPACE, codegen_constant, codegen_function};
pub use emit::Emit;
pub use types::{ConstField, JavaParam, JavaType, StubMethod};
