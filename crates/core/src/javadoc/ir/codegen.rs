//! Lowering of parsed records to Java AST nodes.

use super::types::{ConstField, StubMethod};
use crate::javadoc::signature::{ConstantRecord, FunctionRecord};

/// Namespace that supplies the canonical constant values in generated code.
/// The generated aliases reference it; resolving it is the consumer's
/// concern.
pub const CONSTANT_NAMESPACE: &str = "GL2";

/// Lower a constant record to its alias field.
pub fn codegen_constant(record: &ConstantRecord) -> ConstField {
    ConstField {
        name: record.name.clone(),
        qualifier: CONSTANT_NAMESPACE,
    }
}

/// Lower a completed function record to its forwarding stub.
pub fn codegen_function(record: FunctionRecord) -> StubMethod {
    StubMethod {
        return_type: record.return_type,
        name: record.name,
        params: record.params,
    }
}
