//! Java code emission via the Emit trait.
//!
//! Each AST node renders itself to a string; emission is purely mechanical,
//! all decisions were made during scanning and codegen. Nodes are only ever
//! emitted whole.

use super::types::{ConstField, JavaParam, JavaType, StubMethod};

/// Trait for emitting Java source text from AST nodes.
pub trait Emit {
    /// Convert the AST node to its Java string representation.
    fn emit(&self) -> String;
}

impl Emit for JavaType {
    fn emit(&self) -> String {
        let mut out = self.name.clone();
        for _ in 0..self.arrays {
            out.push_str("[]");
        }
        out
    }
}

impl Emit for JavaParam {
    fn emit(&self) -> String {
        format!("{} {}", self.ty.emit(), self.name)
    }
}

impl Emit for ConstField {
    fn emit(&self) -> String {
        format!(
            "  public static final int {}\n    = {}.{};\n",
            self.name, self.qualifier, self.name
        )
    }
}

impl Emit for StubMethod {
    fn emit(&self) -> String {
        let params = self
            .params
            .iter()
            .map(Emit::emit)
            .collect::<Vec<_>>()
            .join(", ");
        let args = self
            .params
            .iter()
            .map(|p| p.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let call = if self.return_type.is_void() {
            format!("gl().{}({args});", self.name)
        } else {
            format!("return gl().{}({args});", self.name)
        };
        format!(
            "  public static {} {}({params}) {{\n    {call}\n  }}\n",
            self.return_type.emit(),
            self.name
        )
    }
}
