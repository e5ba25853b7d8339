//! Java AST nodes for the generated pass-through class.

/// A Java type: base name plus array dimensions (`int`, `int[]`, `byte[][]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaType {
    /// Base type name, without array brackets.
    pub name: String,
    /// Number of `[]` suffixes.
    pub arrays: usize,
}

impl JavaType {
    /// Build a type from a base name and array dimension count.
    pub fn new(name: &str, arrays: usize) -> Self {
        Self {
            name: name.to_string(),
            arrays,
        }
    }

    /// True for the `void` pseudo-type: the stub forwards the call and
    /// returns nothing.
    pub fn is_void(&self) -> bool {
        self.arrays == 0 && self.name == "void"
    }
}

/// A named, typed method parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JavaParam {
    /// Parameter type.
    pub ty: JavaType,
    /// Parameter name, preserved from the document.
    pub name: String,
}

/// A constant alias field whose value is a qualified reference into the
/// external constants namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstField {
    /// Constant name (`GL_*`).
    pub name: String,
    /// Namespace qualifying the reference on the right-hand side.
    pub qualifier: &'static str,
}

/// A static pass-through method: identical signature, body forwards every
/// argument, in order and untransformed, to the live binding object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubMethod {
    /// Declared return type.
    pub return_type: JavaType,
    /// Method name, identical in declaration and forwarding call.
    pub name: String,
    /// Parameters in document order.
    pub params: Vec<JavaParam>,
}
