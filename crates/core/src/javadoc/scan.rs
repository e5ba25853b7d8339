//! Line recognizers for javadoc-generated `GL*.html` pages.
//!
//! These patterns are coupled to the exact markup javadoc produces for the
//! JOGL `GL*` interfaces; if that format changes, they change with it. Each
//! recognizer pairs a cheap substring pre-test with a capturing pattern. A
//! line that passes the pre-test but fails capture yields no record — it is
//! skipped like any other non-matching line, never treated as an error.

use regex::Regex;
use std::sync::LazyLock;

use crate::javadoc::ir::{JavaParam, JavaType};

// Patterns cannot fail to compile at run time: they are fixed literals.
#[allow(clippy::unwrap_used)]
fn pattern(re: &str) -> Regex {
    Regex::new(re).unwrap()
}

/// Captures the constant name out of `... final&nbsp;int GL_NAME</pre>`.
static CONSTANT_NAME: LazyLock<Regex> = LazyLock::new(|| pattern(r"final&nbsp;int (GL_\w*)</pre>"));

/// Captures return type (with optional `</a>` tail from a javadoc link and
/// optional `[]` suffixes) and function name off an opening line.
static FUNCTION_OPEN: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(\w+)(?:</a>)?((?:\[\])*)&nbsp;(\w+)\("));

/// Captures one `type&nbsp;name` pair followed by `,` or `)`.
static PARAMETER: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(\w+)(?:</a>)?((?:\[\])*)&nbsp;(\w+)[,)]"));

/// Name, return type, and optional first parameter captured from a
/// function's opening line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionOpen {
    /// Function name.
    pub name: String,
    /// Declared return type.
    pub return_type: JavaType,
    /// First parameter, when the opening line already carries one.
    pub first_param: Option<JavaParam>,
}

/// Recognize a constant declaration line and capture its name.
pub fn constant_name(line: &str) -> Option<String> {
    if !line.contains("static final&nbsp;int GL_") {
        return None;
    }
    let caps = CONSTANT_NAME.captures(line)?;
    Some(caps[1].to_string())
}

/// Recognize the opening line of a function declaration.
pub fn function_open(line: &str) -> Option<FunctionOpen> {
    if !line.starts_with("<pre>") || !(line.contains("&nbsp;gl") || line.contains("&nbsp;is")) {
        return None;
    }
    let caps = FUNCTION_OPEN.captures(line)?;
    Some(FunctionOpen {
        name: caps[3].to_string(),
        return_type: JavaType::new(&caps[1], array_dims(&caps[2])),
        first_param: parameter(line),
    })
}

/// Recognize one `(type, name)` parameter pair on a line.
pub fn parameter(line: &str) -> Option<JavaParam> {
    let caps = PARAMETER.captures(line)?;
    Some(JavaParam {
        ty: JavaType::new(&caps[1], array_dims(&caps[2])),
        name: caps[3].to_string(),
    })
}

/// Test whether a line terminates a parameter list.
///
/// A fixed-suffix match, exactly as the reference tool does it: markup
/// reordered onto the closing line is not recognized as a terminator.
pub fn is_signature_end(line: &str) -> bool {
    line.ends_with(")</pre>")
}

fn array_dims(suffix: &str) -> usize {
    suffix.len() / 2
}
