//! Signature accumulation across document lines.
//!
//! A function declaration may span any number of lines: the opening line
//! carries the return type, the name, and possibly a first parameter; each
//! following line carries at most one more parameter; the closing line ends
//! with the terminator suffix. The accumulator is an explicit two-state
//! machine so the fragile terminator handling stays in one testable place.

use crate::error::GenerateError;
use crate::javadoc::ir::{JavaParam, JavaType};
use crate::javadoc::scan;

/// A parsed constant declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantRecord {
    /// Constant name (`GL_*`), as captured.
    pub name: String,
}

/// A fully accumulated function signature. Never observed partially: the
/// accumulator only hands out completed records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRecord {
    /// Function name, as captured from the opening line.
    pub name: String,
    /// Declared return type.
    pub return_type: JavaType,
    /// Parameters in the order the document declared them.
    pub params: Vec<JavaParam>,
}

/// One unit of parsed input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    /// A constant declaration.
    Constant(ConstantRecord),
    /// A complete function signature.
    Function(FunctionRecord),
}

/// A function signature under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialSignature {
    /// Function name captured from the opening line.
    pub name: String,
    /// Declared return type.
    pub return_type: JavaType,
    /// Parameters accumulated so far.
    pub params: Vec<JavaParam>,
    /// 1-based line number of the opening line, for error reporting.
    pub opened_at: usize,
}

impl PartialSignature {
    fn into_record(self) -> FunctionRecord {
        FunctionRecord {
            name: self.name,
            return_type: self.return_type,
            params: self.params,
        }
    }
}

/// Accumulator state. `Idle` between declarations, `Accumulating` while a
/// parameter list is still open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureState {
    /// Not inside a function declaration.
    Idle,
    /// A declaration has opened and its terminator has not been seen.
    Accumulating(PartialSignature),
}

impl SignatureState {
    /// Feed one document line (newline already stripped) through the
    /// machine, yielding a completed record when one finishes on this line.
    ///
    /// Idle lines are classified in priority order: constant, then function
    /// open, then nothing. While accumulating, only parameter capture and
    /// the terminator apply; anything else is surrounding prose and leaves
    /// the partial signature untouched.
    pub fn feed(&mut self, line: &str, lineno: usize) -> Option<Record> {
        match self {
            SignatureState::Idle => {
                if let Some(name) = scan::constant_name(line) {
                    return Some(Record::Constant(ConstantRecord { name }));
                }
                if let Some(open) = scan::function_open(line) {
                    let mut partial = PartialSignature {
                        name: open.name,
                        return_type: open.return_type,
                        params: Vec::new(),
                        opened_at: lineno,
                    };
                    partial.params.extend(open.first_param);
                    // A zero- or one-parameter declaration can terminate on
                    // its own opening line.
                    if scan::is_signature_end(line) {
                        return Some(Record::Function(partial.into_record()));
                    }
                    *self = SignatureState::Accumulating(partial);
                }
                None
            }
            SignatureState::Accumulating(partial) => {
                if let Some(param) = scan::parameter(line) {
                    partial.params.push(param);
                }
                if !scan::is_signature_end(line) {
                    return None;
                }
                match std::mem::replace(self, SignatureState::Idle) {
                    SignatureState::Accumulating(done) => {
                        Some(Record::Function(done.into_record()))
                    }
                    SignatureState::Idle => None,
                }
            }
        }
    }

    /// Check that the document did not end mid-signature.
    pub fn end_of_document(self, document: &str) -> Result<(), GenerateError> {
        match self {
            SignatureState::Idle => Ok(()),
            SignatureState::Accumulating(partial) => Err(GenerateError::UnterminatedSignature {
                document: document.to_string(),
                line: partial.opened_at,
                name: partial.name,
            }),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn feed_all(lines: &[&str]) -> (Vec<Record>, SignatureState) {
        let mut state = SignatureState::Idle;
        let mut records = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            records.extend(state.feed(line, i + 1));
        }
        (records, state)
    }

    #[test]
    fn test_constant_completes_immediately() {
        let (records, state) = feed_all(&["<pre>static final&nbsp;int GL_LINES</pre>"]);
        assert_eq!(
            records,
            vec![Record::Constant(ConstantRecord {
                name: "GL_LINES".into()
            })]
        );
        assert_eq!(state, SignatureState::Idle);
    }

    #[test]
    fn test_single_line_signature() {
        let (records, state) = feed_all(&["<pre>void&nbsp;glClear(int&nbsp;mask)</pre>"]);
        let Some(Record::Function(record)) = records.first() else {
            panic!("expected a function record, got {records:?}");
        };
        assert_eq!(record.name, "glClear");
        assert_eq!(record.params.len(), 1);
        assert_eq!(state, SignatureState::Idle);
    }

    #[test]
    fn test_zero_parameter_signature_terminates_on_opening_line() {
        let (records, state) = feed_all(&["<pre>void&nbsp;glEnd()</pre>"]);
        let Some(Record::Function(record)) = records.first() else {
            panic!("expected a function record, got {records:?}");
        };
        assert_eq!(record.name, "glEnd");
        assert!(record.params.is_empty());
        assert_eq!(state, SignatureState::Idle);
    }

    #[test]
    fn test_multi_line_signature_keeps_parameter_order() {
        let (records, state) = feed_all(&[
            "<pre>void&nbsp;glBlendFuncSeparate(int&nbsp;srcRGB,",
            "                   int&nbsp;dstRGB,",
            "                   int&nbsp;srcAlpha,",
            "                   int&nbsp;dstAlpha)</pre>",
        ]);
        let Some(Record::Function(record)) = records.first() else {
            panic!("expected a function record, got {records:?}");
        };
        assert_eq!(record.name, "glBlendFuncSeparate");
        let names: Vec<_> = record.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["srcRGB", "dstRGB", "srcAlpha", "dstAlpha"]);
        assert_eq!(state, SignatureState::Idle);
    }

    #[test]
    fn test_prose_does_not_disturb_accumulation() {
        let (records, _) = feed_all(&[
            "<pre>void&nbsp;glBlendFunc(int&nbsp;sfactor,",
            "Specifies how the red, green, blue, and alpha factors combine.",
            "                   int&nbsp;dfactor)</pre>",
        ]);
        let Some(Record::Function(record)) = records.first() else {
            panic!("expected a function record, got {records:?}");
        };
        let names: Vec<_> = record.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["sfactor", "dfactor"]);
    }

    #[test]
    fn test_prose_in_idle_state_yields_nothing() {
        let (records, state) = feed_all(&["Some prose.", "<h2>Field Detail</h2>", ""]);
        assert!(records.is_empty());
        assert_eq!(state, SignatureState::Idle);
    }

    #[test]
    fn test_unterminated_signature_names_document_and_line() {
        let (records, state) = feed_all(&[
            "prose before",
            "<pre>void&nbsp;glBlendFunc(int&nbsp;sfactor,",
            "                   int&nbsp;dfactor,",
        ]);
        assert!(records.is_empty());
        let err = state.end_of_document("GL.html").unwrap_err();
        match err {
            GenerateError::UnterminatedSignature {
                document,
                line,
                name,
            } => {
                assert_eq!(document, "GL.html");
                assert_eq!(line, 2);
                assert_eq!(name, "glBlendFunc");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_end_of_document_while_idle_is_ok() {
        let (_, state) = feed_all(&["<pre>void&nbsp;glEnd()</pre>"]);
        assert!(state.end_of_document("GL.html").is_ok());
    }
}
