//! Output assembly: the fixed prologue and epilogue around per-document
//! records.
//!
//! The generated class reaches the live GL binding object exclusively
//! through its private `gl()` accessor; the accessor reads the `GlRuntime`
//! installed with `bind(...)` rather than consulting any ambient context.
//! The line separator is always `\n` so re-runs produce byte-identical
//! output on every platform.

use std::io::Write;

use crate::error::GenerateError;
use crate::javadoc::ir::Emit;

/// Fixed lines opening the generated class.
pub const PROLOG: &[&str] = &[
    "/****************************************************************************",
    "Gl.java -- OpenGL constants and pass-through functions.",
    "",
    "Generated by glgen from the JOGL javadoc pages. Do not edit by hand;",
    "regenerate instead. Declarations duplicated across pages are emitted",
    "once, first occurrence wins.",
    "****************************************************************************/",
    "package glgen.opengl;",
    "",
    "import java.nio.*;",
    "import com.jogamp.opengl.*;",
    "import com.jogamp.common.nio.PointerBuffer;",
    "",
    "/**",
    " * OpenGL standard constants and functions, forwarded to the GL binding",
    " * object supplied by the installed {@link GlRuntime}.",
    " */",
    "@SuppressWarnings(\"deprecation\")",
    "public class Gl {",
];

/// Fixed lines closing the generated class: the two auxiliary pass-through
/// functions, the runtime binder, the single private accessor, and the
/// class close.
pub const EPILOG: &[&str] = &[
    "  public static boolean isExtensionAvailable(String extensionName) {",
    "    return gl().isExtensionAvailable(extensionName);",
    "  }",
    "",
    "  public static void setSwapInterval(int interval) {",
    "    gl().setSwapInterval(interval);",
    "  }",
    "",
    "  /**",
    "   * Installs the runtime that supplies the live GL binding object.",
    "   * Every function above resolves the binding through it, on every",
    "   * call.",
    "   */",
    "  public static void bind(GlRuntime runtime) {",
    "    _runtime = runtime;",
    "  }",
    "",
    "  private static GL2 gl() {",
    "    return _runtime.currentGl();",
    "  }",
    "",
    "  private static GlRuntime _runtime;",
    "",
    "  private Gl() {",
    "  }",
    "}",
];

/// Append-only writer for the generated class. Owns the sink for the whole
/// run; dropping it closes the underlying file on every exit path.
#[derive(Debug)]
pub struct Assembler<W: Write> {
    out: W,
    sink: String,
}

impl<W: Write> Assembler<W> {
    /// Wrap a sink. `sink_name` labels the sink in error messages.
    pub fn new(out: W, sink_name: impl Into<String>) -> Self {
        Self {
            out,
            sink: sink_name.into(),
        }
    }

    /// Write the fixed prologue.
    pub fn prologue(&mut self) -> Result<(), GenerateError> {
        self.lines(PROLOG)
    }

    /// Write the banner introducing one input document's records.
    pub fn banner(&mut self, document: &str) -> Result<(), GenerateError> {
        self.raw(&format!("\n  // Generated from {document}\n\n"))
    }

    /// Emit one completed record, followed by a separating blank line.
    pub fn record(&mut self, node: &impl Emit) -> Result<(), GenerateError> {
        self.raw(&node.emit())?;
        self.raw("\n")
    }

    /// Write the fixed epilogue.
    pub fn epilogue(&mut self) -> Result<(), GenerateError> {
        self.lines(EPILOG)
    }

    /// Flush and hand back the sink.
    pub fn finish(mut self) -> Result<W, GenerateError> {
        self.out.flush().map_err(|e| GenerateError::Write {
            sink: self.sink.clone(),
            source: e,
        })?;
        Ok(self.out)
    }

    fn lines(&mut self, lines: &[&str]) -> Result<(), GenerateError> {
        for line in lines {
            self.raw(line)?;
            self.raw("\n")?;
        }
        Ok(())
    }

    fn raw(&mut self, text: &str) -> Result<(), GenerateError> {
        self.out
            .write_all(text.as_bytes())
            .map_err(|e| GenerateError::Write {
                sink: self.sink.clone(),
                source: e,
            })
    }
}
