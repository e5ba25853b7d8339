//! End-to-end runs over real files.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::PathBuf;

use glgen_core::{GenerateError, generate};

const GL_DOC: &str = "\
<h2>Field Detail</h2>
<pre>static final&nbsp;int GL_TRIANGLES</pre>
<h2>Method Detail</h2>
<pre>void&nbsp;glClear(int&nbsp;mask)</pre>
<pre>void&nbsp;glBlendFuncSeparate(int&nbsp;srcRGB,
                   int&nbsp;dstRGB,
                   int&nbsp;srcAlpha,
                   int&nbsp;dstAlpha)</pre>
";

const GL2_DOC: &str = "\
<pre>static final&nbsp;int GL_TRIANGLES</pre>
<pre>int&nbsp;glGetError()</pre>
";

fn write_docs(dir: &tempfile::TempDir) -> Vec<PathBuf> {
    let gl = dir.path().join("GL.html");
    let gl2 = dir.path().join("GL2.html");
    fs::write(&gl, GL_DOC).unwrap();
    fs::write(&gl2, GL2_DOC).unwrap();
    vec![gl, gl2]
}

#[test]
fn test_generate_writes_complete_class() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_docs(&dir);
    let output = dir.path().join("Gl.java");

    let report = generate(&inputs, &output).unwrap();
    assert_eq!(report.documents, 2);
    assert_eq!(report.constants, 1);
    assert_eq!(report.functions, 3);
    assert_eq!(report.duplicates, 1);

    let java = fs::read_to_string(&output).unwrap();
    assert!(java.contains("public class Gl {"));
    assert!(java.contains("// Generated from GL.html"));
    assert!(java.contains("// Generated from GL2.html"));
    assert!(java.contains("gl().glBlendFuncSeparate(srcRGB, dstRGB, srcAlpha, dstAlpha);"));
    assert!(java.contains("return gl().glGetError();"));
    assert!(java.ends_with("}\n"));
}

#[test]
fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_docs(&dir);
    let output = dir.path().join("Gl.java");

    generate(&inputs, &output).unwrap();
    let first = fs::read(&output).unwrap();
    generate(&inputs, &output).unwrap();
    let second = fs::read(&output).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_input_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("Gl.java");
    let missing = dir.path().join("GLBase.html");

    let err = generate(std::slice::from_ref(&missing), &output).unwrap_err();
    match err {
        GenerateError::Read { document, .. } => {
            assert!(document.contains("GLBase.html"), "got: {document}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unwritable_output_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let inputs = write_docs(&dir);
    let output = dir.path().join("no-such-dir").join("Gl.java");

    let err = generate(&inputs, &output).unwrap_err();
    match err {
        GenerateError::Write { sink, .. } => {
            assert!(sink.contains("Gl.java"), "got: {sink}");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unterminated_signature_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let doc = dir.path().join("GLBase.html");
    fs::write(&doc, "<pre>void&nbsp;glBlendFunc(int&nbsp;sfactor,\n").unwrap();
    let output = dir.path().join("Gl.java");

    let err = generate(std::slice::from_ref(&doc), &output).unwrap_err();
    assert!(
        matches!(err, GenerateError::UnterminatedSignature { ref document, line: 1, .. }
            if document == "GLBase.html"),
        "unexpected error: {err}"
    );
}
