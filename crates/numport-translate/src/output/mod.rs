//! Output writers - assemble rewritten lines into target source files.

pub mod csharp;

pub use csharp::{CSHARP_WRITER, CSharpWriter, CSharpWriterImpl};

use std::fmt;

/// Namespace the hand-ported kernels live in.
pub const DEFAULT_NAMESPACE: &str = "FftFlat";

/// Where the translated functions live in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub namespace: String,
    pub class_name: String,
}

impl Container {
    pub fn new(namespace: impl Into<String>, class_name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            class_name: class_name.into(),
        }
    }
}

/// A complete output file as an ordered list of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    lines: Vec<String>,
}

impl OutputDocument {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Render with `\n` line endings and a trailing newline.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for OutputDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// A helper file shipped alongside translated output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportFile {
    pub file_name: &'static str,
    pub document: OutputDocument,
}
