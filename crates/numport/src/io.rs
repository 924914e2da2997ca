//! File I/O around the translation pipeline.

use anyhow::Context;
use numport_translate::OutputDocument;
use std::path::Path;

/// Read a source file as lines, accepting `\n` and `\r\n` endings.
///
/// Line content is otherwise untouched; blank-line detection downstream
/// depends on it.
pub fn read_lines(path: &Path) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Ok(content.lines().map(String::from).collect())
}

/// Write lines with `\n` endings and a trailing newline.
pub fn write_lines(path: &Path, lines: &[String]) -> anyhow::Result<()> {
    let mut content = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Write a finished document.
pub fn write_document(path: &Path, document: &OutputDocument) -> anyhow::Result<()> {
    write_lines(path, document.lines())
}
