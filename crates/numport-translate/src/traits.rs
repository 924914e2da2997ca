//! Traits for target-language writers.

use crate::output::{Container, OutputDocument, SupportFile};

/// A writer assembles rewritten body lines into a complete target-language
/// source file.
pub trait Writer: Send + Sync {
    /// Language identifier (e.g., "csharp").
    fn language(&self) -> &'static str;

    /// File extension for output (e.g., "cs").
    fn extension(&self) -> &'static str;

    /// Wrap `body` in the container's header and footer.
    fn assemble(&self, container: &Container, imports: &[String], body: &[String]) -> OutputDocument;

    /// Hand-written helper files the translated code depends on.
    fn support_files(&self, _namespace: &str) -> Vec<SupportFile> {
        Vec::new()
    }
}
