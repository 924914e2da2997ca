//! Registry for dialects and writers.

use crate::dialect::{DialectConfig, DialectSummary};
use crate::traits::Writer;
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

/// Global dialect registry. Later registrations take precedence.
static DIALECTS: RwLock<Vec<Arc<DialectConfig>>> = RwLock::new(Vec::new());
static DIALECTS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Global writer registry.
static WRITERS: RwLock<Vec<&'static dyn Writer>> = RwLock::new(Vec::new());
static WRITERS_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Register a dialect, replacing any registered dialect with the same name.
pub fn register_dialect(dialect: DialectConfig) -> Arc<DialectConfig> {
    init_dialects();
    insert_dialect(dialect)
}

/// Register a custom writer.
pub fn register_writer(writer: &'static dyn Writer) {
    WRITERS.write().unwrap().push(writer);
}

fn insert_dialect(dialect: DialectConfig) -> Arc<DialectConfig> {
    let dialect = Arc::new(dialect);
    let mut dialects = DIALECTS.write().unwrap();
    dialects.retain(|d| d.name != dialect.name);
    dialects.push(Arc::clone(&dialect));
    tracing::debug!(name = %dialect.name, "registered dialect");
    dialect
}

fn init_dialects() {
    DIALECTS_INITIALIZED.get_or_init(|| {
        insert_dialect(DialectConfig::fft4g());
        insert_dialect(DialectConfig::fftsg());
    });
}

fn init_writers() {
    WRITERS_INITIALIZED.get_or_init(|| {
        register_writer(&crate::output::csharp::CSHARP_WRITER);
    });
}

/// Get a dialect by name.
pub fn dialect_for_name(name: &str) -> Option<Arc<DialectConfig>> {
    init_dialects();
    DIALECTS
        .read()
        .unwrap()
        .iter()
        .find(|d| d.name == name)
        .cloned()
}

/// Get the most recently registered dialect listing `path`'s file name
/// among its sources.
pub fn dialect_for_path(path: &Path) -> Option<Arc<DialectConfig>> {
    init_dialects();
    DIALECTS
        .read()
        .unwrap()
        .iter()
        .rev()
        .find(|d| d.applies_to(path))
        .cloned()
}

/// Get all registered dialects, in registration order.
pub fn dialects() -> Vec<Arc<DialectConfig>> {
    init_dialects();
    DIALECTS.read().unwrap().clone()
}

/// Summaries of all registered dialects.
pub fn dialect_summaries() -> Vec<DialectSummary> {
    dialects().iter().map(|d| d.summary()).collect()
}

/// Get a writer by language name.
pub fn writer_for_language(lang: &str) -> Option<&'static dyn Writer> {
    init_writers();
    WRITERS
        .read()
        .unwrap()
        .iter()
        .find(|w| w.language() == lang)
        .copied()
}

/// Get all registered writers.
pub fn writers() -> Vec<&'static dyn Writer> {
    init_writers();
    WRITERS.read().unwrap().clone()
}
