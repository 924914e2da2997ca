//! End-to-end translation of one input file.

use crate::classify::{RegionTag, classify};
use crate::dialect::DialectConfig;
use crate::error::TranslateError;
use crate::output::{Container, OutputDocument};
use crate::rewrite::rewrite;
use crate::traits::Writer;
use std::collections::BTreeMap;

/// Classify and rewrite `lines`, returning the body lines without any
/// header or footer.
///
/// Classification runs to completion first, so a malformed file yields an
/// error and no output at all.
pub fn translate_body<S: AsRef<str>>(
    lines: &[S],
    dialect: &DialectConfig,
) -> Result<Vec<String>, TranslateError> {
    let tags = classify(lines, dialect)?;
    tracing::debug!(
        dialect = %dialect.name,
        lines = lines.len(),
        regions = ?tag_counts(&tags),
        "classified input"
    );
    let body = rewrite(lines, &tags, dialect);
    tracing::debug!(dialect = %dialect.name, emitted = body.len(), "rewrote body");
    Ok(body)
}

/// Translate `lines` into a complete output document.
pub fn translate<S: AsRef<str>>(
    lines: &[S],
    dialect: &DialectConfig,
    writer: &dyn Writer,
    container: &Container,
) -> Result<OutputDocument, TranslateError> {
    let body = translate_body(lines, dialect)?;
    Ok(writer.assemble(container, &dialect.imports, &body))
}

fn tag_counts(tags: &[RegionTag]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for tag in tags {
        *counts.entry(format!("{tag:?}")).or_insert(0) += 1;
    }
    counts
}
