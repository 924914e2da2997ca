//! Line-level translation of numeric C kernels into C#.
//!
//! `numport-translate` keeps hand-ported numeric code (Ooura's FFT packages)
//! mechanically in sync with the upstream C. It is not a C parser: the input
//! dialect puts every declaration and function brace on its own line, so
//! structure is recovered from line-level cues alone.
//!
//! # Architecture
//!
//! ```text
//! C lines ──> classify ──> RegionTag per line ──> rewrite ──> body lines ──> Writer ──> C# file
//!                 ^                                   ^                        ^
//!                 └──────────── DialectConfig ────────┘                    Container
//! ```
//!
//! - [`classify`] runs the line state machine and rejects anything it can't
//!   place at top level.
//! - [`rewrite`] drops includes, forward declarations and `#ifdef` blocks,
//!   adds visibility to declarations and rewrites math calls.
//! - [`Writer`]s wrap the result in namespace/class boilerplate.
//!
//! # Example
//!
//! ```ignore
//! use numport_translate::{Container, registry, translate};
//!
//! let dialect = registry::dialect_for_name("fft4g").unwrap();
//! let writer = registry::writer_for_language("csharp").unwrap();
//! let lines = ["void f()", "{", "    y = sin(x);", "}"];
//! let doc = translate(&lines, &dialect, writer, &Container::new("FftFlat", "fft4g"))?;
//! // => "        internal static void f()" ... "            y = Math.Sin(x);"
//! ```

pub mod classify;
pub mod dialect;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod registry;
pub mod rewrite;
pub mod substitution;
pub mod traits;

// Re-exports: core pipeline
pub use classify::{ClassifierState, LineClassifier, RegionTag, classify};
pub use pipeline::{translate, translate_body};
pub use rewrite::{RewriteEngine, rewrite};

// Re-exports: configuration
pub use dialect::{
    ConditionalRules, ConditionalSpec, DeclarationRecognizer, DeclarationSpec, DialectConfig,
    DialectSpec, DialectSummary,
};
pub use substitution::{Substitution, SubstitutionTable};

// Re-exports: errors
pub use error::{DialectError, TranslateError};

// Re-exports: output
pub use output::{CSHARP_WRITER, Container, DEFAULT_NAMESPACE, OutputDocument, SupportFile};
pub use traits::Writer;

// Re-exports: registry
pub use registry::{
    dialect_for_name, dialect_for_path, dialects, register_dialect, register_writer,
    writer_for_language, writers,
};
