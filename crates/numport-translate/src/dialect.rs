//! Dialect configuration.
//!
//! A [`DialectConfig`] holds everything that differs between input file
//! families: how a function declaration is recognized, whether
//! `#ifdef … #endif` blocks are understood, and which call sites are
//! rewritten inside function bodies. The classifier and rewrite engine are
//! shared; only the config changes.
//!
//! Two dialects are built in, one per upstream source file:
//!
//! | name    | declarations              | conditionals          |
//! |---------|---------------------------|-----------------------|
//! | `fft4g` | lines starting with `void` | none                 |
//! | `fftsg` | `int`/`void` signature regex | top level and bodies |
//!
//! Custom dialects are described by a serializable [`DialectSpec`] and
//! compiled with [`DialectSpec::compile`].

use crate::error::DialectError;
use crate::substitution::{Substitution, SubstitutionTable};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Prefix the C# writer expects on translated declarations.
pub const DEFAULT_VISIBILITY: &str = "internal static ";

/// Recognizes a function declaration line.
#[derive(Debug, Clone)]
pub enum DeclarationRecognizer {
    /// Top-level lines must start with the keyword; body lines may be indented.
    Prefix(String),
    /// Unanchored regex, matched against the raw line in both positions.
    Pattern(Regex),
}

impl DeclarationRecognizer {
    /// Does this line open a function at top level?
    pub fn matches_top_level(&self, line: &str) -> bool {
        match self {
            Self::Prefix(keyword) => line.starts_with(keyword.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }

    /// Does this function-body line look like a (forward) declaration?
    pub fn matches_nested(&self, line: &str) -> bool {
        match self {
            Self::Prefix(keyword) => line.trim_start().starts_with(keyword.as_str()),
            Self::Pattern(re) => re.is_match(line),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Prefix(keyword) => format!("prefix `{keyword}`"),
            Self::Pattern(re) => format!("pattern `{}`", re.as_str()),
        }
    }
}

/// `#ifdef … #endif` handling.
#[derive(Debug, Clone)]
pub struct ConditionalRules {
    pub open: Regex,
    pub close: Regex,
    /// Suppress conditional blocks found inside function bodies.
    pub in_functions: bool,
}

impl ConditionalRules {
    pub fn opens(&self, line: &str) -> bool {
        self.open.is_match(line)
    }

    pub fn closes(&self, line: &str) -> bool {
        self.close.is_match(line)
    }
}

/// Immutable per-file-family configuration driving one translation.
#[derive(Debug, Clone)]
pub struct DialectConfig {
    pub name: String,
    /// Input file names this dialect is picked for when none is requested.
    pub sources: Vec<String>,
    pub declaration: DeclarationRecognizer,
    pub conditional: Option<ConditionalRules>,
    pub substitutions: SubstitutionTable,
    /// Prepended to every top-level declaration.
    pub visibility: String,
    /// Namespaces the substituted calls need in the output header.
    pub imports: Vec<String>,
}

impl DialectConfig {
    /// The `fft4g.c` dialect: `void` declarations only, no conditionals.
    pub fn fft4g() -> Self {
        Self {
            name: "fft4g".to_string(),
            sources: vec!["fft4g.c".to_string()],
            declaration: DeclarationRecognizer::Prefix("void".to_string()),
            conditional: None,
            substitutions: SubstitutionTable::new([
                Substitution::new(" sin(", " Math.Sin("),
                Substitution::new(" cos(", " Math.Cos("),
                Substitution::new(" atan(1.0) ", " (Math.PI / 4) "),
            ]),
            visibility: DEFAULT_VISIBILITY.to_string(),
            imports: vec!["System".to_string()],
        }
    }

    /// The `fftsg.c` dialect: `int`/`void` declarations and `#ifdef` blocks,
    /// including thread-only code paths inside function bodies.
    pub fn fftsg() -> Self {
        Self {
            name: "fftsg".to_string(),
            sources: vec!["fftsg.c".to_string()],
            declaration: DeclarationRecognizer::Pattern(
                Regex::new(r"\s*(int|void)\s.+\(.*\)").unwrap(),
            ),
            conditional: Some(ConditionalRules {
                open: Regex::new(r"#ifdef\s.+").unwrap(),
                close: Regex::new(r"#endif /\*.+\*/").unwrap(),
                in_functions: true,
            }),
            substitutions: SubstitutionTable::new([
                Substitution::new(" -sin(", " -Math.Sin("),
                Substitution::new(" sin(", " Math.Sin("),
                Substitution::new(" cos(", " Math.Cos("),
                Substitution::new(" atan(1.0) ", " (Math.PI / 4) "),
            ]),
            visibility: DEFAULT_VISIBILITY.to_string(),
            imports: vec!["System".to_string()],
        }
    }

    /// Whether `path`'s file name is one of this dialect's sources.
    pub fn applies_to(&self, path: &Path) -> bool {
        path.file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|name| self.sources.iter().any(|s| s == name))
    }

    /// Short, human-readable summary for listings.
    pub fn summary(&self) -> DialectSummary {
        DialectSummary {
            name: self.name.clone(),
            sources: self.sources.clone(),
            declaration: self.declaration.describe(),
            conditionals: match &self.conditional {
                None => "none",
                Some(c) if c.in_functions => "top level and function bodies",
                Some(_) => "top level",
            },
            substitutions: self.substitutions.len(),
        }
    }
}

/// Serializable view of a dialect, for `numport dialects`.
#[derive(Debug, Clone, Serialize)]
pub struct DialectSummary {
    pub name: String,
    pub sources: Vec<String>,
    pub declaration: String,
    pub conditionals: &'static str,
    pub substitutions: usize,
}

// ============================================================================
// DialectSpec
// ============================================================================

/// How a custom dialect recognizes declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationSpec {
    Prefix(String),
    Pattern(String),
}

/// `#ifdef` rules of a custom dialect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionalSpec {
    pub open: String,
    pub close: String,
    #[serde(default)]
    pub in_functions: bool,
}

/// A dialect as written in configuration, before its patterns are compiled.
///
/// ```toml
/// [[dialects]]
/// name = "mykernel"
/// sources = ["mykernel.c"]
/// declaration = { prefix = "void" }
/// conditional = { open = '#ifdef\s.+', close = '#endif', in_functions = true }
/// substitutions = [{ from = " sqrt(", to = " Math.Sqrt(" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialectSpec {
    pub name: String,
    #[serde(default)]
    pub sources: Vec<String>,
    pub declaration: DeclarationSpec,
    #[serde(default)]
    pub conditional: Option<ConditionalSpec>,
    #[serde(default)]
    pub substitutions: Vec<Substitution>,
    #[serde(default = "default_visibility")]
    pub visibility: String,
    #[serde(default = "default_imports")]
    pub imports: Vec<String>,
}

fn default_visibility() -> String {
    DEFAULT_VISIBILITY.to_string()
}

fn default_imports() -> Vec<String> {
    vec!["System".to_string()]
}

impl DialectSpec {
    /// Compile patterns and validate the spec.
    pub fn compile(&self) -> Result<DialectConfig, DialectError> {
        if self.name.is_empty() {
            return Err(DialectError::Empty {
                dialect: self.name.clone(),
                what: "name",
            });
        }

        let declaration = match &self.declaration {
            DeclarationSpec::Prefix(keyword) if keyword.is_empty() => {
                return Err(self.empty("declaration prefix"));
            }
            DeclarationSpec::Prefix(keyword) => DeclarationRecognizer::Prefix(keyword.clone()),
            DeclarationSpec::Pattern(pattern) => DeclarationRecognizer::Pattern(self.regex(pattern)?),
        };

        let conditional = match &self.conditional {
            None => None,
            Some(spec) => Some(ConditionalRules {
                open: self.regex(&spec.open)?,
                close: self.regex(&spec.close)?,
                in_functions: spec.in_functions,
            }),
        };

        if self.substitutions.iter().any(|s| s.from.is_empty()) {
            return Err(self.empty("substitution pattern"));
        }

        Ok(DialectConfig {
            name: self.name.clone(),
            sources: self.sources.clone(),
            declaration,
            conditional,
            substitutions: SubstitutionTable::new(self.substitutions.iter().cloned()),
            visibility: self.visibility.clone(),
            imports: self.imports.clone(),
        })
    }

    fn regex(&self, pattern: &str) -> Result<Regex, DialectError> {
        if pattern.is_empty() {
            return Err(self.empty("pattern"));
        }
        Regex::new(pattern).map_err(|source| DialectError::InvalidPattern {
            dialect: self.name.clone(),
            pattern: pattern.to_string(),
            source,
        })
    }

    fn empty(&self, what: &'static str) -> DialectError {
        DialectError::Empty {
            dialect: self.name.clone(),
            what,
        }
    }
}
