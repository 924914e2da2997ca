//! Line classification.
//!
//! Tags every input line with the structural region it belongs to, using
//! only line-level cues: comment markers, `#include`, the dialect's
//! declaration and conditional patterns, and brace-only lines. The input
//! dialect puts declarations and function braces on dedicated lines, so a
//! single forward pass with no backtracking is enough.
//!
//! ```text
//! Outside ── /* ──────────> InLongComment ────── */ ─────> Outside
//! Outside ── declaration ─> InFunction ────────── } ─────> Outside
//! Outside ── #ifdef ──────> InConditionalBlock ── #endif ─> Outside
//! ```
//!
//! Any other line at top level is a hard error: an unrecognized line means
//! the upstream source drifted from the dialect, and silently skipping it
//! could ship a wrong numeric routine.

use crate::dialect::DialectConfig;
use crate::error::TranslateError;
use std::fmt;

const COMMENT_OPEN: &str = "/*";
const COMMENT_CLOSE: &str = "*/";
const INCLUDE: &str = "#include";

/// Region tag assigned to one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionTag {
    /// Blank line or part of a multi-line comment.
    None,
    /// Single-line `/* … */` comment at top level.
    Comment,
    Include,
    /// Any line of a top-level `#ifdef … #endif` block.
    ConditionalBlock,
    FunctionDeclaration,
    FunctionBegin,
    FunctionEnd,
    FunctionBody,
}

/// Classifier state between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierState {
    Outside,
    InLongComment,
    InFunction,
    InConditionalBlock,
}

impl fmt::Display for ClassifierState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Outside => "top level",
            Self::InLongComment => "comment",
            Self::InFunction => "function",
            Self::InConditionalBlock => "conditional block",
        })
    }
}

/// Single-run state machine. Feed lines in order with [`step`](Self::step),
/// then call [`finish`](Self::finish).
pub struct LineClassifier<'d> {
    dialect: &'d DialectConfig,
    state: ClassifierState,
    line: usize,
    /// Line number and text that opened the current non-`Outside` region.
    opened_at: Option<(usize, String)>,
}

impl<'d> LineClassifier<'d> {
    pub fn new(dialect: &'d DialectConfig) -> Self {
        Self {
            dialect,
            state: ClassifierState::Outside,
            line: 0,
            opened_at: None,
        }
    }

    pub fn state(&self) -> ClassifierState {
        self.state
    }

    /// Classify the next line.
    pub fn step(&mut self, line: &str) -> Result<RegionTag, TranslateError> {
        self.line += 1;
        let tag = match self.state {
            ClassifierState::Outside => self.step_outside(line)?,

            ClassifierState::InLongComment => {
                if line.contains(COMMENT_CLOSE) {
                    self.leave();
                }
                RegionTag::None
            }

            ClassifierState::InFunction => match line {
                "{" => RegionTag::FunctionBegin,
                "}" => {
                    self.leave();
                    RegionTag::FunctionEnd
                }
                _ => RegionTag::FunctionBody,
            },

            ClassifierState::InConditionalBlock => {
                if self.dialect.conditional.as_ref().is_some_and(|c| c.closes(line)) {
                    self.leave();
                }
                RegionTag::ConditionalBlock
            }
        };
        Ok(tag)
    }

    fn step_outside(&mut self, line: &str) -> Result<RegionTag, TranslateError> {
        if line.contains(COMMENT_OPEN) && line.contains(COMMENT_CLOSE) {
            Ok(RegionTag::Comment)
        } else if line.contains(COMMENT_OPEN) {
            self.enter(ClassifierState::InLongComment, line);
            Ok(RegionTag::None)
        } else if self.dialect.declaration.matches_top_level(line) {
            self.enter(ClassifierState::InFunction, line);
            Ok(RegionTag::FunctionDeclaration)
        } else if self.dialect.conditional.as_ref().is_some_and(|c| c.opens(line)) {
            self.enter(ClassifierState::InConditionalBlock, line);
            Ok(RegionTag::ConditionalBlock)
        } else if line.starts_with(INCLUDE) {
            Ok(RegionTag::Include)
        } else if line.is_empty() {
            Ok(RegionTag::None)
        } else {
            Err(TranslateError::MalformedInput {
                line: self.line,
                text: line.to_string(),
            })
        }
    }

    fn enter(&mut self, state: ClassifierState, line: &str) {
        tracing::trace!(line = self.line, %state, "enter region");
        self.state = state;
        self.opened_at = Some((self.line, line.to_string()));
    }

    fn leave(&mut self) {
        tracing::trace!(line = self.line, state = %self.state, "leave region");
        self.state = ClassifierState::Outside;
        self.opened_at = None;
    }

    /// End of input: every region must be closed.
    pub fn finish(self) -> Result<(), TranslateError> {
        match (self.state, self.opened_at) {
            (ClassifierState::Outside, _) => Ok(()),
            (state, Some((line, text))) => Err(TranslateError::UnterminatedRegion { state, line, text }),
            (state, None) => Err(TranslateError::UnterminatedRegion {
                state,
                line: self.line,
                text: String::new(),
            }),
        }
    }
}

/// Tag every line, or fail on the first line that cannot be classified.
pub fn classify<S: AsRef<str>>(
    lines: &[S],
    dialect: &DialectConfig,
) -> Result<Vec<RegionTag>, TranslateError> {
    let mut classifier = LineClassifier::new(dialect);
    let tags = lines
        .iter()
        .map(|line| classifier.step(line.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    classifier.finish()?;
    Ok(tags)
}
