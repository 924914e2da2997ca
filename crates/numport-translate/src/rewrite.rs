//! Rewrite engine: turns tagged lines into output body lines.
//!
//! Everything before the first non-[`RegionTag::None`] line (the upstream
//! license block) is dropped. After that:
//!
//! - includes and top-level conditional blocks are dropped
//! - declarations get the dialect's visibility prefix
//! - body lines lose forward declarations (plus the first blank line after
//!   them, even across a dropped `#ifdef` block) and in-body `#ifdef`
//!   blocks, then go through the substitution table
//! - everything else passes through untouched

use crate::classify::RegionTag;
use crate::dialect::{ConditionalRules, DialectConfig};
use std::borrow::Cow;

/// Rewrite state for one run. Create a fresh engine per input file.
pub struct RewriteEngine<'d> {
    dialect: &'d DialectConfig,
    started: bool,
    /// The previous body line was a suppressed forward declaration.
    previous_line_was_declaration_stub: bool,
    /// Currently skipping an `#ifdef` block inside a function body.
    inside_suppressed_conditional: bool,
}

impl<'d> RewriteEngine<'d> {
    pub fn new(dialect: &'d DialectConfig) -> Self {
        Self {
            dialect,
            started: false,
            previous_line_was_declaration_stub: false,
            inside_suppressed_conditional: false,
        }
    }

    /// Process one tagged line. `None` means the line is suppressed.
    pub fn process<'l>(&mut self, line: &'l str, tag: RegionTag) -> Option<Cow<'l, str>> {
        if !self.started {
            if tag == RegionTag::None {
                return None;
            }
            self.started = true;
        }

        if tag != RegionTag::FunctionBody {
            self.previous_line_was_declaration_stub = false;
        }

        match tag {
            RegionTag::Include | RegionTag::ConditionalBlock => None,
            RegionTag::FunctionDeclaration => {
                Some(Cow::Owned(format!("{}{}", self.dialect.visibility, line)))
            }
            RegionTag::FunctionBody => self.rewrite_body(line),
            RegionTag::None
            | RegionTag::Comment
            | RegionTag::FunctionBegin
            | RegionTag::FunctionEnd => Some(Cow::Borrowed(line)),
        }
    }

    fn rewrite_body<'l>(&mut self, line: &'l str) -> Option<Cow<'l, str>> {
        if self.dialect.declaration.matches_nested(line) {
            tracing::trace!(line, "dropping forward declaration");
            self.previous_line_was_declaration_stub = true;
            return None;
        }

        // Skipped lines leave the stub flag alone: a prototype block may end
        // inside an `#ifdef` and still own the blank line after the `#endif`.
        if self.inside_suppressed_conditional {
            if self.body_conditionals().is_some_and(|c| c.closes(line)) {
                self.inside_suppressed_conditional = false;
            }
            return None;
        }

        if self.previous_line_was_declaration_stub && line.trim().is_empty() {
            self.previous_line_was_declaration_stub = false;
            return None;
        }

        if self.body_conditionals().is_some_and(|c| c.opens(line)) {
            tracing::trace!(line, "dropping conditional block in function body");
            self.inside_suppressed_conditional = true;
            return None;
        }

        self.previous_line_was_declaration_stub = false;
        Some(self.dialect.substitutions.apply(line))
    }

    fn body_conditionals(&self) -> Option<&'d ConditionalRules> {
        self.dialect.conditional.as_ref().filter(|c| c.in_functions)
    }
}

/// Rewrite a fully classified file.
///
/// # Panics
///
/// If `lines` and `tags` differ in length. Tags come from
/// [`classify`](crate::classify::classify) on the same lines.
pub fn rewrite<S: AsRef<str>>(
    lines: &[S],
    tags: &[RegionTag],
    dialect: &DialectConfig,
) -> Vec<String> {
    assert_eq!(
        lines.len(),
        tags.len(),
        "rewrite needs exactly one tag per line"
    );
    let mut engine = RewriteEngine::new(dialect);
    lines
        .iter()
        .zip(tags)
        .filter_map(|(line, &tag)| engine.process(line.as_ref(), tag).map(Cow::into_owned))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;

    fn run(dialect: &DialectConfig, src: &str) -> Vec<String> {
        let lines: Vec<&str> = src.lines().collect();
        let tags = classify(&lines, dialect).unwrap();
        rewrite(&lines, &tags, dialect)
    }

    #[test]
    fn test_leading_comment_dropped() {
        let src = "\
/*
Copyright
*/

void f()
{
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec!["internal static void f()", "{", "}"]
        );
    }

    #[test]
    fn test_blank_lines_and_comments_after_start_kept() {
        let src = "\
#include <math.h>

/* -------- child routines -------- */

void f()
{
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec![
                "",
                "/* -------- child routines -------- */",
                "",
                "internal static void f()",
                "{",
                "}"
            ]
        );
    }

    #[test]
    fn test_stub_followed_by_blank_suppresses_both() {
        let src = "\
void f()
{
    void g(int n);

    g(1);
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec!["internal static void f()", "{", "    g(1);", "}"]
        );
    }

    #[test]
    fn test_stub_followed_by_code_suppresses_only_stub() {
        let src = "\
void f()
{
    void g(int n);
    int j;

    g(1);
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec![
                "internal static void f()",
                "{",
                "    int j;",
                "",
                "    g(1);",
                "}"
            ]
        );
    }

    #[test]
    fn test_consecutive_stubs_then_blank() {
        let src = "\
void f()
{
    void g(int n);
    void h(int n);

    g(1);
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec!["internal static void f()", "{", "    g(1);", "}"]
        );
    }

    #[test]
    fn test_only_one_blank_after_stub() {
        let src = "\
void f()
{
    void g(int n);


    g(1);
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec!["internal static void f()", "{", "", "    g(1);", "}"]
        );
    }

    #[test]
    fn test_conditional_in_body_suppressed() {
        let src = "\
void f(int n)
{
    int nw;
#ifdef USE_THREADS
    if (n > 8192) {
        void anything(int whatever);
        cos(sin(x));
    }
#endif /* USE_THREADS */
    g(n);
}";
        assert_eq!(
            run(&DialectConfig::fftsg(), src),
            vec![
                "internal static void f(int n)",
                "{",
                "    int nw;",
                "    g(n);",
                "}"
            ]
        );
    }

    #[test]
    fn test_blank_after_conditional_prototype_block_suppressed() {
        let src = "\
void cftfsub(int n, double *a, int *ip, int nw, double *w)
{
    void bitrv2(int n, int *ip, double *a);
#ifdef USE_CDFT_THREADS
    void cftrec4_th(int n, double *a, int nw, double *w);
#endif /* USE_CDFT_THREADS */
    
    if (n > 8) {
    }
}";
        assert_eq!(
            run(&DialectConfig::fftsg(), src),
            vec![
                "internal static void cftfsub(int n, double *a, int *ip, int nw, double *w)",
                "{",
                "    if (n > 8) {",
                "    }",
                "}"
            ]
        );
    }

    #[test]
    fn test_emitted_line_clears_stub_flag() {
        let src = "\
void f(int n)
{
    void g(int n);
    int j;
#ifdef USE_THREADS
    h(n);
#endif /* USE_THREADS */

    g(n);
}";
        assert_eq!(
            run(&DialectConfig::fftsg(), src),
            vec!["internal static void f(int n)", "{", "    int j;", "", "    g(n);", "}"]
        );
    }

    #[test]
    #[should_panic(expected = "one tag per line")]
    fn test_mismatched_tags_rejected() {
        rewrite(&["void f()", "{"], &[RegionTag::FunctionDeclaration], &DialectConfig::fft4g());
    }

    #[test]
    fn test_top_level_conditional_dropped() {
        let src = "\
#include <math.h>
#ifdef USE_THREADS
#include <pthread.h>
#endif /* USE_THREADS */
int f(int n)
{
    return n;
}";
        assert_eq!(
            run(&DialectConfig::fftsg(), src),
            vec!["internal static int f(int n)", "{", "    return n;", "}"]
        );
    }

    #[test]
    fn test_body_substitutions() {
        let src = "\
void f(double x)
{
    y = sin(x) + cos(x);
    z = atan(1.0) * y;
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec![
                "internal static void f(double x)",
                "{",
                "    y = Math.Sin(x) + Math.Cos(x);",
                "    z = (Math.PI / 4) * y;",
                "}"
            ]
        );
    }

    #[test]
    fn test_substitutions_only_in_bodies() {
        let src = "\
/* y = sin(x); */
void f(double x)
{
}";
        assert_eq!(
            run(&DialectConfig::fft4g(), src),
            vec!["/* y = sin(x); */", "internal static void f(double x)", "{", "}"]
        );
    }

    #[test]
    fn test_engine_state_is_per_run() {
        let dialect = DialectConfig::fftsg();
        let mut engine = RewriteEngine::new(&dialect);
        assert_eq!(engine.process("", RegionTag::None), None);
        assert!(engine.process("void f()", RegionTag::FunctionDeclaration).is_some());
        assert_eq!(engine.process("#ifdef X", RegionTag::FunctionBody), None);

        let mut fresh = RewriteEngine::new(&dialect);
        fresh.process("void f()", RegionTag::FunctionDeclaration);
        assert_eq!(
            fresh.process("    x = 1;", RegionTag::FunctionBody).as_deref(),
            Some("    x = 1;")
        );
    }
}
