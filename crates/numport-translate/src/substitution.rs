//! Literal call-site substitution for function-body lines.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// One literal rewrite, e.g. `" sin("` to `" Math.Sin("`.
///
/// Patterns carry their surrounding whitespace so that only call sites
/// (not identifiers that merely end in `sin`) are rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substitution {
    pub from: String,
    pub to: String,
}

impl Substitution {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// Ordered substitution table.
///
/// Applied in a single left-to-right pass: at each position the longest
/// matching pattern wins (earlier entries win ties) and replacement text is
/// never rescanned. A negated call like `" -sin("` therefore can't be
/// partially overwritten by `" sin("`, whatever order the entries are in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<Substitution>,
}

impl SubstitutionTable {
    /// Build a table. Entries with an empty pattern are dropped.
    pub fn new(entries: impl IntoIterator<Item = Substitution>) -> Self {
        Self {
            entries: entries.into_iter().filter(|s| !s.from.is_empty()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Substitution> {
        self.entries.iter()
    }

    /// Rewrite every call site in `line`. Borrows when nothing matched.
    pub fn apply<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let mut out: Option<String> = None;
        let mut copied = 0;
        let mut pos = 0;

        while pos < line.len() {
            let rest = &line[pos..];
            match self.longest_match(rest) {
                Some(sub) => {
                    let buf = out.get_or_insert_with(|| String::with_capacity(line.len() + 16));
                    buf.push_str(&line[copied..pos]);
                    buf.push_str(&sub.to);
                    pos += sub.from.len();
                    copied = pos;
                }
                None => {
                    pos += rest.chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        match out {
            Some(mut buf) => {
                buf.push_str(&line[copied..]);
                Cow::Owned(buf)
            }
            None => Cow::Borrowed(line),
        }
    }

    fn longest_match(&self, rest: &str) -> Option<&Substitution> {
        let mut best: Option<&Substitution> = None;
        for sub in &self.entries {
            if rest.starts_with(sub.from.as_str())
                && best.is_none_or(|b| sub.from.len() > b.from.len())
            {
                best = Some(sub);
            }
        }
        best
    }
}

impl FromIterator<Substitution> for SubstitutionTable {
    fn from_iter<I: IntoIterator<Item = Substitution>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trig() -> SubstitutionTable {
        SubstitutionTable::new([
            Substitution::new(" sin(", " Math.Sin("),
            Substitution::new(" -sin(", " -Math.Sin("),
            Substitution::new(" cos(", " Math.Cos("),
            Substitution::new(" atan(1.0) ", " (Math.PI / 4) "),
        ])
    }

    #[test]
    fn test_no_match_borrows() {
        let table = trig();
        let out = table.apply("    x = a[j] + a[j + 1];");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(out, "    x = a[j] + a[j + 1];");
    }

    #[test]
    fn test_plain_and_negated_on_one_line() {
        let table = trig();
        assert_eq!(
            table.apply("    wk1r = sin(x); wk1i = -sin(x);"),
            "    wk1r = Math.Sin(x); wk1i = -Math.Sin(x);"
        );
        assert_eq!(
            table.apply("    w = sin(a) * -sin(b);"),
            "    w = Math.Sin(a) * -Math.Sin(b);"
        );
    }

    #[test]
    fn test_order_independent() {
        let reversed: SubstitutionTable = trig().iter().rev().cloned().collect();
        let line = "        y = cos(t) - -sin(t) + sin(t);";
        assert_eq!(reversed.apply(line), trig().apply(line));
        assert_eq!(
            trig().apply(line),
            "        y = Math.Cos(t) - -Math.Sin(t) + Math.Sin(t);"
        );
    }

    #[test]
    fn test_whitespace_preserved() {
        let table = trig();
        assert_eq!(
            table.apply("\tdelta = atan(1.0) / nwh;  "),
            "\tdelta = (Math.PI / 4) / nwh;  "
        );
    }

    #[test]
    fn test_requires_leading_space() {
        let table = trig();
        // `asin(` and a call at column zero are not call sites of `sin`.
        assert_eq!(table.apply("x = asin(y);"), "x = asin(y);");
        assert_eq!(table.apply("sin(y);"), "sin(y);");
    }

    #[test]
    fn test_replacement_not_rescanned() {
        let table = SubstitutionTable::new([Substitution::new(" f(", " f( f(")]);
        assert_eq!(table.apply("a = f(1);"), "a = f( f(1);");
    }

    #[test]
    fn test_empty_patterns_dropped() {
        let table = SubstitutionTable::new([Substitution::new("", "x")]);
        assert!(table.is_empty());
        assert_eq!(table.apply("abc"), "abc");
    }

    #[test]
    fn test_multibyte_text() {
        let table = trig();
        assert_eq!(table.apply("    /* π */ s = sin(π);"), "    /* π */ s = Math.Sin(π);");
    }
}
