//! Method whitelist: patterns gating which ancestor methods may be copied.
//!
//! Each pattern is compiled once and must match the whole
//! `"<type name>.<method name>"` key.

use regex_automata::meta::Regex;

use crate::{Error, Result};

/// Compiled pattern with its source text (for diagnostics).
#[derive(Debug, Clone)]
struct Pattern {
    source: String,
    regex: Regex,
}

/// Ordered list of compiled method patterns. Empty matches nothing.
#[derive(Debug, Clone, Default)]
pub struct MethodWhitelist {
    patterns: Vec<Pattern>,
}

impl MethodWhitelist {
    /// Compile every pattern, failing on the first invalid one.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Source text of the compiled patterns, in order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(|p| p.source.as_str())
    }

    /// Whether `method` of `type_name` may be copied from an ancestor.
    pub fn allows(&self, type_name: &str, method: &str) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let key = format!("{type_name}.{method}");
        self.patterns.iter().any(|p| p.regex.is_match(&key))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    // Full-match semantics; the group keeps a top-level alternation inside
    // both anchors.
    let anchored = format!("^(?:{pattern})$");
    let regex = Regex::new(&anchored).map_err(|e| Error::InvalidWhitelistPattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    Ok(Pattern {
        source: pattern.to_string(),
        regex,
    })
}
