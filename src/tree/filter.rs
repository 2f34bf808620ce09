//! Name-based ignore filtering for tree walking

use glob::Pattern;

use crate::error::{GenError, Result};

/// Compiled set of ignore globs, matched against a single entry name.
///
/// Matching is case-sensitive: `*readme.md` skips `readme.md` and
/// `docs_readme.md` but not `README.md`.
#[derive(Debug, Clone, Default)]
pub struct IgnoreFilter {
    patterns: Vec<Pattern>,
}

impl IgnoreFilter {
    /// Compile the given patterns, failing on the first invalid glob.
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|p| {
                let p = p.as_ref();
                Pattern::new(p).map_err(|source| GenError::InvalidPattern {
                    pattern: p.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    /// Check if an entry name matches any ignore pattern.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
