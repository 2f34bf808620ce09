//! Configuration types for the tree walker

/// Deepest level that still gets its own entry.
pub const DEFAULT_MAX_DEPTH: usize = 4;

/// Entries whose name matches one of these are never walked or listed.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &["*readme.md", "*build*", "*_test.go"];

/// Configuration for tree walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Children of the source root are at depth 1. Directories at this depth
    /// become flat stubs and are not descended into.
    pub max_depth: usize,
    pub ignore_patterns: Vec<String>,
    /// Entries starting with this prefix are skipped entirely
    pub hidden_prefix: char,
    /// Files (not directories) starting with this prefix are skipped
    pub private_file_prefix: char,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS
                .iter()
                .map(|p| p.to_string())
                .collect(),
            hidden_prefix: '.',
            private_file_prefix: '_',
        }
    }
}
