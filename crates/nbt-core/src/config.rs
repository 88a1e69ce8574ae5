//! Reader/writer configuration.

use serde::{Deserialize, Serialize};

/// Default limit on Compound/List nesting.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options shared by [`Reader`](crate::Reader) and [`Writer`](crate::Writer).
///
/// Deserializable with every field optional, so it can sit inside a host
/// application's own settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Writer: wrap the document in an anonymous (empty-named) Compound.
    /// Reader: if the top level is exactly one anonymous Compound, return its
    /// contents instead.
    pub root_tag: bool,
    /// Deepest Compound/List nesting accepted, counting the document root
    /// as depth 1.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_tag: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Config {
    /// Set [`Config::root_tag`].
    pub fn with_root_tag(mut self, root_tag: bool) -> Self {
        self.root_tag = root_tag;
        self
    }

    /// Set [`Config::max_depth`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
