use std::path::{Path, PathBuf};

/// What to do when the store document exists but can't be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Treat the document as an empty store. The bad contents are replaced on
    /// the next successful mutation.
    #[default]
    Discard,
    /// Fail the command with a `MalformedStore` error and leave the file as is.
    Fail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub malformed_policy: MalformedPolicy,
    /// Spaces per indentation level in the written JSON document.
    pub indent: usize,
}

impl StoreConfig {
    pub const DEFAULT_INDENT: usize = 4;

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            malformed_policy: MalformedPolicy::default(),
            indent: Self::DEFAULT_INDENT,
        }
    }

    pub fn with_malformed_policy(mut self, policy: MalformedPolicy) -> Self {
        self.malformed_policy = policy;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
