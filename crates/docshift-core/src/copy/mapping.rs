//! File-name suffix rename rule.

use std::borrow::Cow;

use crate::options::{DEFAULT_DESTINATION_SUFFIX, DEFAULT_SOURCE_SUFFIX};

/// Renames file names ending in `from` so they end in `to` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixMapping {
    pub from: String,
    pub to: String,
}

impl Default for SuffixMapping {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_SUFFIX, DEFAULT_DESTINATION_SUFFIX)
    }
}

impl SuffixMapping {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Map a single file name (not a path).
    ///
    /// ```
    /// use docshift_core::SuffixMapping;
    ///
    /// let mapping = SuffixMapping::default();
    /// assert_eq!(mapping.map_name("a.md"), "a.mdx");
    /// assert_eq!(mapping.map_name("c.txt"), "c.txt");
    /// ```
    pub fn map_name<'a>(&self, name: &'a str) -> Cow<'a, str> {
        match name.strip_suffix(self.from.as_str()) {
            Some(stem) if !self.from.is_empty() => Cow::Owned(format!("{stem}{}", self.to)),
            _ => Cow::Borrowed(name),
        }
    }
}
