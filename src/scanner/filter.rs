//! Deciding which files in a delivery folder take part in the audit.

use std::collections::BTreeSet;
use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::ScannerConfig;
use crate::error::{AuditError, Result};

pub trait DeliveryFilter {
    /// `relative` is the file's path below the delivery root.
    fn admits(&self, relative: &Path) -> bool;
}

/// Drawing extensions, held bare and lowercase.
///
/// `".PDF"`, `"pdf"` and `" Pdf "` are one entry. An empty set places no
/// constraint on extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtensionSet(BTreeSet<String>);

impl ExtensionSet {
    #[must_use]
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim().trim_start_matches('.').to_lowercase())
                .filter(|ext| !ext.is_empty())
                .collect(),
        )
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn contains(&self, extension: &str) -> bool {
        self.0.contains(&extension.to_lowercase())
    }

    /// Files without an extension only match an empty set.
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        if self.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.contains(ext))
    }
}

/// The part of a delivery folder that is audited: files with a drawing extension
/// outside the excluded folders.
pub struct DeliveryScope {
    extensions: ExtensionSet,
    excluded: GlobSet,
}

impl DeliveryScope {
    /// # Errors
    /// Returns `InvalidPattern` naming the first exclude glob that does not parse.
    pub fn new(extensions: ExtensionSet, exclude: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude {
            builder.add(Glob::new(pattern).map_err(|source| AuditError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?);
        }
        let excluded = builder.build().map_err(|source| AuditError::InvalidPattern {
            pattern: exclude.join(", "),
            source,
        })?;
        Ok(Self {
            extensions,
            excluded,
        })
    }

    /// # Errors
    /// Returns `InvalidPattern` if `scanner.exclude` holds a bad glob.
    pub fn from_config(scanner: &ScannerConfig) -> Result<Self> {
        Self::new(ExtensionSet::new(&scanner.extensions), &scanner.exclude)
    }

    #[must_use]
    pub const fn extensions(&self) -> &ExtensionSet {
        &self.extensions
    }
}

impl DeliveryFilter for DeliveryScope {
    fn admits(&self, relative: &Path) -> bool {
        self.extensions.matches(relative) && !self.excluded.is_match(relative)
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
