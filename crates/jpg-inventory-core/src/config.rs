//! Scan configuration types.

use std::path::PathBuf;

use derive_builder::Builder;

use crate::extensions::ExtensionSet;

/// Configuration for a scan.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct ScanConfig {
    /// Roots to traverse, in order. An empty list is a valid, empty scan.
    #[builder(default)]
    pub roots: Vec<PathBuf>,

    /// Extensions to match.
    #[builder(default)]
    pub extensions: ExtensionSet,
}

impl ScanConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref roots) = self.roots {
            if roots.iter().any(|r| r.as_os_str().is_empty()) {
                return Err("Root path cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

impl ScanConfig {
    /// Create a new scan config builder.
    pub fn builder() -> ScanConfigBuilder {
        ScanConfigBuilder::default()
    }

    /// Create a simple config for scanning a set of roots.
    pub fn new<I, P>(roots: I, extensions: ExtensionSet) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            extensions,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::new(Vec::<PathBuf>::new(), ExtensionSet::default())
    }
}
