//! Harness configuration.

use crate::{ExtractionKind, SpecError, SpecResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration for a conformance run.
///
/// Loaded from TOML:
///
/// ```toml
/// kinds = ["hashtags", "hashtags_with_indices"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Extraction kinds to run, in order.
    #[serde(default = "all_kinds")]
    pub kinds: Vec<ExtractionKind>,
}

fn all_kinds() -> Vec<ExtractionKind> {
    ExtractionKind::ALL.to_vec()
}

impl HarnessConfig {
    /// Every extraction kind.
    pub fn all() -> Self {
        Self { kinds: all_kinds() }
    }

    /// Create with specific kinds.
    pub fn with_kinds(kinds: Vec<ExtractionKind>) -> Self {
        Self { kinds }
    }

    pub fn includes(&self, kind: ExtractionKind) -> bool {
        self.kinds.contains(&kind)
    }

    /// Load from a TOML file. A missing file selects every kind.
    pub fn load(path: &Path) -> SpecResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| SpecError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| SpecError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self::all()
    }
}
