//! Suite file loading.

use crate::{parse_suite, ConformanceSuite, SpecError, SpecResult};
use std::fs;
use std::path::Path;

/// Load a single suite file.
pub fn load_suite(path: &Path) -> SpecResult<ConformanceSuite> {
    let content = fs::read_to_string(path).map_err(|e| SpecError::Load {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_suite(&content)
}

/// Load all suites from a directory (glob: **/*.yml, **/*.yaml), sorted by
/// their path relative to `dir`.
pub fn load_all_suites(dir: &Path) -> SpecResult<Vec<(String, ConformanceSuite)>> {
    let mut suites = Vec::new();
    load_suites_recursive(dir, dir, &mut suites)?;
    suites.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(suites)
}

fn is_suite_file(path: &Path) -> bool {
    path.extension()
        .map_or(false, |e| e == "yml" || e == "yaml")
}

fn load_suites_recursive(
    base: &Path,
    dir: &Path,
    suites: &mut Vec<(String, ConformanceSuite)>,
) -> SpecResult<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    for entry in fs::read_dir(dir).map_err(|e| SpecError::Load {
        path: dir.display().to_string(),
        message: e.to_string(),
    })? {
        let entry = entry.map_err(|e| SpecError::Load {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();

        if path.is_dir() {
            load_suites_recursive(base, &path, suites)?;
        } else if is_suite_file(&path) {
            let relative = path.strip_prefix(base).unwrap_or(&path);
            let suite = load_suite(&path)?;
            tracing::debug!(suite = %relative.display(), cases = suite.tests.len(), "loaded suite");
            suites.push((relative.display().to_string(), suite));
        }
    }

    Ok(())
}
