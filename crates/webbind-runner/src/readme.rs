//! README region upkeep

use crate::{Result, RunnerError};
use std::fs;
use std::path::Path;

/// Markdown line recording the locked version of `dependency`
pub fn version_reference(dependency: &str, version: &str) -> String {
    format!(
        "- [`{dependency}` {version}](https://www.npmjs.com/package/{dependency}/v/{version})"
    )
}

/// Replace the lines between `start` and `end` with `body`.
///
/// The marker lines themselves are kept. Returns `None` when either marker
/// is missing or they appear out of order.
pub fn replace_region(document: &str, start: &str, end: &str, body: &str) -> Option<String> {
    let start_at = document.find(start)?;
    let after_start = start_at + start.len();
    let end_at = after_start + document[after_start..].find(end)?;

    let mut out = String::with_capacity(document.len() + body.len());
    out.push_str(&document[..after_start]);
    out.push('\n');
    out.push_str("Based on:\n\n");
    out.push_str(body.trim_end());
    out.push('\n');
    out.push_str(&document[end_at..]);
    Some(out)
}

/// Rewrite the delimited region of the README at `path`.
///
/// Returns `true` when the file changed.
pub fn sync_readme(path: &Path, markers: &(String, String), body: &str) -> Result<bool> {
    let document = fs::read_to_string(path).map_err(|e| RunnerError::io(path, e))?;
    let (start, end) = markers;

    let updated = replace_region(&document, start, end, body).ok_or_else(|| {
        RunnerError::MissingMarkers {
            path: path.to_path_buf(),
        }
    })?;

    if updated == document {
        tracing::debug!(path = %path.display(), "README already up to date");
        return Ok(false);
    }

    fs::write(path, &updated).map_err(|e| RunnerError::io(path, e))?;
    tracing::info!(path = %path.display(), "updated README");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "<!-- START updated by tool. Do not modify by hand -->";
    const END: &str = "<!-- END updated by tool. Do not modify by hand -->";

    fn markers() -> (String, String) {
        (START.to_string(), END.to_string())
    }

    #[test]
    fn test_version_reference() {
        assert_eq!(
            version_reference("@webref/idl", "3.43.1"),
            "- [`@webref/idl` 3.43.1](https://www.npmjs.com/package/@webref/idl/v/3.43.1)"
        );
    }

    #[test]
    fn test_replace_region_keeps_surroundings() {
        let document = format!("# web\n\nIntro.\n\n{START}\nold text\n{END}\n\n## Usage\n");
        let updated = replace_region(&document, START, END, "- new\n").unwrap();
        assert_eq!(
            updated,
            format!("# web\n\nIntro.\n\n{START}\nBased on:\n\n- new\n{END}\n\n## Usage\n")
        );
    }

    #[test]
    fn test_replace_region_requires_both_markers() {
        assert!(replace_region(&format!("{START}\n"), START, END, "x").is_none());
        assert!(replace_region(&format!("{END}\n{START}\n"), START, END, "x").is_none());
    }

    #[test]
    fn test_sync_is_noop_when_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, format!("{START}\n{END}\n")).unwrap();

        assert!(sync_readme(&path, &markers(), "- v1").unwrap());
        let first = fs::read_to_string(&path).unwrap();
        assert!(!sync_readme(&path, &markers(), "- v1").unwrap());
        assert_eq!(fs::read_to_string(&path).unwrap(), first);
        assert!(sync_readme(&path, &markers(), "- v2").unwrap());
    }

    #[test]
    fn test_sync_missing_markers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README.md");
        fs::write(&path, "# nothing here\n").unwrap();

        let err = sync_readme(&path, &markers(), "- v1").unwrap_err();
        assert!(matches!(err, RunnerError::MissingMarkers { .. }));
    }
}
