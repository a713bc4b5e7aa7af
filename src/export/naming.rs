//! Output file naming.

use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use super::options::TIMESTAMP_FORMAT;

/// Extension of generated spreadsheets.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Name used when the input directory has no usable leaf name.
const FALLBACK_BASE_NAME: &str = "forms";

/// Leaf name of the input directory.
///
/// Paths like `.` or `forms/` are resolved first so they still yield the
/// real directory name.
pub fn base_name(input_dir: &Path) -> String {
    let leaf = |p: &Path| {
        p.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .filter(|n| !n.is_empty())
    };
    leaf(input_dir)
        .or_else(|| fs::canonicalize(input_dir).ok().as_deref().and_then(leaf))
        .unwrap_or_else(|| FALLBACK_BASE_NAME.to_string())
}

/// Format the timestamp part of an output name.
///
/// An invalid chrono format string falls back to `yyyyMMdd-HHmmss`.
pub fn format_timestamp(timestamp: &DateTime<Local>, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", timestamp.format(format)).is_err() {
        log::warn!("Invalid timestamp format {:?}, using default", format);
        out = timestamp.format(TIMESTAMP_FORMAT).to_string();
    }
    out
}

/// `<base-name>-<timestamp>`, without extension.
pub fn output_stem(input_dir: &Path, timestamp: &DateTime<Local>, format: &str) -> String {
    format!("{}-{}", base_name(input_dir), format_timestamp(timestamp, format))
}

/// Pick a path in `output_dir` for `stem` that does not exist yet.
///
/// Two exports within the same second would otherwise share a name, so a
/// `-1`, `-2`, ... suffix is added until the name is free.
pub fn unique_output_path(output_dir: &Path, stem: &str) -> PathBuf {
    let candidate = output_dir.join(format!("{}.{}", stem, OUTPUT_EXTENSION));
    if !candidate.exists() {
        return candidate;
    }
    (1u32..)
        .map(|n| output_dir.join(format!("{}-{}.{}", stem, n, OUTPUT_EXTENSION)))
        .find(|p| !p.exists())
        .unwrap_or(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 2).unwrap()
    }

    #[test]
    fn test_output_stem() {
        let stem = output_stem(Path::new("/data/intake"), &fixed_time(), TIMESTAMP_FORMAT);
        assert_eq!(stem, "intake-20240309-070502");
    }

    #[test]
    fn test_base_name_of_relative_dot() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("batch-7");
        fs::create_dir(&nested).unwrap();
        assert_eq!(base_name(&nested.join(".")), "batch-7");
    }

    #[test]
    fn test_invalid_format_falls_back() {
        assert_eq!(format_timestamp(&fixed_time(), "%Q"), "20240309-070502");
    }

    #[test]
    fn test_unique_output_path() {
        let dir = TempDir::new().unwrap();
        let first = unique_output_path(dir.path(), "forms-1");
        assert_eq!(first, dir.path().join("forms-1.xlsx"));

        fs::write(&first, b"").unwrap();
        let second = unique_output_path(dir.path(), "forms-1");
        assert_eq!(second, dir.path().join("forms-1-1.xlsx"));

        fs::write(&second, b"").unwrap();
        assert_eq!(
            unique_output_path(dir.path(), "forms-1"),
            dir.path().join("forms-1-2.xlsx")
        );
    }
}
