//! Internal module for splitting raw path strings into segment sequences.

use crate::error::PathTreeError;
use crate::types::PathSegments;

/// Separators accepted when none are configured: forward slash and backslash.
pub const DEFAULT_SEPARATORS: [char; 2] = ['/', '\\'];

/// Splits `raw` into its non-empty segment names.
///
/// Repeated, leading and trailing separators are collapsed, and whitespace-only and
/// `.` segments are dropped. `..` is kept verbatim since paths are never resolved
/// against a file system.
///
/// # Errors
///
/// Returns [`PathTreeError::EmptyPath`] for empty or whitespace-only input, and
/// [`PathTreeError::InvalidPath`] if the input contains a NUL character or has no
/// segments left after normalization (such as `"/"` or `" / "`).
pub fn parse_path(raw: &str, separators: &[char]) -> Result<PathSegments, PathTreeError> {
    if raw.trim().is_empty() {
        return Err(PathTreeError::EmptyPath);
    }
    if raw.contains('\0') {
        return Err(PathTreeError::invalid(raw, "contains a NUL character"));
    }
    let separators = if separators.is_empty() {
        &DEFAULT_SEPARATORS[..]
    } else {
        separators
    };
    let segments: Vec<String> = raw
        .split(|c: char| separators.contains(&c))
        .filter(|s| !s.trim().is_empty() && *s != ".")
        .map(str::to_string)
        .collect();
    if segments.is_empty() {
        return Err(PathTreeError::invalid(raw, "no path segments"));
    }
    Ok(PathSegments::new(segments))
}
