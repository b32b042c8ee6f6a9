//! Location helpers for `~`-rooted virtual paths.
//!
//! A location is the home symbol followed by directory segments, each terminated by the
//! directory marker: `~/`, `~/Documents/`.

use super::types::VfsError;

/// Root symbol of every location.
pub const HOME: &str = "~";
/// Marker terminating directory names and separating segments.
pub const DIRECTORY_MARKER: char = '/';
/// Home location.
pub const HOME_LOCATION: &str = "~/";

/// Splits a location into its directory segments, excluding the home symbol.
///
/// Empty segments (doubled or trailing separators) are skipped.
pub fn location_segments(path: &str) -> Result<Vec<&str>, VfsError> {
    let mut parts = path.trim().split(DIRECTORY_MARKER);
    if parts.next() != Some(HOME) {
        return Err(VfsError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(parts.filter(|segment| !segment.is_empty()).collect())
}

/// Normalizes a location to `~/seg/.../` form.
pub fn normalize_location(path: &str) -> Result<String, VfsError> {
    let segments = location_segments(path)?;
    Ok(segments.iter().fold(HOME_LOCATION.to_string(), |mut out, segment| {
        out.push_str(segment);
        out.push(DIRECTORY_MARKER);
        out
    }))
}

/// Returns `true` when `path` denotes the home location.
pub fn is_home(path: &str) -> bool {
    location_segments(path)
        .map(|segments| segments.is_empty())
        .unwrap_or(false)
}

/// Appends one directory segment. `name` may carry its trailing marker.
pub fn join_location(location: &str, name: &str) -> String {
    let mut out = location.to_string();
    if !out.ends_with(DIRECTORY_MARKER) {
        out.push(DIRECTORY_MARKER);
    }
    out.push_str(name.trim_end_matches(DIRECTORY_MARKER));
    out.push(DIRECTORY_MARKER);
    out
}

/// Parent location. Home and malformed paths map to home.
pub fn parent_location(path: &str) -> String {
    match location_segments(path) {
        Ok(mut segments) => {
            segments.pop();
            segments.iter().fold(HOME_LOCATION.to_string(), |out, segment| {
                join_location(&out, segment)
            })
        }
        Err(_) => HOME_LOCATION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_location_matches_expected_cases() {
        let cases = [
            ("~", "~/"),
            ("~/", "~/"),
            ("~/Documents", "~/Documents/"),
            ("~//Documents//", "~/Documents/"),
            ("  ~/Music/Live/ ", "~/Music/Live/"),
        ];

        for (input, expected) in cases {
            assert_eq!(
                normalize_location(input).as_deref(),
                Ok(expected),
                "input={input:?}"
            );
        }
        assert!(normalize_location("/Documents").is_err());
        assert!(normalize_location("").is_err());
    }

    #[test]
    fn join_and_parent_are_inverse() {
        let joined = join_location("~/", "Documents/");
        assert_eq!(joined, "~/Documents/");
        assert_eq!(join_location("~/Documents", "Drafts"), "~/Documents/Drafts/");
        assert_eq!(parent_location(&joined), "~/");
        assert_eq!(parent_location("~/Documents/Drafts/"), "~/Documents/");
        assert_eq!(parent_location("~/"), "~/");
    }

    #[test]
    fn is_home_only_for_root() {
        assert!(is_home("~/"));
        assert!(is_home("~"));
        assert!(!is_home("~/Documents/"));
        assert!(!is_home("Documents"));
    }
}
