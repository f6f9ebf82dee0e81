//! Path normalization for mapping paths

/// The root of a tree.
pub const ROOT: &str = "/";

/// Clean a mapping path.
///
/// Empty input stays empty, meaning "root of the destination, no relocation".
/// Anything else is cleaned as if it were rooted: empty and `.` segments are
/// dropped, `..` removes the previous segment but never climbs above the
/// root. The result is a relative path without leading or trailing
/// separators, or [`ROOT`] when nothing remains.
///
/// Cleaning is idempotent.
pub fn clean_path(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s => segments.push(s),
        }
    }

    if segments.is_empty() {
        ROOT.to_string()
    } else {
        segments.join("/")
    }
}

/// Whether a cleaned path designates the whole tree.
///
/// Isolating or relocating to the root is an identity transform, so the
/// planner skips those steps for root paths.
pub fn is_root(path: &str) -> bool {
    path.is_empty() || path == ROOT
}
