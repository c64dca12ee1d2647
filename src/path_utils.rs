use std::borrow::Cow;
use std::path::{Component, Path};

/// Normal (named) components of a path, lossily converted to strings.
///
/// Root, prefix, `.` and `..` components are skipped, so `./rtl/a.vhd` and
/// `rtl/a.vhd` yield the same segments.
#[must_use]
pub fn segments(path: &Path) -> Vec<Cow<'_, str>> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy()),
            _ => None,
        })
        .collect()
}

/// Check if the directory part of a path contains `fragment` as consecutive segments.
///
/// The fragment is split on both `/` and `\\`. Only parent directories are
/// considered, never the file name itself.
///
/// # Examples
///
/// - `"packet_scheduler/tb"` matches `"packet_scheduler/tb/opq_tb.vhd"`
/// - `"packet_scheduler/tb"` matches `"x/packet_scheduler/tb/sub/opq_tb.vhd"`
/// - `"packet_scheduler/tb"` does NOT match `"packet_scheduler/tb_new/a.vhd"`
/// - `"packet_scheduler/tb"` does NOT match `"packet_scheduler/tb"` (a file named `tb`)
#[must_use]
pub fn dir_contains_fragment(path: &Path, fragment: &str) -> bool {
    let wanted: Vec<&str> = fragment
        .split(['/', '\\'])
        .filter(|s| !s.is_empty())
        .collect();
    if wanted.is_empty() {
        return false;
    }

    let parts = segments(path);
    let Some((_, dirs)) = parts.split_last() else {
        return false;
    };

    dirs.windows(wanted.len()).any(|window| {
        window
            .iter()
            .zip(&wanted)
            .all(|(part, want)| **part == **want)
    })
}

/// Lower-cased file name, or an empty string for paths without one.
#[must_use]
pub fn file_name_lower(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Check if the file name ends with any of `suffixes`, ignoring ASCII case.
#[must_use]
pub fn has_suffix_ignore_case(path: &Path, suffixes: &[String]) -> bool {
    let name = file_name_lower(path);
    suffixes
        .iter()
        .filter(|s| !s.is_empty())
        .any(|suffix| name.ends_with(&suffix.to_lowercase()))
}
