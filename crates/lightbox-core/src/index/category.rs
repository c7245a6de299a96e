use crate::consts::MISC_CATEGORY;

/// Derive the category of one entry.
///
/// The folder right after the last marker directory wins when it is itself
/// a directory (`assets/images/Foo/bar.png` gives `Foo`). Otherwise the
/// leading letters of `name` before a `-` or `_` are used, then `Misc`.
pub fn derive_category(raw_path: Option<&str>, name: &str, markers: &[String]) -> String {
    raw_path
        .and_then(|path| folder_category(path, markers))
        .or_else(|| prefix_category(name))
        .unwrap_or_else(|| MISC_CATEGORY.to_string())
}

/// Category from folder structure, if the path has one.
pub fn folder_category(path: &str, markers: &[String]) -> Option<String> {
    let path = path.strip_prefix("./").unwrap_or(path);
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 3 {
        return None;
    }

    // Only directories can be markers or categories; the last segment is the file.
    let dirs = &segments[..segments.len() - 1];
    let is_marker = |seg: &str| markers.iter().any(|m| m.eq_ignore_ascii_case(seg));

    (0..dirs.len())
        .rev()
        .filter(|&i| is_marker(dirs[i]))
        .find_map(|i| {
            dirs.get(i + 1)
                .filter(|next| !next.is_empty() && !is_marker(**next))
                .map(|next| next.to_string())
        })
}

/// Category from a `Letters-rest` or `Letters_rest` name.
pub fn prefix_category(name: &str) -> Option<String> {
    let letters = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_alphabetic())
        .map(|(i, _)| i)
        .unwrap_or(name.len());
    if letters == 0 {
        return None;
    }
    match name[letters..].chars().next() {
        Some('-') | Some('_') => Some(name[..letters].to_string()),
        _ => None,
    }
}
