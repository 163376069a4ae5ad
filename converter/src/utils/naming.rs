//! Color key naming helpers.

/// Generate a Tailwind compatible color name from a VS Code color key.
///
/// Dots become hyphens, every uppercase letter is preceded by a hyphen, the
/// result is lowercased and a single leading hyphen is dropped.
///
/// `editor.background` becomes `editor-background` and `sideBar.background`
/// becomes `side-bar-background`.
pub fn tailwind_color_name(key: &str) -> String {
    let mut name = String::with_capacity(key.len() + 4);

    for ch in key.chars() {
        if ch == '.' {
            name.push('-');
        } else if ch.is_ascii_uppercase() {
            name.push('-');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.extend(ch.to_lowercase());
        }
    }

    match name.strip_prefix('-') {
        Some(stripped) => stripped.to_string(),
        None => name,
    }
}
