use colored::Colorize;
use converter::DEFAULT_COLOR_MAPPINGS;
use std::fmt::Write;

const KEY_WIDTH: usize = 32;

/// The default mapping table, one mapping per entry with its description
/// on the following line.
pub fn render() -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "Default Color Mappings:".blue());
    let _ = writeln!(out, "{}", "VS Code Color -> Tailwind Path".bright_black());
    let _ = writeln!(out, "{}", "-".repeat(50).bright_black());

    for mapping in DEFAULT_COLOR_MAPPINGS {
        let key = format!("{:<width$}", mapping.vscode_key, width = KEY_WIDTH);
        let _ = writeln!(out, "{} -> {}", key.cyan(), mapping.tailwind_path.green());
        let _ = writeln!(
            out,
            "{}",
            format!("{}{}", " ".repeat(KEY_WIDTH + 4), mapping.description).bright_black()
        );
    }

    out
}
