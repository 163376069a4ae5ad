//! Static mapping tables from VS Code theme keys to Tailwind color paths.
//!
//! All tables are ordered. Mappings are applied in declaration order and scope
//! patterns are matched first-wins, so entries must not be reordered.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single VS Code color key to Tailwind path mapping.
///
/// Custom mapping files use the same camelCase keys as the table below:
///
/// ```json
/// [{ "vscodeKey": "editorLineNumber.foreground", "tailwindPath": "colors.lineNumber", "description": "Line numbers" }]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorMapping {
    pub vscode_key: Cow<'static, str>,
    pub tailwind_path: Cow<'static, str>,
    #[serde(default)]
    pub description: Cow<'static, str>,
}

impl ColorMapping {
    /// Build a mapping at compile time for the static tables.
    pub const fn new(
        vscode_key: &'static str,
        tailwind_path: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            vscode_key: Cow::Borrowed(vscode_key),
            tailwind_path: Cow::Borrowed(tailwind_path),
            description: Cow::Borrowed(description),
        }
    }

    /// Build a mapping from owned strings, e.g. for caller supplied extensions.
    pub fn custom(
        vscode_key: impl Into<String>,
        tailwind_path: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            vscode_key: Cow::Owned(vscode_key.into()),
            tailwind_path: Cow::Owned(tailwind_path.into()),
            description: Cow::Owned(description.into()),
        }
    }
}

/// Default mapping from VS Code theme colors to Tailwind CSS colors.
pub static DEFAULT_COLOR_MAPPINGS: &[ColorMapping] = &[
    // === Editor ===
    ColorMapping::new(
        "editor.background",
        "colors.background",
        "Editor background",
    ),
    ColorMapping::new(
        "editor.foreground",
        "colors.foreground",
        "Editor text color",
    ),
    ColorMapping::new("editorCursor.foreground", "colors.cursor", "Cursor color"),
    ColorMapping::new(
        "editor.selectionBackground",
        "colors.selection",
        "Selection background",
    ),
    ColorMapping::new(
        "editor.lineHighlightBackground",
        "colors.lineHighlight",
        "Current line highlight",
    ),
    // === Sidebar ===
    ColorMapping::new(
        "sideBar.background",
        "colors.sidebar.background",
        "Sidebar background",
    ),
    ColorMapping::new(
        "sideBar.foreground",
        "colors.sidebar.foreground",
        "Sidebar text",
    ),
    ColorMapping::new(
        "sideBarTitle.foreground",
        "colors.sidebar.title",
        "Sidebar title",
    ),
    // === Activity bar ===
    ColorMapping::new(
        "activityBar.background",
        "colors.activityBar.background",
        "Activity bar background",
    ),
    ColorMapping::new(
        "activityBar.foreground",
        "colors.activityBar.foreground",
        "Activity bar icons",
    ),
    ColorMapping::new(
        "activityBar.activeBorder",
        "colors.activityBar.active",
        "Active activity bar item",
    ),
    // === Status bar ===
    ColorMapping::new(
        "statusBar.background",
        "colors.statusBar.background",
        "Status bar background",
    ),
    ColorMapping::new(
        "statusBar.foreground",
        "colors.statusBar.foreground",
        "Status bar text",
    ),
    // === Tabs ===
    ColorMapping::new(
        "tab.activeBackground",
        "colors.tab.active",
        "Active tab background",
    ),
    ColorMapping::new(
        "tab.inactiveBackground",
        "colors.tab.inactive",
        "Inactive tab background",
    ),
    ColorMapping::new(
        "tab.activeForeground",
        "colors.tab.activeForeground",
        "Active tab text",
    ),
    ColorMapping::new(
        "tab.inactiveForeground",
        "colors.tab.inactiveForeground",
        "Inactive tab text",
    ),
    // === Buttons ===
    ColorMapping::new(
        "button.background",
        "colors.button.primary",
        "Primary button background",
    ),
    ColorMapping::new(
        "button.foreground",
        "colors.button.primaryText",
        "Primary button text",
    ),
    ColorMapping::new(
        "button.hoverBackground",
        "colors.button.primaryHover",
        "Primary button hover",
    ),
    // === Inputs ===
    ColorMapping::new(
        "input.background",
        "colors.input.background",
        "Input background",
    ),
    ColorMapping::new("input.foreground", "colors.input.foreground", "Input text"),
    ColorMapping::new("input.border", "colors.input.border", "Input border"),
    // === Lists ===
    ColorMapping::new(
        "list.activeSelectionBackground",
        "colors.list.activeSelection",
        "Active list item",
    ),
    ColorMapping::new(
        "list.hoverBackground",
        "colors.list.hover",
        "List item hover",
    ),
    ColorMapping::new(
        "list.focusBackground",
        "colors.list.focus",
        "Focused list item",
    ),
    // === Terminal ===
    ColorMapping::new(
        "terminal.background",
        "colors.terminal.background",
        "Terminal background",
    ),
    ColorMapping::new(
        "terminal.foreground",
        "colors.terminal.foreground",
        "Terminal text",
    ),
    ColorMapping::new(
        "terminal.ansiBlack",
        "colors.terminal.black",
        "Terminal black",
    ),
    ColorMapping::new("terminal.ansiRed", "colors.terminal.red", "Terminal red"),
    ColorMapping::new(
        "terminal.ansiGreen",
        "colors.terminal.green",
        "Terminal green",
    ),
    ColorMapping::new(
        "terminal.ansiYellow",
        "colors.terminal.yellow",
        "Terminal yellow",
    ),
    ColorMapping::new("terminal.ansiBlue", "colors.terminal.blue", "Terminal blue"),
    ColorMapping::new(
        "terminal.ansiMagenta",
        "colors.terminal.magenta",
        "Terminal magenta",
    ),
    ColorMapping::new("terminal.ansiCyan", "colors.terminal.cyan", "Terminal cyan"),
    ColorMapping::new(
        "terminal.ansiWhite",
        "colors.terminal.white",
        "Terminal white",
    ),
    // === Syntax (normally populated from tokenColors) ===
    ColorMapping::new("keyword", "colors.syntax.keyword", "Keywords"),
    ColorMapping::new("string", "colors.syntax.string", "Strings"),
    ColorMapping::new("comment", "colors.syntax.comment", "Comments"),
    ColorMapping::new("variable", "colors.syntax.variable", "Variables"),
    ColorMapping::new("function", "colors.syntax.function", "Functions"),
    ColorMapping::new("type", "colors.syntax.type", "Types"),
    ColorMapping::new("number", "colors.syntax.number", "Numbers"),
    ColorMapping::new("operator", "colors.syntax.operator", "Operators"),
];

/// Scope substring patterns for syntax highlighting, matched first-wins.
pub static SYNTAX_SCOPE_MAPPINGS: &[(&str, &str)] = &[
    ("keyword", "colors.syntax.keyword"),
    ("keyword.control", "colors.syntax.keyword"),
    ("keyword.operator", "colors.syntax.operator"),
    ("string", "colors.syntax.string"),
    ("string.quoted", "colors.syntax.string"),
    ("comment", "colors.syntax.comment"),
    ("comment.line", "colors.syntax.comment"),
    ("comment.block", "colors.syntax.comment"),
    ("variable", "colors.syntax.variable"),
    ("variable.parameter", "colors.syntax.variable"),
    ("entity.name.function", "colors.syntax.function"),
    ("entity.name.type", "colors.syntax.type"),
    ("entity.name.class", "colors.syntax.type"),
    ("constant.numeric", "colors.syntax.number"),
    ("constant.language", "colors.syntax.constant"),
    ("support.function", "colors.syntax.function"),
    ("support.type", "colors.syntax.type"),
    ("storage.type", "colors.syntax.type"),
    ("storage.modifier", "colors.syntax.keyword"),
];

/// A built-in fallback color for a syntax category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntaxDefault {
    pub category: &'static str,
    pub path: &'static str,
    pub color: &'static str,
}

/// Fallback colors (VS Code Dark+) for syntax categories the theme leaves unset.
pub static DEFAULT_SYNTAX_COLORS: &[SyntaxDefault] = &[
    SyntaxDefault {
        category: "keyword",
        path: "colors.syntax.keyword",
        color: "#569cd6",
    },
    SyntaxDefault {
        category: "string",
        path: "colors.syntax.string",
        color: "#ce9178",
    },
    SyntaxDefault {
        category: "comment",
        path: "colors.syntax.comment",
        color: "#6a9955",
    },
    SyntaxDefault {
        category: "variable",
        path: "colors.syntax.variable",
        color: "#9cdcfe",
    },
    SyntaxDefault {
        category: "function",
        path: "colors.syntax.function",
        color: "#dcdcaa",
    },
    SyntaxDefault {
        category: "type",
        path: "colors.syntax.type",
        color: "#4ec9b0",
    },
    SyntaxDefault {
        category: "number",
        path: "colors.syntax.number",
        color: "#b5cea8",
    },
    SyntaxDefault {
        category: "operator",
        path: "colors.syntax.operator",
        color: "#d4d4d4",
    },
];

/// Find the Tailwind path for a token scope. The first pattern contained in
/// `scope` wins.
pub fn match_scope(scope: &str) -> Option<(&'static str, &'static str)> {
    SYNTAX_SCOPE_MAPPINGS
        .iter()
        .find(|(pattern, _)| scope.contains(pattern))
        .copied()
}

/// The mapping list applied to the theme's `colors`: defaults first, then the
/// caller supplied extensions.
pub fn effective_mappings(custom: &[ColorMapping]) -> impl Iterator<Item = &ColorMapping> {
    DEFAULT_COLOR_MAPPINGS.iter().chain(custom.iter())
}
