use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::fmt;

use crate::utils::path::count_colors;

/// The kind of a VS Code theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThemeType {
    #[serde(rename = "dark")]
    Dark,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "hc-black")]
    HighContrastDark,
    #[serde(rename = "hc-light")]
    HighContrastLight,
}

impl fmt::Display for ThemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ThemeType::Dark => "dark",
            ThemeType::Light => "light",
            ThemeType::HighContrastDark => "hc-black",
            ThemeType::HighContrastLight => "hc-light",
        };
        f.write_str(name)
    }
}

/// Deserialize an optional field, treating a value of the wrong shape as absent.
///
/// Theme files in the wild carry `null` colors, numbers and vendor specific
/// type tags. None of those may reject the whole document.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// A parsed VS Code color theme.
///
/// Parsing is tolerant: fields of an unexpected shape are read as absent and
/// `colors` keeps every value as raw JSON so that non-string entries can be
/// reported and skipped during conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDocument {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub theme_type: Option<ThemeType>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub colors: Option<IndexMap<String, Value>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub token_colors: Option<Vec<TokenRule>>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub semantic_highlighting: Option<bool>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub semantic_token_colors: Option<IndexMap<String, SemanticTokenValue>>,
}

impl ThemeDocument {
    /// Look up a color slot holding a string.
    pub fn color(&self, key: &str) -> Option<&str> {
        self.color_value(key)?.as_str()
    }

    /// Look up a color slot of any JSON type. `null` counts as unset.
    pub fn color_value(&self, key: &str) -> Option<&Value> {
        self.colors.as_ref()?.get(key).filter(|value| !value.is_null())
    }
}

/// Text of a raw color slot value: strings as they are, anything else in its
/// JSON form.
pub fn slot_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(text) => Cow::Borrowed(text),
        other => Cow::Owned(other.to_string()),
    }
}

/// A `tokenColors` entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenRule {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub scope: Option<TokenScope>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub settings: TokenStyle,
}

/// A scope selector: either one scope string or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenScope {
    Single(String),
    Multiple(Vec<String>),
}

impl TokenScope {
    /// The individual scope strings, in declaration order.
    pub fn scopes(&self) -> Vec<&str> {
        match self {
            TokenScope::Single(scope) => vec![scope.as_str()],
            TokenScope::Multiple(scopes) => scopes.iter().map(String::as_str).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            TokenScope::Single(scope) => scope.is_empty(),
            TokenScope::Multiple(scopes) => scopes.is_empty(),
        }
    }
}

impl fmt::Display for TokenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scopes().join(", "))
    }
}

/// Style settings shared by token rules and semantic tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenStyle {
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub foreground: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub background: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub font_style: Option<String>,
}

/// A `semanticTokenColors` value: a plain color, a style object, or some
/// other shape (e.g. `true`) that carries no foreground.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SemanticTokenValue {
    Color(String),
    Style(TokenStyle),
    Other(Value),
}

impl SemanticTokenValue {
    pub fn foreground(&self) -> Option<&str> {
        match self {
            SemanticTokenValue::Color(color) => Some(color),
            SemanticTokenValue::Style(style) => style.foreground.as_deref(),
            SemanticTokenValue::Other(_) => None,
        }
    }
}

/// Tailwind configuration produced by a conversion:
/// `{ "theme": { "extend": { "colors": { ... } } } }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailwindConfig {
    pub theme: TailwindTheme,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TailwindTheme {
    pub extend: Map<String, Value>,
}

impl TailwindConfig {
    pub fn new(extend: Map<String, Value>) -> Self {
        Self {
            theme: TailwindTheme { extend },
        }
    }

    /// The `theme.extend` object.
    pub fn extend(&self) -> &Map<String, Value> {
        &self.theme.extend
    }

    /// The `theme.extend.colors` object, if present.
    pub fn colors(&self) -> Option<&Map<String, Value>> {
        self.theme.extend.get("colors").and_then(Value::as_object)
    }

    /// Number of color values anywhere under `theme.extend`.
    pub fn color_count(&self) -> usize {
        self.theme.extend.values().map(count_colors).sum()
    }
}
