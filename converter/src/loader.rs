//! Reading theme documents and custom mapping files.
//!
//! Themes come from a local file or an http(s) URL. VS Code theme files are
//! "JSON with comments", so the raw text is cleaned with [`clean_theme_json`]
//! before it is handed to `serde_json`.

use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::errors::{HttpError, MappingError, SourceKind, ThemeLoadError};
use crate::mappings::ColorMapping;
use crate::model::ThemeDocument;
use crate::validation::{ColorMappingValidator, Validator};

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("themewind/", env!("CARGO_PKG_VERSION"));

/// Where to read a theme from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeSource {
    File(PathBuf),
    Url(String),
}

impl ThemeSource {
    /// Classify a command line input. Anything that parses as an `http` or
    /// `https` URL is fetched; everything else is treated as a file path.
    pub fn from_input(input: &str) -> Self {
        match Url::parse(input) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {
                ThemeSource::Url(input.to_string())
            }
            _ => ThemeSource::File(PathBuf::from(input)),
        }
    }

    pub fn kind(&self) -> SourceKind {
        match self {
            ThemeSource::File(_) => SourceKind::File,
            ThemeSource::Url(_) => SourceKind::Url,
        }
    }

    pub fn is_url(&self) -> bool {
        matches!(self, ThemeSource::Url(_))
    }
}

impl fmt::Display for ThemeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeSource::File(path) => write!(f, "{}", path.display()),
            ThemeSource::Url(url) => f.write_str(url),
        }
    }
}

/// Make VS Code "JSON with comments" parseable by a strict JSON parser.
///
/// Removes `//` and `/* */` comments, trailing commas before `}` or `]`, and
/// raw control characters inside string literals. String contents are
/// otherwise left alone, so URLs like `"https://..."` survive.
pub fn clean_theme_json(content: &str) -> String {
    strip_trailing_commas(&strip_comments(content))
}

fn strip_comments(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    let mut chars = content.chars().peekable();
    let mut in_string = false;
    let mut escaped = false;

    while let Some(c) = chars.next() {
        if in_string {
            if escaped {
                escaped = false;
                out.push(c);
            } else if c == '\\' {
                escaped = true;
                out.push(c);
            } else if c == '"' {
                in_string = false;
                out.push(c);
            } else if (c as u32) >= 0x20 {
                out.push(c);
            }
            continue;
        }

        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            '/' if chars.peek() == Some(&'/') => {
                // Line comment: drop up to, not including, the newline
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for next in chars.by_ref() {
                    if previous == '*' && next == '/' {
                        break;
                    }
                    previous = next;
                }
            }
            _ => out.push(c),
        }
    }

    out
}

fn strip_trailing_commas(content: &str) -> String {
    let chars: Vec<char> = content.chars().collect();
    let mut out = String::with_capacity(content.len());
    let mut in_string = false;
    let mut escaped = false;

    for (index, &c) in chars.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            out.push(c);
            continue;
        }

        if c == '"' {
            in_string = true;
        } else if c == ',' {
            let next = chars[index + 1..]
                .iter()
                .copied()
                .find(|n| !n.is_whitespace());
            if matches!(next, Some('}' | ']')) {
                continue;
            }
        }
        out.push(c);
    }

    out
}

/// Clean and parse theme text.
pub fn parse_theme(content: &str) -> Result<ThemeDocument, serde_json::Error> {
    serde_json::from_str(&clean_theme_json(content))
}

/// Loads theme documents from files or URLs.
#[derive(Debug, Clone)]
pub struct ThemeLoader {
    timeout: Duration,
    user_agent: String,
}

impl Default for ThemeLoader {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ThemeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Read and parse a theme.
    ///
    /// # Errors
    ///
    /// Every failure is reported as a single [`ThemeLoadError`] naming the
    /// source kind. Nothing is retried.
    pub async fn load(&self, source: &ThemeSource) -> Result<ThemeDocument, ThemeLoadError> {
        let content = match source {
            ThemeSource::File(path) if !path.exists() => {
                return Err(ThemeLoadError::NotFound {
                    input: path.display().to_string(),
                });
            }
            ThemeSource::File(path) => tokio::fs::read_to_string(path).await.map_err(|e| {
                ThemeLoadError::FileRead {
                    path: path.clone(),
                    source: e,
                }
            })?,
            ThemeSource::Url(url) => self.fetch(url).await?,
        };

        let theme = parse_theme(&content).map_err(|e| ThemeLoadError::Parse {
            kind: source.kind(),
            location: source.to_string(),
            source: e,
        })?;

        log::info!(
            "Loaded theme '{}' from {} ({} colors, {} token rules)",
            theme.name.as_deref().unwrap_or("unnamed"),
            source,
            theme.colors.as_ref().map_or(0, |c| c.len()),
            theme.token_colors.as_ref().map_or(0, |t| t.len())
        );

        Ok(theme)
    }

    /// Download the raw text of a theme.
    pub async fn fetch(&self, url: &str) -> Result<String, HttpError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.as_str())
            .build()
            .map_err(|e| HttpError::ClientCreation {
                reason: e.to_string(),
            })?;

        log::debug!("Fetching theme from {url}");

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|e| self.request_error(url, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(HttpError::Status {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response.text().await.map_err(|e| self.request_error(url, e))
    }

    fn request_error(&self, url: &str, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::Timeout {
                url: url.to_string(),
                seconds: self.timeout.as_secs(),
            }
        } else {
            HttpError::RequestFailed {
                url: url.to_string(),
                reason: error.to_string(),
            }
        }
    }
}

#[derive(Deserialize)]
struct MappingTable {
    mappings: Vec<ColorMapping>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonMappings {
    List(Vec<ColorMapping>),
    Table(MappingTable),
}

/// Load extra color mappings from a `.json` or `.toml` file.
///
/// JSON files hold either an array of mappings or `{ "mappings": [...] }`;
/// TOML files use `[[mappings]]` tables. Keys are camelCase in both:
///
/// ```toml
/// [[mappings]]
/// vscodeKey = "editorLineNumber.foreground"
/// tailwindPath = "colors.lineNumber"
/// description = "Line numbers"
/// ```
pub fn load_custom_mappings(path: &Path) -> Result<Vec<ColorMapping>, MappingError> {
    if !path.exists() {
        return Err(MappingError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let content = std::fs::read_to_string(path).map_err(|e| MappingError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let mappings = match extension.as_deref() {
        Some("json") | Some("jsonc") => {
            match serde_json::from_str::<JsonMappings>(&clean_theme_json(&content)) {
                Ok(JsonMappings::List(mappings)) => mappings,
                Ok(JsonMappings::Table(table)) => table.mappings,
                Err(e) => {
                    return Err(MappingError::Parse {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }
        Some("toml") => {
            toml::from_str::<MappingTable>(&content)
                .map_err(|e| MappingError::Parse {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })?
                .mappings
        }
        _ => {
            return Err(MappingError::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }
    };

    let validator = ColorMappingValidator;
    for (index, mapping) in mappings.iter().enumerate() {
        validator
            .validate(mapping)
            .map_err(|e| MappingError::Invalid {
                index: index + 1,
                key: mapping.vscode_key.to_string(),
                reason: e.reason().to_string(),
            })?;
    }

    log::info!(
        "Loaded {} custom mappings from {}",
        mappings.len(),
        path.display()
    );

    Ok(mappings)
}
