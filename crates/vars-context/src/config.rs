//! Settings lookup backing `${config:...}`

use crate::{Error, NormalizedPath, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Settings file formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Toml => "TOML",
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }

    fn parse<T: DeserializeOwned>(self, content: &str) -> std::result::Result<T, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            Self::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Reads settings and command tables from disk.
///
/// `.toml`, `.json`, `.yaml` and `.yml` files are accepted; the extension
/// decides the parser.
#[derive(Debug, Default)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Deserialize the file at `path` into `T`.
    pub fn load<T: DeserializeOwned>(&self, path: &NormalizedPath) -> Result<T> {
        let native = path.to_native();
        let content = std::fs::read_to_string(&native).map_err(|e| Error::io(&native, e))?;

        let extension = path.extension().unwrap_or_default();
        let format = Format::from_extension(extension).ok_or_else(|| Error::UnsupportedFormat {
            extension: extension.to_string(),
        })?;
        tracing::debug!(path = %path, format = format.label(), "Loading config file");

        format.parse(&content).map_err(|message| Error::ConfigParse {
            path: native,
            format: format.label().to_string(),
            message,
        })
    }
}

/// Settings values keyed the way editors key them.
///
/// A key is looked up first as a literal top-level entry (`"editor.tabSize"`
/// stored flat, as in a `settings.json`), then as a dotted path through
/// nested tables (`[editor] tabSize = 4` in TOML).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigValues {
    root: Map<String, Value>,
}

impl ConfigValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Load settings from a TOML, JSON or YAML file whose root is a table.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        let value: Value = ConfigStore::new().load(path)?;
        match value {
            Value::Object(root) => Ok(Self { root }),
            Value::Null => Ok(Self::new()),
            other => Err(Error::InvalidConfig {
                path: path.to_native(),
                message: format!("expected a table at the root, found {}", kind(&other)),
            }),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.root.insert(key.into(), value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.root.get(key) {
            return Some(value);
        }

        let mut segments = key.split('.');
        let first = segments.next()?;
        let mut current = self.root.get(first)?;
        for segment in segments {
            current = current.as_object()?.get(segment)?;
        }
        Some(current)
    }

    /// The value under `key` rendered for substitution.
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).map(render_value)
    }
}

/// Render a settings value as substitution text.
///
/// Strings substitute verbatim, `null` as nothing, everything else as
/// compact JSON.
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a table",
    }
}
