use thiserror::Error;

#[derive(Debug, Error)]
pub enum MarkupConfigError {
    #[error("Failed to decode '{section}' section: {reason}")]
    Decode { section: String, reason: String },

    #[error("Unknown keys in '{section}' section: {}", keys.join(", "))]
    UnknownKeys { section: String, keys: Vec<String> },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Invalid value for '{key}': {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to export documentation: {0}")]
    DocsExport(#[from] serde_json::Error),
}
