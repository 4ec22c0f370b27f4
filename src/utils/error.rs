use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CepError {
    #[error("Invalid CEP: {cep} (expected format 00000-000)")]
    InvalidFormat { cep: String },

    #[error("{provider} request failed: {source}")]
    Transport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{provider} returned an unreadable body: {source}")]
    Deserialization {
        provider: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No provider answered within {}ms", .elapsed.as_millis())]
    Timeout { elapsed: Duration },

    #[error("Invalid URL template for {provider} ({template}): {reason}")]
    InvalidTemplate {
        provider: String,
        template: String,
        reason: String,
    },

    #[error("Invalid configuration value for {field}: {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("No providers configured")]
    NoProviders,

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// 錯誤分類，用於決定退出碼與提示訊息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Provider,
    Timeout,
    Configuration,
    Internal,
}

impl CepError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CepError::InvalidFormat { .. } => ErrorCategory::Input,
            CepError::Transport { .. } | CepError::Deserialization { .. } => {
                ErrorCategory::Provider
            }
            CepError::Timeout { .. } => ErrorCategory::Timeout,
            CepError::InvalidTemplate { .. }
            | CepError::InvalidConfig { .. }
            | CepError::NoProviders => ErrorCategory::Configuration,
            CepError::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// The provider that produced this error, when there is one.
    pub fn provider(&self) -> Option<&str> {
        match self {
            CepError::Transport { provider, .. }
            | CepError::Deserialization { provider, .. }
            | CepError::InvalidTemplate { provider, .. } => Some(provider.as_str()),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CepError::InvalidFormat { cep } => {
                format!("Invalid CEP '{}'. Use the format 00000-000.", cep)
            }
            CepError::Timeout { elapsed } => {
                format!("Timeout: no provider answered within {:?}", elapsed)
            }
            CepError::Transport { .. } | CepError::Deserialization { .. } => {
                format!("Lookup failed: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Provider | ErrorCategory::Internal => 1,
            ErrorCategory::Input | ErrorCategory::Configuration => 2,
            ErrorCategory::Timeout => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CepError>;
