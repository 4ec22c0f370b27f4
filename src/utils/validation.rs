use crate::utils::error::{CepError, Result};
use regex::Regex;
use std::sync::LazyLock;
use std::time::Duration;
use url::Url;

// 只接受 ASCII 數字，Rust 的 \d 預設會匹配 Unicode 數字
static CEP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{5}-[0-9]{3}$").expect("CEP pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 檢查 CEP 格式 (00000-000)，不合法時回傳 false 而非錯誤
pub fn is_valid_cep(candidate: &str) -> bool {
    CEP_PATTERN.is_match(candidate)
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CepError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CepError::InvalidConfig {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CepError::InvalidConfig {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CepError::InvalidConfig {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_zero_duration(field_name: &str, value: Duration) -> Result<()> {
    if value.is_zero() {
        return Err(CepError::InvalidConfig {
            field: field_name.to_string(),
            value: format!("{:?}", value),
            reason: "Duration must be greater than zero".to_string(),
        });
    }
    Ok(())
}
