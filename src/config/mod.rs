#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{CepError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_zero_duration, validate_url, Validate,
};
use std::time::Duration;

pub const CEP_PLACEHOLDER: &str = "{cep}";

pub const BRASIL_API_URL_TEMPLATE: &str = "https://brasilapi.com.br/api/cep/v1/{cep}";
pub const VIA_CEP_URL_TEMPLATE: &str = "http://viacep.com.br/ws/{cep}/json/";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// 用來檢查模板替換後是否為合法 URL
const SAMPLE_CEP: &str = "00000-000";

/// Response schema spoken by a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    BrasilApi,
    ViaCep,
}

impl ProviderKind {
    pub fn default_name(&self) -> &'static str {
        match self {
            ProviderKind::BrasilApi => "Brasil API",
            ProviderKind::ViaCep => "Via CEP API",
        }
    }

    pub fn default_url_template(&self) -> &'static str {
        match self {
            ProviderKind::BrasilApi => BRASIL_API_URL_TEMPLATE,
            ProviderKind::ViaCep => VIA_CEP_URL_TEMPLATE,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub name: String,
    pub kind: ProviderKind,
    pub url_template: String,
    /// Artificial wait before the request is issued.
    pub delay: Duration,
}

impl ProviderConfig {
    pub fn new(kind: ProviderKind, url_template: impl Into<String>) -> Self {
        Self {
            name: kind.default_name().to_string(),
            kind,
            url_template: url_template.into(),
            delay: Duration::ZERO,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl From<ProviderKind> for ProviderConfig {
    fn from(kind: ProviderKind) -> Self {
        Self::new(kind, kind.default_url_template())
    }
}

/// Substitutes the code into every `{cep}` placeholder of a template.
pub fn apply_cep_to_template(template: &str, cep: &str) -> String {
    template.replace(CEP_PLACEHOLDER, cep)
}

impl Validate for ProviderConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("provider.name", &self.name)?;

        if !self.url_template.contains(CEP_PLACEHOLDER) {
            return Err(CepError::InvalidTemplate {
                provider: self.name.clone(),
                template: self.url_template.clone(),
                reason: format!("template must contain the {} placeholder", CEP_PLACEHOLDER),
            });
        }

        let sample = apply_cep_to_template(&self.url_template, SAMPLE_CEP);
        validate_url("provider.url_template", &sample).map_err(|e| CepError::InvalidTemplate {
            provider: self.name.clone(),
            template: self.url_template.clone(),
            reason: e.to_string(),
        })
    }
}

/// 一次競速查詢的設定：超時時間與參與的 provider
#[derive(Debug, Clone)]
pub struct RaceConfig {
    pub timeout: Duration,
    pub providers: Vec<ProviderConfig>,
}

impl RaceConfig {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_providers(mut self, providers: Vec<ProviderConfig>) -> Self {
        self.providers = providers;
        self
    }
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            providers: vec![
                ProviderKind::BrasilApi.into(),
                ProviderKind::ViaCep.into(),
            ],
        }
    }
}

impl Validate for RaceConfig {
    fn validate(&self) -> Result<()> {
        validate_non_zero_duration("timeout", self.timeout)?;

        if self.providers.is_empty() {
            return Err(CepError::NoProviders);
        }

        for provider in &self.providers {
            provider.validate()?;
        }

        Ok(())
    }
}
