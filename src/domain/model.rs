use crate::utils::error::{CepError, Result};
use crate::utils::validation::is_valid_cep;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// 已驗證的 CEP，只能透過 [`Cep::parse`] 建立
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cep(String);

impl Cep {
    pub fn parse(raw: &str) -> Result<Self> {
        if is_valid_cep(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CepError::InvalidFormat {
                cep: raw.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Provider-agnostic address, tagged with the provider that answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepAddress {
    pub origin: String,
    pub cep: String,
    pub state: String,
    pub city: String,
    pub neighborhood: String,
    pub street: String,
}

impl CepAddress {
    /// Single-line JSON, as printed by the CLI.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Compares everything except `origin`.
    pub fn same_location(&self, other: &CepAddress) -> bool {
        self.cep == other.cep
            && self.state == other.state
            && self.city == other.city
            && self.neighborhood == other.neighborhood
            && self.street == other.street
    }
}

/// What a single provider produces for one lookup.
pub type ProviderOutcome = Result<CepAddress>;

/// Terminal state of a race. Exactly one is produced per race.
#[derive(Debug)]
pub enum Resolution {
    Success(CepAddress),
    Failure(CepError),
    Timeout(Duration),
}

impl Resolution {
    pub fn into_result(self) -> Result<CepAddress> {
        match self {
            Resolution::Success(address) => Ok(address),
            Resolution::Failure(err) => Err(err),
            Resolution::Timeout(elapsed) => Err(CepError::Timeout { elapsed }),
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Resolution::Timeout(_))
    }
}
