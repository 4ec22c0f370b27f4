use crate::app::providers::null_as_empty;
use crate::domain::model::CepAddress;
use crate::domain::ports::ProviderSchema;
use serde::Deserialize;

/// BrasilAPI `/api/cep/v1/{cep}` 回應
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BrasilApiResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub state: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub city: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub neighborhood: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub street: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub service: String,
}

impl ProviderSchema for BrasilApiResponse {
    fn into_address(self, origin: &str) -> CepAddress {
        CepAddress {
            origin: origin.to_string(),
            cep: self.cep,
            state: self.state,
            city: self.city,
            neighborhood: self.neighborhood,
            street: self.street,
        }
    }
}
