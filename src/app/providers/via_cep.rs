use crate::app::providers::null_as_empty;
use crate::domain::model::CepAddress;
use crate::domain::ports::ProviderSchema;
use serde::Deserialize;

/// ViaCEP `/ws/{cep}/json/` 回應，欄位名稱為葡萄牙文
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ViaCepResponse {
    #[serde(deserialize_with = "null_as_empty")]
    pub cep: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub uf: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub localidade: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub bairro: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub logradouro: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub complemento: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub unidade: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub estado: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub regiao: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ibge: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub gia: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub ddd: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub siafi: String,
}

impl ProviderSchema for ViaCepResponse {
    fn into_address(self, origin: &str) -> CepAddress {
        CepAddress {
            origin: origin.to_string(),
            cep: self.cep,
            state: self.uf,
            city: self.localidade,
            neighborhood: self.bairro,
            street: self.logradouro,
        }
    }
}
