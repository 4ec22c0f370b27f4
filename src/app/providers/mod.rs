pub mod brasil_api;
pub mod http_provider;
pub mod via_cep;

use crate::config::{ProviderConfig, ProviderKind};
use crate::domain::ports::CepProvider;
use reqwest::Client;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;

pub use brasil_api::BrasilApiResponse;
pub use http_provider::HttpProvider;
pub use via_cep::ViaCepResponse;

/// JSON `null` 與缺少欄位一樣視為空字串
pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// 依設定建立 provider，所有 provider 共用同一個 reqwest Client
pub fn build_providers(configs: &[ProviderConfig], client: &Client) -> Vec<Arc<dyn CepProvider>> {
    configs
        .iter()
        .map(|config| -> Arc<dyn CepProvider> {
            match config.kind {
                ProviderKind::BrasilApi => {
                    Arc::new(HttpProvider::<BrasilApiResponse>::new(config, client.clone()))
                }
                ProviderKind::ViaCep => {
                    Arc::new(HttpProvider::<ViaCepResponse>::new(config, client.clone()))
                }
            }
        })
        .collect()
}
