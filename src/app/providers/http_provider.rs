use crate::config::{apply_cep_to_template, ProviderConfig};
use crate::domain::model::{Cep, ProviderOutcome};
use crate::domain::ports::{CepProvider, ProviderSchema};
use crate::utils::error::{CepError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::marker::PhantomData;
use std::time::Duration;
use url::Url;

/// Generic JSON-over-HTTP provider. `S` decides how the body is parsed and
/// normalized; everything else is data from [`ProviderConfig`].
pub struct HttpProvider<S: ProviderSchema> {
    name: String,
    url_template: String,
    delay: Duration,
    client: Client,
    _schema: PhantomData<fn() -> S>,
}

impl<S: ProviderSchema> HttpProvider<S> {
    pub fn new(config: &ProviderConfig, client: Client) -> Self {
        Self {
            name: config.name.clone(),
            url_template: config.url_template.clone(),
            delay: config.delay,
            client,
            _schema: PhantomData,
        }
    }

    pub fn request_url(&self, cep: &Cep) -> Result<Url> {
        let target = apply_cep_to_template(&self.url_template, cep.as_str());
        Url::parse(&target).map_err(|e| CepError::InvalidTemplate {
            provider: self.name.clone(),
            template: self.url_template.clone(),
            reason: e.to_string(),
        })
    }

    fn transport_error(&self, source: reqwest::Error) -> CepError {
        CepError::Transport {
            provider: self.name.clone(),
            source,
        }
    }
}

#[async_trait]
impl<S: ProviderSchema> CepProvider for HttpProvider<S> {
    fn name(&self) -> &str {
        &self.name
    }

    async fn lookup(&self, cep: &Cep) -> ProviderOutcome {
        if !self.delay.is_zero() {
            tracing::debug!("{} waiting {:?} before requesting", self.name, self.delay);
            tokio::time::sleep(self.delay).await;
        }

        let url = self.request_url(cep)?;
        tracing::debug!("{} -> GET {}", self.name, url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        tracing::debug!("{} response status: {}", self.name, response.status());

        // 非 2xx 視為傳輸失敗，避免把錯誤頁面解析成空地址
        let response = response
            .error_for_status()
            .map_err(|e| self.transport_error(e))?;
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        let parsed: S = serde_json::from_str(&body).map_err(|source| CepError::Deserialization {
            provider: self.name.clone(),
            source,
        })?;

        Ok(parsed.into_address(&self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::providers::via_cep::ViaCepResponse;
    use crate::config::ProviderKind;
    use httpmock::prelude::*;

    fn provider(template: String) -> HttpProvider<ViaCepResponse> {
        let config = ProviderConfig::new(ProviderKind::ViaCep, template);
        HttpProvider::new(&config, Client::new())
    }

    #[tokio::test]
    async fn test_lookup_parses_and_normalizes() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/ws/01310-100/json/");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "cep": "01310-100",
                    "logradouro": "Avenida Paulista",
                    "bairro": "Bela Vista",
                    "localidade": "São Paulo",
                    "uf": "SP"
                }));
        });

        let provider = provider(server.url("/ws/{cep}/json/"));
        let cep = Cep::parse("01310-100").unwrap();
        let address = provider.lookup(&cep).await.unwrap();

        api_mock.assert();
        assert_eq!(address.origin, "Via CEP API");
        assert_eq!(address.state, "SP");
        assert_eq!(address.street, "Avenida Paulista");
    }

    #[tokio::test]
    async fn test_error_status_is_transport_failure() {
        let server = MockServer::start();
        let api_mock = server.mock(|when, then| {
            when.method(GET).path("/ws/01310-100/json/");
            then.status(500);
        });

        let provider = provider(server.url("/ws/{cep}/json/"));
        let cep = Cep::parse("01310-100").unwrap();
        let result = provider.lookup(&cep).await;

        api_mock.assert();
        match result {
            Err(CepError::Transport { provider, .. }) => assert_eq!(provider, "Via CEP API"),
            other => panic!("expected Transport error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body_is_deserialization_failure() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/ws/01310-100/json/");
            then.status(200).body("<html>not json</html>");
        });

        let provider = provider(server.url("/ws/{cep}/json/"));
        let cep = Cep::parse("01310-100").unwrap();

        assert!(matches!(
            provider.lookup(&cep).await,
            Err(CepError::Deserialization { .. })
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_transport_failure() {
        // 埠號 1 通常沒有服務在監聽
        let provider = provider("http://127.0.0.1:1/ws/{cep}/json/".to_string());
        let cep = Cep::parse("01310-100").unwrap();

        assert!(matches!(
            provider.lookup(&cep).await,
            Err(CepError::Transport { .. })
        ));
    }

    #[test]
    fn test_request_url_rejects_broken_template() {
        let provider = provider("not a url/{cep}".to_string());
        let cep = Cep::parse("01310-100").unwrap();

        assert!(matches!(
            provider.request_url(&cep),
            Err(CepError::InvalidTemplate { .. })
        ));
    }
}
