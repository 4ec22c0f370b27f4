use crate::config::RaceConfig;
use crate::core::race::RaceCoordinator;
use crate::domain::model::{Cep, CepAddress};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use reqwest::Client;

/// 查詢入口：先驗證格式，再交給 RaceCoordinator
pub struct CepLookup {
    coordinator: RaceCoordinator,
}

impl CepLookup {
    pub fn new(coordinator: RaceCoordinator) -> Self {
        Self { coordinator }
    }

    pub fn from_config(config: &RaceConfig) -> Result<Self> {
        config.validate()?;
        let client = Client::new();
        Ok(Self::new(RaceCoordinator::from_config(config, &client)))
    }

    pub async fn lookup(&self, raw: &str) -> Result<CepAddress> {
        // 格式錯誤時不發出任何請求
        let cep = Cep::parse(raw).inspect_err(|e| tracing::debug!("{}", e))?;

        tracing::debug!("Looking up CEP {}", cep);
        self.coordinator.resolve(&cep).await
    }
}
