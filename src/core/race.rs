use crate::app::providers::build_providers;
use crate::config::RaceConfig;
use crate::domain::model::{Cep, CepAddress, ProviderOutcome, Resolution};
use crate::domain::ports::CepProvider;
use crate::utils::error::{CepError, Result};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

/// Runs every provider concurrently and keeps only the first outcome.
///
/// The first outcome to arrive wins whether it is a success or a failure.
/// If nothing arrives before the deadline, measured once from race start,
/// the race resolves to [`Resolution::Timeout`]. Providers still in flight
/// are cancelled once the race is decided.
pub struct RaceCoordinator {
    providers: Vec<Arc<dyn CepProvider>>,
    timeout: Duration,
}

impl RaceCoordinator {
    pub fn new(providers: Vec<Arc<dyn CepProvider>>, timeout: Duration) -> Self {
        Self { providers, timeout }
    }

    pub fn from_config(config: &RaceConfig, client: &Client) -> Self {
        Self::new(build_providers(&config.providers, client), config.timeout)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn providers(&self) -> &[Arc<dyn CepProvider>] {
        &self.providers
    }

    pub async fn race(&self, cep: &Cep) -> Resolution {
        if self.providers.is_empty() {
            return Resolution::Failure(CepError::NoProviders);
        }

        let deadline = Instant::now() + self.timeout;
        let cancel = CancellationToken::new();
        // race 返回或被 drop 時取消所有仍在執行的 provider
        let _cancel_on_exit = cancel.clone().drop_guard();

        // 容量等於 provider 數量，每個 provider 最多送一次，送出永遠不會阻塞
        let (tx, mut rx) = mpsc::channel::<ProviderOutcome>(self.providers.len());

        tracing::info!(
            "🏁 Racing {} providers for CEP {} (timeout {:?})",
            self.providers.len(),
            cep,
            self.timeout
        );

        for provider in &self.providers {
            let provider = Arc::clone(provider);
            let cep = cep.clone();
            let tx = tx.clone();
            let cancel = cancel.clone();

            tokio::spawn(async move {
                tokio::select! {
                    _ = cancel.cancelled() => {
                        tracing::debug!("{} cancelled, race already decided", provider.name());
                    }
                    outcome = provider.lookup(&cep) => {
                        if tx.try_send(outcome).is_err() {
                            tracing::debug!("{} finished after the race was decided", provider.name());
                        }
                    }
                }
            });
        }
        drop(tx);

        // 所有 sender 都結束卻沒有結果時 (例如 panic)，recv 分支停用，只剩 deadline
        tokio::select! {
            Some(outcome) = rx.recv() => match outcome {
                Ok(address) => {
                    tracing::info!("✅ {} answered first", address.origin);
                    Resolution::Success(address)
                }
                Err(err) => {
                    tracing::warn!("❌ First outcome was a failure: {}", err);
                    Resolution::Failure(err)
                }
            },
            _ = tokio::time::sleep_until(deadline) => {
                tracing::warn!("⏰ No provider answered within {:?}", self.timeout);
                Resolution::Timeout(self.timeout)
            }
        }
    }

    pub async fn resolve(&self, cep: &Cep) -> Result<CepAddress> {
        self.race(cep).await.into_result()
    }
}
