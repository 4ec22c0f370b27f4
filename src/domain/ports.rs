use crate::domain::model::{Cep, CepAddress, ProviderOutcome};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

/// An external service able to resolve a CEP.
#[async_trait]
pub trait CepProvider: Send + Sync {
    /// Identity used as the `origin` of every address this provider returns.
    fn name(&self) -> &str;

    async fn lookup(&self, cep: &Cep) -> ProviderOutcome;
}

/// A provider's native response body and its mapping to [`CepAddress`].
///
/// The mapping must be total: fields missing from the body become empty
/// strings, never errors.
pub trait ProviderSchema: DeserializeOwned + Send + 'static {
    fn into_address(self, origin: &str) -> CepAddress;
}
