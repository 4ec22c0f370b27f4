pub mod engine;
pub mod race;

pub use crate::domain::model::{Cep, CepAddress, ProviderOutcome, Resolution};
pub use crate::domain::ports::{CepProvider, ProviderSchema};
pub use crate::utils::error::Result;
