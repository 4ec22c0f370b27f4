pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::{ProviderConfig, ProviderKind, RaceConfig};
pub use crate::core::{engine::CepLookup, race::RaceCoordinator};
pub use domain::model::{Cep, CepAddress, Resolution};
pub use domain::ports::CepProvider;
pub use utils::error::{CepError, Result};
