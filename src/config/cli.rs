use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cep-race")]
#[command(about = "Resolve a Brazilian CEP by racing several lookup services")]
pub struct CliConfig {
    /// CEP to look up (format: 00000-000)
    #[arg(long, alias = "cep", value_name = "CEP")]
    pub code: String,
}
