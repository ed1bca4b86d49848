use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "person-cf")]
#[command(about = "Build a person record and check its fiscal code format")]
pub struct CliConfig {
    #[arg(long, help = "First name, taken as free text")]
    pub first_name: String,

    #[arg(long, help = "Last name, taken as free text")]
    pub last_name: String,

    #[arg(long)]
    pub fiscal_code: String,

    #[arg(long, help = "Check whether this first name is an omonym of the person")]
    pub compare_first_name: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        // names are free text, only the config path is checked here
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
