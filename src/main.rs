use anyhow::Context;
use clap::Parser;
use person_cf::utils::{logger, validation::Validate};
use person_cf::{CliConfig, Person, TomlConfig};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let file_config = match &cli.config {
        Some(path) => TomlConfig::from_file(path)
            .with_context(|| format!("loading {}", path))?,
        None => TomlConfig::default(),
    };

    // an invalid filter must be reported before it reaches the subscriber
    if let Err(e) = file_config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    let verbose = cli.verbose || file_config.verbose();
    logger::init_cli_logger(verbose, file_config.log_filter());

    tracing::info!("Starting person-cf");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let person = match Person::new(cli.first_name.as_str(), cli.last_name.as_str(), &cli.fiscal_code)
    {
        Ok(person) => person,
        Err(e) if e.is_invalid_argument() => {
            tracing::error!("{}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };

    if file_config.uppercase_names() {
        let mut shown = person.clone();
        shown.set_first_name(person.first_name().to_uppercase());
        shown.set_last_name(person.last_name().to_uppercase());
        println!("{}", shown);
    } else {
        println!("{}", person);
    }

    if let Some(name) = &cli.compare_first_name {
        let mut other = person.clone();
        other.set_first_name(name.as_str());
        let omonym = person.is_same_first_name(&other);
        tracing::debug!("Omonym check against '{}': {}", name, omonym);
        println!("OMONIMO:{}", if omonym { "SI" } else { "NO" });
    }

    Ok(())
}
