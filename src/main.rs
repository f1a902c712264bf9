use anyhow::{bail, Result};
use chili_cilantro_i18n::config::Config;
use chili_cilantro_i18n::i18n::{export, CatalogValidator, LanguageContext, StringsCatalog};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chili_cilantro_i18n=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    LanguageContext::global().set_language(config.default_language);
    info!("Default language: {} ({})", config.default_language, config.default_language.code());

    // Step 1: Validate every table before anything reads them
    let report = CatalogValidator::validate_shipped();
    for warning in &report.warnings {
        warn!("{}", warning);
    }
    if report.has_errors() {
        for error in &report.errors {
            error!("{}", error);
        }
        bail!("Catalog validation failed with {} errors", report.errors.len());
    }
    info!("Catalog validation passed with {} warnings", report.warnings.len());

    // Step 2: Print the nested strings for the default language
    let json = export::nested_json(StringsCatalog::get(), config.default_language, config.pretty_json)?;
    println!("{}", json);

    Ok(())
}
