//! Write nested JSON string tables for every language.
//!
//! Usage: export-catalogs [OUTPUT_DIR]
//!
//! Falls back to `I18N_EXPORT_DIR` (default `./i18n`) when no directory is
//! given.

use anyhow::{bail, Result};
use chili_cilantro_i18n::config::Config;
use chili_cilantro_i18n::i18n::{export, CatalogValidator, StringsCatalog};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("chili_cilantro_i18n=info".parse()?)
                .add_directive("export_catalogs=info".parse()?),
        )
        .init();

    let config = Config::from_env()?;
    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(&config.export_dir));

    let report = CatalogValidator::validate_shipped();
    if report.has_errors() {
        bail!("Refusing to export, validation errors: {:?}", report.errors);
    }

    let written = export::write_nested_catalogs(StringsCatalog::get(), &dir, config.pretty_json)?;
    for path in &written {
        info!("Wrote {}", path.display());
    }

    Ok(())
}
