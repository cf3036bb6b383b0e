use camino::Utf8PathBuf;
use clap::Parser;
use tracing::{info, warn, Level};

use crate::catalog::{write_catalog, Catalog, CatalogFetcher, ExportTarget};
use crate::settings::Settings;

pub mod resolve;

use resolve::{resolve_output_path, verify_flag_or_default};

#[derive(Parser)]
#[command(name = "get-cisa-vuln")]
#[command(
    about = "Download the CISA exploitable vulnerabilities catalog and save the output locally. Will save to \"./cisa_vuln.csv\" if no directory is specified."
)]
#[command(version)]
pub struct Cli {
    /// Desired filename or full path, either JSON or CSV
    #[arg(short, long)]
    pub outfile: Option<String>,
    /// Verify the SSL certificate of the catalog: true or false
    #[arg(short, long, default_value = "true")]
    pub ssl: String,
    /// Print progress
    #[arg(short, long)]
    pub verbose: bool,
    /// Settings file overriding the catalog URL, default filename or timeout
    #[arg(short, long)]
    pub config: Option<Utf8PathBuf>,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::INFO
        } else {
            Level::WARN
        }
    }
}

pub fn run_cli(cli: Cli) -> crate::Result<()> {
    if cli.verbose {
        info!("Verbose Output Enabled.");
    }

    let settings = Settings::load(cli.config.as_deref())?;
    let verify_tls = verify_flag_or_default(&cli.ssl);
    let raw = cli.outfile.as_deref().unwrap_or(&settings.default_outfile);
    let target = ExportTarget::from_path(resolve_output_path(raw, &settings.default_outfile));

    export_catalog(&settings, &target, verify_tls)
}

/// Fetch the catalog and write it to `target`. Nothing is written if the
/// fetch fails.
pub fn export_catalog(
    settings: &Settings,
    target: &ExportTarget,
    verify_tls: bool,
) -> crate::Result<()> {
    let fetcher = CatalogFetcher::new(&settings.catalog_url, verify_tls, settings.timeout())?;
    let catalog = fetcher.fetch()?;

    log_summary(&catalog);
    write_catalog(&catalog, target)
}

fn log_summary(catalog: &Catalog) {
    info!("CISA Catalog Version      : {}", catalog.catalog_version);
    info!("CISA Catalog Release Date : {}", catalog.date_released);
    info!("CISA Catalog Vuln Count   : {}", catalog.count);

    if let Some(released) = catalog.released_at() {
        let age = chrono::Utc::now().signed_duration_since(released);
        info!("CISA Catalog Age          : {} days", age.num_days());
    }

    if !catalog.count_matches() {
        warn!(
            "Catalog count {} does not match {} listed vulnerabilities",
            catalog.count,
            catalog.vulnerabilities.len()
        );
    }
}
