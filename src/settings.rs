use camino::Utf8Path;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::time::Duration;

use crate::catalog::fetch::CISA_KEV_URL;

pub const DEFAULT_OUTFILE: &str = "cisa_vuln.csv";
pub const ENV_PREFIX: &str = "CISA_VULN";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub catalog_url: String,
    pub default_outfile: String,
    /// Request timeout. Unset means the HTTP client's own default applies.
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Built-in defaults, then the optional settings file, then
    /// `CISA_VULN_*` environment variables.
    pub fn load(path: Option<&Utf8Path>) -> crate::Result<Self> {
        let mut builder = Config::builder()
            .set_default("catalog_url", CISA_KEV_URL)?
            .set_default("default_outfile", DEFAULT_OUTFILE)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path.as_std_path()));
        }

        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: CISA_KEV_URL.to_string(),
            default_outfile: DEFAULT_OUTFILE.to_string(),
            timeout_secs: None,
        }
    }
}
