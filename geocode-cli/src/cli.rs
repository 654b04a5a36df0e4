use std::{io::Write, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;
use geocode_core::{
    Config, GeocodeResult, Geocoder, ProviderId,
    provider::{default_provider_from_config, provider_from_config},
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "geocode",
    version,
    about = "Look up an address and print its coordinates as JSON"
)]
pub struct Cli {
    /// Provider to query instead of the configured default, e.g. "nominatim" or "mapsco".
    #[arg(long)]
    pub provider: Option<String>,

    /// Read configuration from this file instead of the platform config directory.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when the printed result is an error.
    #[arg(long)]
    pub fail_on_error: bool,

    /// Address words; joined with single spaces. Put `--` first if the
    /// address itself starts with something like `--help`.
    #[arg(num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
    pub address: Vec<String>,
}

impl Cli {
    pub fn address(&self) -> String {
        self.address.join(" ")
    }

    pub async fn run(self) -> anyhow::Result<ExitCode> {
        let result = self.resolve().await;

        write_result(&mut std::io::stdout().lock(), &result)?;
        Ok(self.exit_code(&result))
    }

    /// Errors only change the exit status when `--fail-on-error` is given.
    fn exit_code(&self, result: &GeocodeResult) -> ExitCode {
        if self.fail_on_error && result.is_error() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }

    /// Everything up to and including the lookup; setup failures are reported
    /// in the same JSON shape as lookup failures.
    async fn resolve(&self) -> GeocodeResult {
        let geocoder = match self.geocoder() {
            Ok(geocoder) => geocoder,
            Err(err) => {
                log::error!("{err:#}");
                return GeocodeResult::error(format!("{err:#}"));
            }
        };

        geocode_core::lookup(geocoder.as_ref(), &self.address()).await
    }

    fn geocoder(&self) -> anyhow::Result<Box<dyn Geocoder>> {
        let config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        match self.provider.as_deref() {
            Some(name) => provider_from_config(ProviderId::try_from(name)?, &config),
            None => default_provider_from_config(&config),
        }
    }
}

/// Write `result` as a single JSON line.
fn write_result(out: &mut impl Write, result: &GeocodeResult) -> anyhow::Result<()> {
    let json = result.to_json().context("Failed to serialize result")?;
    writeln!(out, "{json}").context("Failed to write result")?;
    Ok(())
}
