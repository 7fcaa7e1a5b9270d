use std::path::PathBuf;

use anyhow::{Context, anyhow};
use clap::Parser;
use tracing::debug;
use wezr_core::{
    Config, DEFAULT_TEMPLATE, ForecastIoProvider, Units, VERSION, WeatherProvider, WeatherRequest,
    render_snapshot,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(
    name = "wezr",
    about = "Print current weather conditions from forecast.io",
    disable_version_flag = true
)]
pub struct Cli {
    /// Config file with `api_key`, `lat` and `long` [default: ~/.wezr.yml]
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Unit system: "si" (metric) or "us" (imperial).
    #[arg(long, default_value = "si")]
    pub units: String,

    /// Output template. Placeholders: $summary, $temp, $apparentTemp, $precipitationChance.
    #[arg(long, default_value = DEFAULT_TEMPLATE)]
    pub template: String,

    /// Print version and exit.
    #[arg(short = 'v', long)]
    pub version: bool,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        if self.version {
            println!("wezr {VERSION}");
            return Ok(());
        }

        let units = Units::try_from(self.units.as_str())?;

        let path = match &self.config {
            Some(path) => path.clone(),
            None => Config::default_path()?,
        };
        let config = Config::load(&path)?;
        debug!(path = %path.display(), "Loaded config");

        let provider = ForecastIoProvider::new(config.api_key.clone());
        let line = report(&provider, &config.request(units), &self.template).await?;

        println!("{line}");
        Ok(())
    }
}

/// Fetch the forecast and render the current conditions through `template`.
pub async fn report(
    provider: &dyn WeatherProvider,
    request: &WeatherRequest,
    template: &str,
) -> anyhow::Result<String> {
    let snapshot = provider.get_weather(request).await.context("Failed to fetch weather")?;

    if let Some(current) = &snapshot.currently {
        debug!(
            observed_at = ?current.observed_at().map(|t| t.to_rfc3339()),
            timezone = %snapshot.timezone,
            alerts = snapshot.alerts.len(),
            "Current conditions"
        );
    }

    render_snapshot(&snapshot, request.units, template)
        .ok_or_else(|| anyhow!("Forecast response contained no current conditions"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct FixedBody(&'static str);

    #[async_trait]
    impl WeatherProvider for FixedBody {
        async fn fetch_raw(&self, _request: &WeatherRequest) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[derive(Debug)]
    struct Unreachable;

    #[async_trait]
    impl WeatherProvider for Unreachable {
        async fn fetch_raw(&self, _request: &WeatherRequest) -> anyhow::Result<String> {
            Err(anyhow!("connection refused"))
        }
    }

    fn request(units: Units) -> WeatherRequest {
        WeatherRequest { lat: "1".into(), long: "2".into(), units }
    }

    const CLOUDY: &str = r#"{"currently": {
        "summary": "Cloudy", "temperature": 20.0,
        "apparentTemperature": 18.5, "precipProbability": 0.3
    }}"#;

    #[tokio::test]
    async fn report_renders_current_conditions() {
        let line = report(&FixedBody(CLOUDY), &request(Units::Si), DEFAULT_TEMPLATE).await.unwrap();

        assert_eq!(line, "Cloudy 20.0°C (feels like 18.5°C) precipitation chance 30%");
    }

    #[tokio::test]
    async fn report_uses_requested_units_for_suffix() {
        let line = report(&FixedBody(CLOUDY), &request(Units::Us), "$temp").await.unwrap();

        assert_eq!(line, "20.0°F");
    }

    #[tokio::test]
    async fn malformed_body_is_reported_not_panicked() {
        let err = report(&FixedBody("{not json"), &request(Units::Si), DEFAULT_TEMPLATE)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("no current conditions"));
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let err = report(&Unreachable, &request(Units::Si), DEFAULT_TEMPLATE).await.unwrap_err();

        assert!(err.to_string().contains("Failed to fetch weather"));
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["wezr", "--config", "/tmp/w.yml", "--units", "us", "--template", "$temp"]);

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.yml")));
        assert_eq!(cli.units, "us");
        assert_eq!(cli.template, "$temp");
        assert!(!cli.version);
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["wezr"]);

        assert_eq!(cli.config, None);
        assert_eq!(cli.units, "si");
        assert_eq!(cli.template, DEFAULT_TEMPLATE);
    }

    #[test]
    fn short_version_flag() {
        assert!(Cli::parse_from(["wezr", "-v"]).version);
        assert!(Cli::parse_from(["wezr", "--version"]).version);
    }
}
