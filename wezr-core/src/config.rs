use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use serde::{Deserialize, Deserializer};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{model::WeatherRequest, units::Units};

/// File name of the config dotfile inside the home directory.
pub const CONFIG_FILE_NAME: &str = ".wezr.yml";

/// Credentials and location, read from a YAML file.
///
/// Example:
/// ```yaml
/// api_key: "0123456789abcdef"
/// lat: "37.8267"
/// long: "-122.423"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(deserialize_with = "scalar_string")]
    pub api_key: String,
    #[serde(deserialize_with = "scalar_string")]
    pub lat: String,
    #[serde(deserialize_with = "scalar_string")]
    pub long: String,
}

/// Accepts unquoted numbers (`lat: 37.8267`) as well as strings.
fn scalar_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Int(i) => i.to_string(),
        Scalar::Float(f) => f.to_string(),
    })
}

impl Config {
    /// Load config from `path`. Unknown keys are ignored.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: Config = serde_yaml::from_str(contents)?;
        Ok(cfg)
    }

    /// `~/.wezr.yml`.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = BaseDirs::new().ok_or_else(|| anyhow!("Could not determine home directory"))?;

        Ok(dirs.home_dir().join(CONFIG_FILE_NAME))
    }

    pub fn request(&self, units: Units) -> WeatherRequest {
        WeatherRequest { lat: self.lat.clone(), long: self.long.clone(), units }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn load_extracts_three_fields() {
        let file = write_config("api_key: KEY\nlat: \"37.8267\"\nlong: \"-122.423\"\n");

        let cfg = Config::load(file.path()).expect("config should load");

        assert_eq!(
            cfg,
            Config {
                api_key: "KEY".into(),
                lat: "37.8267".into(),
                long: "-122.423".into(),
            }
        );
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let cfg = Config::parse("api_key: KEY\nlat: '1'\nlong: '2'\ntheme: dark\nextra: [1, 2]\n")
            .expect("unknown keys should not fail");

        assert_eq!(cfg.api_key, "KEY");
        assert_eq!(cfg.lat, "1");
        assert_eq!(cfg.long, "2");
    }

    #[test]
    fn unquoted_numbers_are_accepted() {
        let cfg = Config::parse("api_key: 12345\nlat: 37.8267\nlong: -122.423\n")
            .expect("numeric scalars should load as strings");

        assert_eq!(cfg.api_key, "12345");
        assert_eq!(cfg.lat, "37.8267");
        assert_eq!(cfg.long, "-122.423");
    }

    #[test]
    fn missing_key_is_parse_error() {
        let file = write_config("api_key: KEY\nlat: '1'\n");

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let file = write_config("api_key: [unclosed\n");

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("absent.yml");

        let err = Config::load(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn default_path_points_at_dotfile() {
        let path = Config::default_path().expect("home directory should resolve");
        assert!(path.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn request_carries_coordinates_and_units() {
        let cfg = Config { api_key: "KEY".into(), lat: "1.5".into(), long: "-2.5".into() };

        let req = cfg.request(Units::Us);
        assert_eq!(req.lat, "1.5");
        assert_eq!(req.long, "-2.5");
        assert_eq!(req.units, Units::Us);
    }
}
