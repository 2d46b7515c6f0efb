pub mod toml_config;

pub use toml_config::{ApiSettings, AppConfig};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "sample-ops")]
#[command(about = "Look up users, forward payloads to an API, and sum numbers")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print the name of the user with the given id
    User {
        id: String,

        #[arg(long)]
        users_file: Option<String>,
    },

    /// POST a JSON payload to the API and print the response
    Save {
        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long, conflicts_with = "file", required_unless_present = "file")]
        data: Option<String>,

        #[arg(long)]
        file: Option<String>,
    },

    /// Sum numbers given as arguments and/or read from a CSV file
    Sum {
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<f64>,

        #[arg(long)]
        file: Option<String>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔並套用命令列參數；命令列優先
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config from {}", path);
                AppConfig::from_file(path)?
            }
            None => AppConfig::default(),
        };

        match &self.command {
            Command::User {
                users_file: Some(path),
                ..
            } => config.store.users_file = path.clone(),
            Command::Save {
                endpoint: Some(endpoint),
                ..
            } => config.api.endpoint = endpoint.clone(),
            _ => {}
        }

        Ok(config)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_user_command() {
        let cli = CliConfig::parse_from(["sample-ops", "user", "42", "--users-file", "p.json"]);
        match cli.command {
            Command::User { id, users_file } => {
                assert_eq!(id, "42");
                assert_eq!(users_file.as_deref(), Some("p.json"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_sum_with_negative_numbers() {
        let cli = CliConfig::parse_from(["sample-ops", "sum", "1", "-5", "2.5"]);
        match cli.command {
            Command::Sum { numbers, file } => {
                assert_eq!(numbers, vec![1.0, -5.0, 2.5]);
                assert!(file.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_save_requires_data_or_file() {
        assert!(CliConfig::try_parse_from(["sample-ops", "save"]).is_err());
        assert!(CliConfig::try_parse_from([
            "sample-ops", "save", "--data", "{}", "--file", "x.json"
        ])
        .is_err());
        assert!(CliConfig::try_parse_from(["sample-ops", "save", "--data", "{}"]).is_ok());
    }

    #[test]
    fn test_cli_flags_override_config_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api]\nendpoint = \"https://file.example.com\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let from_file =
            CliConfig::parse_from(["sample-ops", "--config", path.as_str(), "save", "--data", "{}"]);
        assert_eq!(
            from_file.resolve().unwrap().api.endpoint,
            "https://file.example.com"
        );

        let overridden = CliConfig::parse_from([
            "sample-ops",
            "save",
            "--config",
            path.as_str(),
            "--endpoint",
            "https://flag.example.com",
            "--data",
            "{}",
        ]);
        assert_eq!(
            overridden.resolve().unwrap().api.endpoint,
            "https://flag.example.com"
        );
    }
}
