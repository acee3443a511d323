use crate::utils::logger::LogFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "solid-ac")]
#[command(about = "Runs the air conditioner showroom demo")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["solid-ac"]);
        assert!(!config.verbose);
        assert_eq!(config.log_format, LogFormat::Compact);
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from(["solid-ac", "--verbose", "--log-format", "json"]);
        assert!(config.verbose);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(CliConfig::try_parse_from(["solid-ac", "--log-format", "xml"]).is_err());
    }
}
