use clap::{Parser, ValueEnum};
use reel_telemetry::LogFormat;
use std::fmt::{Display, Formatter};
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "REEL_GATEWAY_LISTEN_ADDR";
pub const ID_LENGTH_ENV: &str = "REEL_GATEWAY_ID_LENGTH";
pub const LOG_FORMAT_ENV: &str = "REEL_GATEWAY_LOG_FORMAT";
pub const LOG_FILTER_ENV: &str = "REEL_GATEWAY_LOG_FILTER";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_ID_LENGTH: u16 = 12;
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    #[value(name = "pretty")]
    Pretty,
    #[value(name = "json")]
    Json,
}

impl Display for LogFormatArg {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LogFormat::from(*self))
    }
}

impl From<LogFormatArg> for LogFormat {
    fn from(value: LogFormatArg) -> Self {
        match value {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "reel-gateway")]
pub struct Cli {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Length of generated video ids.
    #[arg(
        long,
        env = ID_LENGTH_ENV,
        default_value_t = DEFAULT_ID_LENGTH,
        value_parser = clap::value_parser!(u16).range(1..=64),
    )]
    pub id_length: u16,

    #[arg(
        long,
        env = LOG_FORMAT_ENV,
        value_enum,
        default_value_t = LogFormatArg::Pretty
    )]
    pub log_format: LogFormatArg,

    /// Fallback filter directives when `RUST_LOG` is unset.
    #[arg(long, env = LOG_FILTER_ENV, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["reel-gateway"]).unwrap();
        assert_eq!(cli.listen_addr.to_string(), DEFAULT_LISTEN_ADDR);
        assert_eq!(cli.id_length, DEFAULT_ID_LENGTH);
        assert_eq!(cli.log_format, LogFormatArg::Pretty);
        assert_eq!(cli.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn overrides() {
        let cli = Cli::try_parse_from([
            "reel-gateway",
            "--listen-addr",
            "0.0.0.0:9000",
            "--id-length",
            "20",
            "--log-format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.listen_addr.port(), 9000);
        assert_eq!(cli.id_length, 20);
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }

    #[test]
    fn rejects_zero_id_length() {
        assert!(Cli::try_parse_from(["reel-gateway", "--id-length", "0"]).is_err());
    }
}
