//! Configuration validation logic.

use std::net::SocketAddr;

use crate::Config;
use crate::defaults::max_body_bytes_limit;
use crate::loader::ConfigError;

const LOG_FORMATS: [&str; 3] = ["json", "pretty", "compact"];
const LOG_OUTPUTS: [&str; 2] = ["stdout", "stderr"];

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.server.listen.parse::<SocketAddr>().is_err() {
        return Err(ConfigError::Validation(format!(
            "server.listen is not a socket address: {:?}",
            config.server.listen
        )));
    }
    if config.server.max_body_bytes == 0 {
        return Err(ConfigError::Validation(
            "server.max_body_bytes must be > 0".into(),
        ));
    }
    if config.server.max_body_bytes > max_body_bytes_limit() {
        return Err(ConfigError::Validation(format!(
            "server.max_body_bytes too large (max {})",
            max_body_bytes_limit()
        )));
    }
    if config.server.shutdown_timeout_secs == 0 {
        return Err(ConfigError::Validation(
            "server.shutdown_timeout_secs must be > 0".into(),
        ));
    }
    if let Some(listen) = &config.metrics.listen
        && listen.parse::<SocketAddr>().is_err()
    {
        return Err(ConfigError::Validation(format!(
            "metrics.listen is not a socket address: {listen:?}"
        )));
    }
    if let Some(format) = &config.logging.format
        && !LOG_FORMATS.contains(&format.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.format must be one of: {:?}",
            LOG_FORMATS
        )));
    }
    if let Some(output) = &config.logging.output
        && !LOG_OUTPUTS.contains(&output.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.output must be one of: {:?}",
            LOG_OUTPUTS
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid(cfg: &Config, needle: &str) {
        match validate_config(cfg) {
            Err(ConfigError::Validation(msg)) => assert!(msg.contains(needle), "{msg}"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&Config::default()).is_ok());
    }

    #[test]
    fn listen_must_be_socket_addr() {
        let mut cfg = Config::default();
        cfg.server.listen = "localhost".into();
        assert_invalid(&cfg, "server.listen");
    }

    #[test]
    fn body_limit_bounds() {
        let mut cfg = Config::default();
        cfg.server.max_body_bytes = 0;
        assert_invalid(&cfg, "max_body_bytes");
        cfg.server.max_body_bytes = 16 * 1024 * 1024 + 1;
        assert_invalid(&cfg, "too large");
        cfg.server.max_body_bytes = 16 * 1024 * 1024;
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn shutdown_timeout_nonzero() {
        let mut cfg = Config::default();
        cfg.server.shutdown_timeout_secs = 0;
        assert_invalid(&cfg, "shutdown_timeout_secs");
    }

    #[test]
    fn metrics_listen_checked_when_set() {
        let mut cfg = Config::default();
        cfg.metrics.listen = Some("nope".into());
        assert_invalid(&cfg, "metrics.listen");
        cfg.metrics.listen = Some("0.0.0.0:9100".into());
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn logging_format_and_output() {
        let mut cfg = Config::default();
        cfg.logging.format = Some("xml".into());
        assert_invalid(&cfg, "logging.format");
        cfg.logging.format = Some("compact".into());
        cfg.logging.output = Some("file".into());
        assert_invalid(&cfg, "logging.output");
        cfg.logging.output = Some("stdout".into());
        assert!(validate_config(&cfg).is_ok());
    }
}
