mod structured_console_encoder;

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, anyhow};
use log::{debug, info};
use log4rs::{
    Config,
    config::{Deserializers, RawConfig},
};

pub use structured_console_encoder::{StructuredConsoleEncoder, StructuredConsoleEncoderDeserializer};

pub const LOG_CONFIG_FILE: &str = "log4rs.yml";

fn deserializers() -> Deserializers {
    let mut deserializers = Deserializers::default();
    deserializers.insert("structured_console", StructuredConsoleEncoderDeserializer);
    deserializers
}

/// Initializes logging from `log4rs.yml` in the working directory, or from
/// the embedded defaults when that file does not exist.
pub fn init_logging() -> anyhow::Result<()> {
    let path = Path::new(LOG_CONFIG_FILE);

    if path.exists() {
        log4rs::init_file(path, deserializers())
            .with_context(|| format!("Failed to load external {LOG_CONFIG_FILE}"))?;
        info!(path = LOG_CONFIG_FILE; "Logging initialized from external configuration");
        return Ok(());
    }

    let config = embedded_config()?;
    log4rs::init_config(config).context("Failed to initialize logging from embedded config")?;

    debug!("Logging initialized from embedded defaults (no external log4rs.yml found)");
    Ok(())
}

fn embedded_config() -> anyhow::Result<Config> {
    let yaml_content = include_str!("../../resources/default_log4rs.yml");
    let raw_config: RawConfig =
        serde_yaml::from_str(yaml_content).context("Embedded logging configuration is invalid YAML")?;

    let (appenders, errors) = raw_config.appenders_lossy(&deserializers());
    if !errors.is_empty() {
        return Err(anyhow!("Errors parsing embedded appenders: {errors:?}"));
    }

    Config::builder()
        .appenders(appenders)
        .loggers(raw_config.loggers())
        .build(raw_config.root())
        .context("Failed to build logging config")
}

fn reveal_pii() -> bool {
    static REVEAL_PII_CACHE: OnceLock<bool> = OnceLock::new();

    *REVEAL_PII_CACHE.get_or_init(|| {
        std::env::var("REVEAL_PII")
            .map(|v| {
                let val = v.to_lowercase();
                val == "true" || val == "1"
            })
            .unwrap_or(false)
    })
}

/// Masks a wallet address for log output, keeping the first and last six
/// characters. Returned unchanged when `REVEAL_PII` is `true` or `1`.
pub fn mask_string(s: &str) -> String {
    mask(s, reveal_pii())
}

fn mask(s: &str, reveal: bool) -> String {
    if reveal {
        return s.to_string();
    }

    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 12 {
        return "***".to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 6..].iter().collect();
    format!("{head}...{tail}")
}
