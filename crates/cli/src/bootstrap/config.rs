use fanout_dns_domain::{Config, ConfigError};

pub fn load_config(path: &str) -> Result<Config, ConfigError> {
    let config = Config::load(path)?;
    config.validate()?;
    Ok(config)
}
