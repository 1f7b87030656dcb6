use fanout_dns_domain::Config;
use tracing::info;

pub fn init_logging(config: &Config) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    let builder = tracing_subscriber::fmt()
        .with_target(true)
        .with_level(true)
        .with_max_level(log_level);

    if config.logging.json {
        builder.json().init();
    } else {
        builder.init();
    }

    info!(level = %log_level, json = config.logging.json, "logging initialized");
}
