/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("poll interval must be greater than zero")]
    ZeroPollInterval,

    #[error(
        "time series day count must be between 1 and {max}, got {0}",
        max = crate::config::defaults::MAX_DAY_COUNT
    )]
    InvalidDayCount(u32),

    #[error("bucket range of {day_count} days ending {anchor} is outside the supported calendar")]
    DateOutOfRange { day_count: u32, anchor: String },

    #[error("invalid endpoint {field}: {reason}")]
    InvalidEndpoint { field: &'static str, reason: String },
}
