use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub server: ServerConfig,
    pub booking: BookingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    /// Demo recipient for booking-confirmation emails; the message is only
    /// logged, never delivered.
    pub notify_address: String,
}

impl Settings {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional.
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in.
            .add_source(config::File::with_name("config/local").required(false))
            // VOYAGER__SERVER__PORT=8080 style environment overrides.
            .add_source(config::Environment::with_prefix("VOYAGER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 3001 },
            booking: BookingConfig {
                notify_address: "bookings@voyager.example".to_string(),
            },
        }
    }
}
