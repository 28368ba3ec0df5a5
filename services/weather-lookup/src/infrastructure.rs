// Infrastructure layer modules
pub mod config;
pub mod logging;
pub mod weather_client;

// Re-exports
pub use config::{ConfigError, WeatherApiConfig, DEFAULT_BASE_URL};
pub use logging::init_logging;
pub use weather_client::{OpenWeatherMapClient, ProviderError, WeatherProvider};
