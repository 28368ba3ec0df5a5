// アプリケーション層モジュール
pub mod weather_lookup_handler;

// 再エクスポート
pub use weather_lookup_handler::{LookupError, WeatherLookupHandler};
