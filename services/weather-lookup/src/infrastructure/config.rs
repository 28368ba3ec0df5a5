// 天気プロバイダー接続設定
//
// APIキーとエンドポイントを環境変数から読み込む。
// ハンドラーには明示的な値として注入し、グローバル状態は持たない。

use thiserror::Error;

/// APIキーを格納する環境変数名
pub const API_KEY_ENV: &str = "api_key";

/// ベースURLを上書きする環境変数名
pub const BASE_URL_ENV: &str = "WEATHER_API_BASE_URL";

/// OpenWeatherMap現在天気APIのデフォルトエンドポイント
pub const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org/data/2.5/weather";

/// 設定エラー
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 必須の環境変数が設定されていない
    #[error("required environment variable is not set: {0}")]
    MissingEnvVar(String),
}

/// 天気プロバイダーの設定
///
/// # フィールド
/// - `api_key`: プロバイダーのAPIキー（`appid`クエリパラメータ）
/// - `base_url`: 現在天気APIのURL
#[derive(Clone)]
pub struct WeatherApiConfig {
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for WeatherApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherApiConfig")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl WeatherApiConfig {
    /// 新しい設定を作成
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// デフォルトのエンドポイントで設定を作成
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_BASE_URL)
    }

    /// 環境変数から設定を読み込み
    ///
    /// # 環境変数
    /// - `api_key`: APIキー（必須、空白のみは未設定扱い）
    /// - `WEATHER_API_BASE_URL`: エンドポイント（任意、デフォルト: OpenWeatherMap）
    pub fn from_env() -> Result<Self, ConfigError> {
        let get_non_blank =
            |key: &str| -> Option<String> { std::env::var(key).ok().filter(|s| !s.trim().is_empty()) };

        let api_key = get_non_blank(API_KEY_ENV)
            .ok_or_else(|| ConfigError::MissingEnvVar(API_KEY_ENV.to_string()))?;

        let base_url = get_non_blank(BASE_URL_ENV).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }

    /// APIキーを取得
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// ベースURLを取得
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // テストで環境変数を安全に設定/削除するヘルパー
    unsafe fn set_env(key: &str, value: &str) {
        unsafe { std::env::set_var(key, value) };
    }

    unsafe fn cleanup_env() {
        unsafe {
            std::env::remove_var(API_KEY_ENV);
            std::env::remove_var(BASE_URL_ENV);
        }
    }

    #[test]
    fn test_new_creates_config() {
        let config = WeatherApiConfig::new("key-123", "http://localhost:8080/weather");

        assert_eq!(config.api_key(), "key-123");
        assert_eq!(config.base_url(), "http://localhost:8080/weather");
    }

    #[test]
    fn test_with_api_key_uses_default_base_url() {
        let config = WeatherApiConfig::with_api_key("key-123");

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = WeatherApiConfig::new("super-secret-key", DEFAULT_BASE_URL);

        let debug_str = format!("{:?}", config);

        assert!(debug_str.contains("WeatherApiConfig"));
        assert!(debug_str.contains(DEFAULT_BASE_URL));
        assert!(!debug_str.contains("super-secret-key"));
    }

    #[test]
    #[serial]
    fn test_from_env_success() {
        unsafe {
            cleanup_env();
            set_env(API_KEY_ENV, "env-key");
        }

        let config = WeatherApiConfig::from_env().expect("設定の読み込みに失敗");

        assert_eq!(config.api_key(), "env-key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        unsafe { cleanup_env() };
    }

    #[test]
    #[serial]
    fn test_from_env_with_base_url_override() {
        unsafe {
            cleanup_env();
            set_env(API_KEY_ENV, "env-key");
            set_env(BASE_URL_ENV, "http://127.0.0.1:9999/weather");
        }

        let config = WeatherApiConfig::from_env().unwrap();

        assert_eq!(config.base_url(), "http://127.0.0.1:9999/weather");

        unsafe { cleanup_env() };
    }

    #[test]
    #[serial]
    fn test_from_env_missing_api_key() {
        unsafe { cleanup_env() };

        let result = WeatherApiConfig::from_env();

        match result.unwrap_err() {
            ConfigError::MissingEnvVar(var) => assert_eq!(var, "api_key"),
        }
    }

    #[test]
    #[serial]
    fn test_from_env_blank_api_key() {
        unsafe {
            cleanup_env();
            set_env(API_KEY_ENV, "   ");
        }

        let result = WeatherApiConfig::from_env();

        assert!(result.is_err());

        unsafe { cleanup_env() };
    }

    #[test]
    #[serial]
    fn test_from_env_blank_base_url_uses_default() {
        unsafe {
            cleanup_env();
            set_env(API_KEY_ENV, "env-key");
            set_env(BASE_URL_ENV, "");
        }

        let config = WeatherApiConfig::from_env().unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);

        unsafe { cleanup_env() };
    }

    #[test]
    fn test_error_display() {
        let error = ConfigError::MissingEnvVar("api_key".to_string());

        assert_eq!(
            error.to_string(),
            "required environment variable is not set: api_key"
        );
    }
}
