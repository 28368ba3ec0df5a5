// 天気プロバイダーHTTPクライアント
//
// OpenWeatherMap現在天気APIへGETを1回だけ送り、レスポンスbodyをJSONとして返す。
// タイムアウトの上書き・再試行・ステータスコード判定は行わない。
// プロバイダーの404もJSON bodyとして呼び出し元へ返す。

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error, instrument};
use url::Url;

use super::config::WeatherApiConfig;

/// 気温の単位（摂氏）
const UNITS: &str = "metric";

/// 天気プロバイダー呼び出しのエラー型
#[derive(Debug, Error)]
pub enum ProviderError {
    /// HTTPクライアントの構築に失敗
    #[error("failed to build HTTP client: {0}")]
    ClientBuild(String),

    /// ベースURLが不正
    #[error("invalid provider URL: {0}")]
    InvalidUrl(String),

    /// 接続・送信・body読み込みの失敗
    #[error("request to weather provider failed: {0}")]
    Network(String),

    /// bodyがJSONとして解析できない
    #[error("invalid JSON from weather provider: {0}")]
    InvalidJson(String),
}

/// 天気プロバイダートレイト（テスト用の抽象化）
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// 都市の現在の天気を取得する
    ///
    /// # 戻り値
    /// * `Ok(Value)` - プロバイダーのレスポンスbody（HTTPステータスに関わらず）
    /// * `Err(ProviderError)` - 通信またはJSON解析の失敗
    async fn fetch_current(&self, city: &str) -> Result<Value, ProviderError>;
}

/// OpenWeatherMap APIクライアント
#[derive(Clone)]
pub struct OpenWeatherMapClient {
    client: Client,
    config: WeatherApiConfig,
}

impl std::fmt::Debug for OpenWeatherMapClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherMapClient")
            .field("base_url", &self.config.base_url())
            .finish_non_exhaustive()
    }
}

impl OpenWeatherMapClient {
    /// 設定からクライアントを作成
    ///
    /// reqwestのデフォルト設定をそのまま使う。
    pub fn new(config: WeatherApiConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ProviderError::ClientBuild(error_chain(&e)))?;

        Ok(Self::with_client(client, config))
    }

    /// 既存のreqwestクライアントを使って作成
    pub fn with_client(client: Client, config: WeatherApiConfig) -> Self {
        Self { client, config }
    }

    /// リクエストURLを構築
    ///
    /// `{base_url}?q={city}&appid={api_key}&units=metric`
    fn request_url(&self, city: &str) -> Result<Url, ProviderError> {
        Url::parse_with_params(
            self.config.base_url(),
            &[
                ("q", city),
                ("appid", self.config.api_key()),
                ("units", UNITS),
            ],
        )
        .map_err(|e| ProviderError::InvalidUrl(e.to_string()))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherMapClient {
    #[instrument(skip(self), fields(base_url = %self.config.base_url()))]
    async fn fetch_current(&self, city: &str) -> Result<Value, ProviderError> {
        let url = self.request_url(city)?;

        let response = self.client.get(url).send().await.map_err(|e| {
            // URLにはAPIキーが含まれるため除去してから扱う
            let message = error_chain(&e.without_url());
            error!(error = %message, "天気プロバイダーへのリクエスト失敗");
            ProviderError::Network(message)
        })?;

        let status = response.status();
        debug!(status = %status, "天気プロバイダー応答");

        let body = response.bytes().await.map_err(|e| {
            let message = error_chain(&e.without_url());
            error!(error = %message, "レスポンスbodyの読み込み失敗");
            ProviderError::Network(message)
        })?;

        serde_json::from_slice(&body).map_err(|e| {
            error!(error = %e, status = %status, "レスポンスbodyのJSON解析失敗");
            ProviderError::InvalidJson(e.to_string())
        })
    }
}

/// エラーとそのsourceを": "で連結した文字列
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
