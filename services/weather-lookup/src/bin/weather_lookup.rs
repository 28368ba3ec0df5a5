/// 気温検索Lambdaエントリポイント
///
/// `{"city": "..."}`を受け取り、天気プロバイダーの現在の気温を
/// `{statusCode, body, headers?}`形式で返す。
use lambda_runtime::{Error, LambdaEvent, service_fn};
use serde_json::Value;
use tracing::{error, info};
use weather_lookup::application::WeatherLookupHandler;
use weather_lookup::domain::ResultEnvelope;
use weather_lookup::infrastructure::{OpenWeatherMapClient, WeatherApiConfig, init_logging};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // 構造化ログを初期化
    init_logging();

    info!("気温検索Lambda関数を初期化");

    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda関数のメインハンドラー
///
/// 失敗はすべて500エンベロープとして返し、関数エラーにはしない。
async fn handler(event: LambdaEvent<Value>) -> Result<ResultEnvelope, Error> {
    info!(request_id = %event.context.request_id, "呼び出しを受信");

    Ok(lookup_weather(&event.payload).await)
}

/// 設定を読み込んでハンドラーを実行
///
/// # 処理フロー
/// 1. 環境変数から設定を読み込み（呼び出しごと）
/// 2. OpenWeatherMapClientを作成
/// 3. WeatherLookupHandlerでイベントを処理
async fn lookup_weather(payload: &Value) -> ResultEnvelope {
    let config = match WeatherApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "設定読み込み失敗");
            return ResultEnvelope::failure(err.to_string());
        }
    };

    let client = match OpenWeatherMapClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            error!(error = %err, "HTTPクライアント作成失敗");
            return ResultEnvelope::failure(err.to_string());
        }
    };

    WeatherLookupHandler::new(client).handle(payload).await
}
