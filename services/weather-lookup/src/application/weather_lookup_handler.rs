/// 気温検索ハンドラー
///
/// 呼び出しイベントから都市名を取り出し、天気プロバイダーに1回問い合わせ、
/// `main.temp`の有無で成功/404を判定する。それ以外の失敗はすべて500に集約する。
use serde_json::Value;
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::domain::{CityQuery, InvocationEventError, LookupOutcome, ResultEnvelope, extract_temperature};
use crate::infrastructure::{ProviderError, WeatherProvider};

/// 気温検索のエラー型
///
/// `to_string()`の結果がそのまま500エンベロープのエラーメッセージになる。
#[derive(Debug, Error)]
pub enum LookupError {
    /// 呼び出しイベントの不備
    #[error(transparent)]
    InvocationEvent(#[from] InvocationEventError),

    /// プロバイダー呼び出しの失敗
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

/// 気温検索ハンドラー
pub struct WeatherLookupHandler<P>
where
    P: WeatherProvider,
{
    /// 天気プロバイダー
    provider: P,
}

impl<P> WeatherLookupHandler<P>
where
    P: WeatherProvider,
{
    /// 新しいWeatherLookupHandlerを作成
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// 呼び出しイベントを処理してエンベロープを返す
    ///
    /// エラーを返すことはなく、すべての失敗は500エンベロープになる。
    pub async fn handle(&self, event: &Value) -> ResultEnvelope {
        let outcome = self.lookup(event).await;
        ResultEnvelope::from(outcome)
    }

    /// 呼び出しイベントを処理して検索結果を返す
    ///
    /// # 処理フロー
    /// 1. イベントから都市名を抽出
    /// 2. プロバイダーからレスポンスを取得
    /// 3. `main.temp`の有無で成功/NotFoundを判定
    /// 4. 1-2の失敗はFailureに変換
    #[instrument(skip_all, fields(city = tracing::field::Empty))]
    pub async fn lookup(&self, event: &Value) -> LookupOutcome {
        let outcome = match self.try_lookup(event).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "気温検索失敗");
                LookupOutcome::failure(err)
            }
        };

        info!(status_code = outcome.status_code(), "気温検索完了");

        outcome
    }

    async fn try_lookup(&self, event: &Value) -> Result<LookupOutcome, LookupError> {
        let query = CityQuery::from_event(event)?;
        tracing::Span::current().record("city", query.city());

        let response = self.provider.fetch_current(query.city()).await?;

        let outcome = match extract_temperature(&response) {
            Some(temperature) => LookupOutcome::success(query.into_city(), temperature.clone()),
            None => {
                info!(city = %query.city(), "レスポンスにmain.tempが無い");
                LookupOutcome::NotFound
            }
        };

        Ok(outcome)
    }
}
