// 結果エンベロープ
//
// ハンドラーの戻り値となる`{statusCode, body, headers?}`マッピング。
// bodyは常に成功形状かエラー形状のどちらかのJSON文字列で、
// statusCodeは常に200/404/500のいずれか。

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::LookupOutcome;

/// 気温が見つからない場合のエラーメッセージ
pub const TEMPERATURE_NOT_FOUND_MESSAGE: &str = "Temperature data not found";

/// bodyのエンコードに失敗した場合に使う固定body
const FALLBACK_ERROR_BODY: &str = r#"{"error":"failed to encode response body"}"#;

/// 成功時のbody
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessBody {
    /// 都市名
    pub city: String,
    /// 現在の気温（プロバイダーの`main.temp`）
    pub current_temperature: Value,
}

/// エラー時のbody
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// エラーメッセージ
    pub error: String,
}

/// ハンドラーの戻り値
///
/// # フィールド
/// - `statusCode`: 200, 404, 500のいずれか
/// - `body`: JSONエンコード済みの`SuccessBody`または`ErrorBody`
/// - `headers`: 成功時のみ`Content-Type: application/json`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
}

impl ResultEnvelope {
    /// 200エンベロープを作成
    pub fn success(city: impl Into<String>, temperature: Value) -> Self {
        let body = SuccessBody {
            city: city.into(),
            current_temperature: temperature,
        };

        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        match serde_json::to_string(&body) {
            Ok(body) => Self {
                status_code: 200,
                body,
                headers: Some(headers),
            },
            Err(_) => Self::fallback(),
        }
    }

    /// 404エンベロープを作成
    pub fn not_found() -> Self {
        Self::error(404, TEMPERATURE_NOT_FOUND_MESSAGE)
    }

    /// 500エンベロープを作成
    ///
    /// ハンドラー構築前のエラー（設定読み込み失敗など）にも使用する。
    pub fn failure(message: impl Into<String>) -> Self {
        Self::error(500, message)
    }

    fn error(status_code: u16, message: impl Into<String>) -> Self {
        let body = ErrorBody {
            error: message.into(),
        };

        match serde_json::to_string(&body) {
            Ok(body) => Self {
                status_code,
                body,
                headers: None,
            },
            Err(_) => Self::fallback(),
        }
    }

    fn fallback() -> Self {
        Self {
            status_code: 500,
            body: FALLBACK_ERROR_BODY.to_string(),
            headers: None,
        }
    }

    /// bodyを成功形状としてデコード
    pub fn success_body(&self) -> Option<SuccessBody> {
        serde_json::from_str(&self.body).ok()
    }

    /// bodyをエラー形状としてデコード
    pub fn error_body(&self) -> Option<ErrorBody> {
        serde_json::from_str(&self.body).ok()
    }
}

impl From<LookupOutcome> for ResultEnvelope {
    fn from(outcome: LookupOutcome) -> Self {
        match outcome {
            LookupOutcome::Success { city, temperature } => Self::success(city, temperature),
            LookupOutcome::NotFound => Self::not_found(),
            LookupOutcome::Failure(message) => Self::failure(message),
        }
    }
}
