/// 呼び出しイベントの解析
///
/// Lambdaに渡される入力マッピングから`city`フィールドを取り出す。
/// `city`以外のフィールドは読まない。
use serde_json::Value;
use thiserror::Error;

/// イベント中の都市名フィールドのキー
const CITY_KEY: &str = "city";

/// 呼び出しイベント解析エラー
///
/// どちらのエラーも専用の400ではなく、500エンベロープに変換される。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvocationEventError {
    /// `city`キーが存在しない（イベントがオブジェクトでない場合も含む）
    #[error("missing required field: city")]
    MissingCity,

    /// `city`が文字列でない
    #[error("invalid field city: expected string, got {0}")]
    InvalidCity(String),
}

/// 検索対象の都市
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityQuery {
    city: String,
}

impl CityQuery {
    /// 都市名から直接作成
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }

    /// 呼び出しイベントから都市名を抽出
    ///
    /// 都市名はトリムも空文字チェックもせずそのまま保持する。
    /// 存在判定はプロバイダー側に任せる。
    ///
    /// # 引数
    /// * `event` - Lambda呼び出しイベント
    ///
    /// # 戻り値
    /// * `Ok(CityQuery)` - 都市名が文字列として存在する
    /// * `Err(InvocationEventError)` - 欠落または型不一致
    pub fn from_event(event: &Value) -> Result<Self, InvocationEventError> {
        let value = event
            .get(CITY_KEY)
            .ok_or(InvocationEventError::MissingCity)?;

        let city = value
            .as_str()
            .ok_or_else(|| InvocationEventError::InvalidCity(json_type_name(value).to_string()))?;

        Ok(Self::new(city))
    }

    /// 都市名を取得
    pub fn city(&self) -> &str {
        &self.city
    }

    /// 都市名の所有権を取得
    pub fn into_city(self) -> String {
        self.city
    }
}

/// エラーメッセージ用のJSON型名
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_event_with_city() {
        let event = json!({"city": "Vancouver"});

        let query = CityQuery::from_event(&event).unwrap();

        assert_eq!(query.city(), "Vancouver");
    }

    #[test]
    fn test_from_event_ignores_other_fields() {
        let event = json!({"city": "Tokyo", "country": "JP", "units": "imperial"});

        let query = CityQuery::from_event(&event).unwrap();

        assert_eq!(query.city(), "Tokyo");
    }

    #[test]
    fn test_from_event_keeps_city_verbatim() {
        // トリムしない
        let event = json!({"city": "  San Francisco "});

        let query = CityQuery::from_event(&event).unwrap();

        assert_eq!(query.into_city(), "  San Francisco ");
    }

    #[test]
    fn test_from_event_accepts_empty_city() {
        let event = json!({"city": ""});

        let query = CityQuery::from_event(&event).unwrap();

        assert_eq!(query.city(), "");
    }

    #[test]
    fn test_from_event_missing_city() {
        let event = json!({"town": "Vancouver"});

        let result = CityQuery::from_event(&event);

        assert_eq!(result.unwrap_err(), InvocationEventError::MissingCity);
    }

    #[test]
    fn test_from_event_not_an_object() {
        assert_eq!(
            CityQuery::from_event(&json!(["Vancouver"])).unwrap_err(),
            InvocationEventError::MissingCity
        );
        assert_eq!(
            CityQuery::from_event(&Value::Null).unwrap_err(),
            InvocationEventError::MissingCity
        );
    }

    #[test]
    fn test_from_event_city_not_string() {
        let result = CityQuery::from_event(&json!({"city": 42}));
        assert_eq!(
            result.unwrap_err(),
            InvocationEventError::InvalidCity("number".to_string())
        );

        let result = CityQuery::from_event(&json!({"city": null}));
        assert_eq!(
            result.unwrap_err(),
            InvocationEventError::InvalidCity("null".to_string())
        );
    }

    #[test]
    fn test_error_display_is_not_empty() {
        assert_eq!(
            InvocationEventError::MissingCity.to_string(),
            "missing required field: city"
        );
        assert_eq!(
            InvocationEventError::InvalidCity("array".to_string()).to_string(),
            "invalid field city: expected string, got array"
        );
    }
}
