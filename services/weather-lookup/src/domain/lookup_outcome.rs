/// 気温検索の結果
///
/// 1回の呼び出しで起こりうる3つの終端状態を表す。
/// ステータスコードへの対応付けは`ResultEnvelope`への変換時にのみ行う。
use serde_json::Value;

/// 気温検索の結果
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutcome {
    /// プロバイダーが`main.temp`を返した
    Success {
        /// 呼び出しイベントの都市名
        city: String,
        /// `main.temp`の値（型は検査しない）
        temperature: Value,
    },
    /// プロバイダーは応答したが`main.temp`が無い
    NotFound,
    /// 入力・設定・通信・JSON解析のいずれかで失敗
    Failure(String),
}

impl LookupOutcome {
    /// 成功結果を作成
    pub fn success(city: impl Into<String>, temperature: Value) -> Self {
        Self::Success {
            city: city.into(),
            temperature,
        }
    }

    /// 任意のエラーから失敗結果を作成
    pub fn failure(error: impl std::fmt::Display) -> Self {
        Self::Failure(error.to_string())
    }

    /// 対応するHTTPステータスコード
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Success { .. } => 200,
            Self::NotFound => 404,
            Self::Failure(_) => 500,
        }
    }
}
