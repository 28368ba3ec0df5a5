// 気温の抽出
//
// プロバイダーレスポンスの`main.temp`の有無のみを判定する。
// `cod`などプロバイダー側のエラーコードは参照しない。

use serde_json::Value;

/// プロバイダーレスポンスから`main.temp`を取り出す
///
/// レスポンスと`main`がどちらもオブジェクトで、`main`が`temp`キーを
/// 持つ場合のみ値を返す。値の型は検査しない（`null`もそのまま返す）。
pub fn extract_temperature(response: &Value) -> Option<&Value> {
    response.get("main")?.as_object()?.get("temp")
}
