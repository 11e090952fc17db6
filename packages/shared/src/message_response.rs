//! # メッセージレスポンス
//!
//! 更新系 API の成功レスポンス形式 `{ "message": "..." }` を提供する。

use serde::{Deserialize, Serialize};

/// 更新系 API の成功レスポンス
///
/// 作成・更新・削除エンドポイントは、作成された ID などを返さず
/// 人間可読なメッセージのみを返す。
///
/// ## 使用例
///
/// ```
/// use cadastro_shared::MessageResponse;
///
/// let response = MessageResponse::new("Dados inseridos com sucesso");
/// assert_eq!(response.message, "Dados inseridos com sucesso");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// 新しい `MessageResponse` を作成する
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_serializeでmessageキーのみのjsonになる() {
        let response = MessageResponse::new("Registro deletado com sucesso");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            serde_json::json!({ "message": "Registro deletado com sucesso" })
        );
    }

    #[test]
    fn test_deserializeでjsonからオブジェクトに変換する() {
        let json = r#"{"message": "ok"}"#;
        let response: MessageResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.message, "ok");
    }
}
