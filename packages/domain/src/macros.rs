/// DB 採番の整数 ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)`
/// - `new()`: `0` 以外を受け付ける（リクエストボディ由来の値、`0` は未入力扱い）
/// - `from_db()`: DB やパスパラメータから検証なしで復元
/// - `as_i64()`: 内部値の取得
///
/// # 使用例
///
/// ```rust
/// use cadastro_domain::city::CityId;
///
/// let id = CityId::new(1).unwrap();
/// assert_eq!(id.as_i64(), 1);
/// assert!(CityId::new(0).is_err());
/// ```
macro_rules! define_integer_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// 整数から ID を作成する（`0` は未入力として拒否）
            pub fn new(value: i64) -> Result<Self, $crate::DomainError> {
                if value == 0 {
                    return Err($crate::DomainError::Validation(format!(
                        "{} é obrigatório",
                        $label
                    )));
                }
                Ok(Self(value))
            }

            /// DB の値やパスパラメータから ID を復元する
            pub fn from_db(value: i64) -> Self {
                Self(value)
            }

            /// 内部の整数値を取得する
            pub fn as_i64(&self) -> i64 {
                self.0
            }
        }
    };
}

/// バリデーション付き String Newtype を定義する宣言型マクロ
///
/// - `new()`: 空文字・空白のみを拒否し、それ以外は受け取った値をそのまま保持する
/// - `from_db()`: DB に格納済みの値を検証なしで復元
/// - `as_str()`: 文字列参照
/// - `into_string()`: 所有権を持つ文字列に変換
///
/// # 引数
///
/// - `$label`: エラーメッセージに使うラベル（例: `"Nome"`）
macro_rules! define_validated_string {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident {
            label: $label:expr $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[display("{_0}")]
        $vis struct $Name(String);

        impl $Name {
            pub fn new(value: impl Into<String>) -> Result<Self, $crate::DomainError> {
                let value = value.into();

                if value.trim().is_empty() {
                    return Err($crate::DomainError::Validation(format!(
                        "{} é obrigatório",
                        $label
                    )));
                }

                Ok(Self(value))
            }

            /// DB に格納済みの値から復元する
            pub fn from_db(value: String) -> Self {
                Self(value)
            }

            /// 文字列参照を取得する
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// 所有権を持つ文字列に変換する
            pub fn into_string(self) -> String {
                self.0
            }
        }
    };
}
