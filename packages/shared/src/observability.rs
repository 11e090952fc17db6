//! # Observability 基盤
//!
//! tracing subscriber の初期化を提供する。
//! 出力形式（[`LogFormat`]）はアプリケーション設定から渡される。

/// `RUST_LOG` 未設定時に使用するフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,cadastro=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

impl LogFormat {
    /// 設定値（`json` / `pretty`）から出力形式を得る
    ///
    /// 大文字小文字は区別する。未知の値は `None`。
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "json" => Some(Self::Json),
            "pretty" => Some(Self::Pretty),
            _ => None,
        }
    }
}

/// トレーシングを初期化する
///
/// `RUST_LOG` でフィルタを上書きできる。
/// `ErrorLayer` を登録するので、`InfraError` が生成時点の SpanTrace を保持できる。
#[cfg(feature = "observability")]
pub fn init_tracing(format: LogFormat) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let fmt_layer = match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
