//! Диагностика через `tracing`.
//!
//! Логи пишутся в stderr, чтобы не смешиваться с запросами и результатом
//! в stdout. Уровень задаётся через `RUST_LOG`, по умолчанию `warn`.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Фильтр, если `RUST_LOG` не задан или некорректен.
pub const DEFAULT_FILTER: &str = "warn";

/// Инициализирует глобальный подписчик для CLI.
///
/// Повторный вызов ничего не меняет.
pub fn init() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();
}
