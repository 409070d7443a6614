//! Общий модуль для CLI утилит
//!
//! Содержит общую функциональность бинарника:
//! - Инициализация логирования
//! - Общие аргументы
//! - Форматирование вывода

use anyhow::Result;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

pub mod args;
pub mod output;

pub use args::CommonArgs;
pub use output::{OutputFormat, OutputWriter};

/// Фильтр логов: директивы `RUST_LOG`, если заданы, иначе `level`
pub fn log_filter(level: tracing::Level, rust_log: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(level.into())
        .parse_lossy(rust_log.unwrap_or_default())
}

/// Инициализирует систему логирования; логи идут в stderr
pub fn init_logging(level: tracing::Level) -> Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = log_filter(level, rust_log.as_deref());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Выводит предупреждение
pub fn print_warning(message: &str, colors: bool) {
    if colors {
        eprintln!("{} {}", "⚠️".yellow(), message.yellow());
    } else {
        eprintln!("warning: {}", message);
    }
}

/// Выводит ошибку
pub fn print_error(message: &str, colors: bool) {
    if colors {
        eprintln!("{} {}", "❌".red(), message.red());
    } else {
        eprintln!("error: {}", message);
    }
}
