//! Общие аргументы командной строки для CLI утилит

use clap::Parser;

use super::output::OutputFormat;

/// Общие аргументы для всех CLI команд
#[derive(Parser, Debug, Clone)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress all log output except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl CommonArgs {
    /// Определяет уровень логирования на основе флагов
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        }
    }

    /// Цвета включены, если не отключены флагом или форматом
    pub fn use_colors(&self) -> bool {
        !self.no_color && self.format == OutputFormat::Text
    }
}
