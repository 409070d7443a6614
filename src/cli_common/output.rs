//! Модуль для форматирования и вывода результатов

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

use crate::normalizer::{FileOutcome, RunReport, COMPLETION_LINE};

/// Формат вывода результатов
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One line per file, then a completion line
    Text,
    /// The whole run report as a single JSON document
    Json,
}

/// Writer для вывода результатов
pub struct OutputWriter<W: Write = Box<dyn Write>> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
    colors: bool,
}

impl OutputWriter {
    /// Создает writer для stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(Box::new(io::stdout()), format)
    }
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            pretty: false,
            colors: false,
        }
    }

    /// Включает pretty-печать для JSON
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Включает ANSI-цвета в текстовом режиме
    pub fn with_colors(mut self, colors: bool) -> Self {
        self.colors = colors;
        self
    }

    /// Записывает строку по файлу (только текстовый режим)
    pub fn write_outcome(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        if self.format != OutputFormat::Text {
            return Ok(());
        }

        let line = outcome.to_line();
        if !self.colors {
            return writeln!(self.writer, "{}", line);
        }
        if outcome.is_success() {
            writeln!(self.writer, "{}", line.as_str().green())
        } else {
            writeln!(self.writer, "{}", line.as_str().red())
        }
    }

    /// Завершает вывод: строка завершения или JSON-отчет
    pub fn write_summary(&mut self, report: &RunReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                writeln!(self.writer)?;
                if self.colors {
                    writeln!(self.writer, "{}", COMPLETION_LINE.bold())?;
                } else {
                    writeln!(self.writer, "{}", COMPLETION_LINE)?;
                }
            }
            OutputFormat::Json => self.write_object(report)?,
        }
        self.flush()
    }

    /// Записывает сериализуемый объект
    pub fn write_object<T: Serialize>(&mut self, obj: &T) -> Result<()> {
        let json = if self.pretty {
            serde_json::to_string_pretty(obj)?
        } else {
            serde_json::to_string(obj)?
        };
        writeln!(self.writer, "{}", json)?;
        Ok(())
    }

    /// Завершает запись и сбрасывает буфер
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}
