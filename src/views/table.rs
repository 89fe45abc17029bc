use crate::utils::error::{AppError, Result};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Tsv,
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            _ => Err(AppError::InvalidConfigValueError {
                field: "format".to_string(),
                value: s.to_string(),
                reason: "Supported formats: text, csv, tsv".to_string(),
            }),
        }
    }
}

/// A rendered roster. When `rows` is empty and `empty_message` is set, the
/// message is emitted as the only body row.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub empty_message: Option<String>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
            empty_message: None,
        }
    }

    pub fn with_empty_message(mut self, message: &str) -> Self {
        self.empty_message = Some(message.to_string());
        self
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Rows as shown to the user, including the zero-results row.
    pub fn body(&self) -> Vec<Vec<String>> {
        match (&self.empty_message, self.rows.is_empty()) {
            (Some(message), true) => vec![vec![message.clone()]],
            _ => self.rows.clone(),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Csv => self.to_delimited(b','),
            OutputFormat::Tsv => self.to_delimited(b'\t'),
        }
    }

    pub fn to_text(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if let Some(w) = widths.get_mut(i) {
                    *w = (*w).max(cell.chars().count());
                }
            }
        }

        let format_row = |cells: &[String]| -> String {
            cells
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let width = widths.get(i).copied().unwrap_or(0);
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{}{}", cell, " ".repeat(pad))
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![format_row(&self.headers)];
        let total: usize = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
        lines.push("-".repeat(total));
        for row in self.body() {
            lines.push(format_row(&row));
        }
        lines.join("\n")
    }

    fn to_delimited(&self, delimiter: u8) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_writer(Vec::new());
        writer.write_record(&self.headers)?;
        for row in self.body() {
            writer.write_record(&row)?;
        }
        let data = writer
            .into_inner()
            .map_err(|e| AppError::Io(e.into_error()))?;
        String::from_utf8(data).map_err(|e| AppError::ConfigError {
            message: format!("Rendered table is not UTF-8: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        let mut table = Table::new(&["Coach Name", "Coach No.", "Email"]);
        table.push_row(vec![
            "Ana Cruz".to_string(),
            "102".to_string(),
            "ana@school.edu".to_string(),
        ]);
        table
    }

    #[test]
    fn test_text_output_is_aligned() {
        let text = sample().to_text();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Coach Name  Coach No.  Email");
        assert_eq!(lines[2], "Ana Cruz    102        ana@school.edu");
    }

    #[test]
    fn test_empty_message_becomes_only_row() {
        let table =
            Table::new(&["Coach Name"]).with_empty_message("No coaches found for this program.");
        assert_eq!(
            table.body(),
            vec![vec!["No coaches found for this program.".to_string()]]
        );
        let csv = table.render(OutputFormat::Csv).unwrap();
        assert_eq!(csv, "Coach Name\nNo coaches found for this program.\n");
    }

    #[test]
    fn test_csv_and_tsv_output() {
        let csv = sample().render(OutputFormat::Csv).unwrap();
        assert_eq!(csv, "Coach Name,Coach No.,Email\nAna Cruz,102,ana@school.edu\n");
        let tsv = sample().render(OutputFormat::Tsv).unwrap();
        assert!(tsv.starts_with("Coach Name\tCoach No.\tEmail\n"));
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
