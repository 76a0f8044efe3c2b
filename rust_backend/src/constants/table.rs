//! Plain-text rendering of the constants table.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::record::ConstantRecord;

const HEADERS: [&str; 5] = ["Name", "Value", "Unit", "Uncertainty", "Reference"];

/// Rendering options for [`ConstantsTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSettings {
    /// Significant digits of the value column.
    #[serde(default = "default_precision")]
    pub precision: usize,

    #[serde(default = "default_show_uncertainty")]
    pub show_uncertainty: bool,
}

fn default_precision() -> usize {
    6
}

fn default_show_uncertainty() -> bool {
    true
}

impl Default for TableSettings {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_uncertainty: default_show_uncertainty(),
        }
    }
}

impl TableSettings {
    fn format_value(&self, value: f64) -> String {
        let decimals = self.precision.max(1) - 1;
        format!("{:.*e}", decimals, value)
    }

    fn format_uncertainty(&self, uncertainty: Option<f64>) -> String {
        match uncertainty {
            None => String::new(),
            Some(u) if u == 0.0 => "exact".to_string(),
            Some(u) => self.format_value(u),
        }
    }
}

/// All constants of a registry, in registration order.
#[derive(Debug, Clone, PartialEq)]
pub struct ConstantsTable {
    rows: Vec<ConstantRecord>,
    settings: TableSettings,
}

impl ConstantsTable {
    pub fn new(rows: Vec<ConstantRecord>) -> Self {
        Self {
            rows,
            settings: TableSettings::default(),
        }
    }

    /// Use `settings` for the `Display` rendering.
    pub fn with_settings(mut self, settings: TableSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[ConstantRecord] {
        &self.rows
    }

    pub fn settings(&self) -> TableSettings {
        self.settings
    }

    /// Render as an aligned text table.
    ///
    /// The first line holds the column headers and the second a dashed rule;
    /// every following line is one constant. Names, units and references are
    /// left-aligned, numbers right-aligned.
    pub fn render_with(&self, settings: &TableSettings) -> String {
        let columns: Vec<usize> = if settings.show_uncertainty {
            vec![0, 1, 2, 3, 4]
        } else {
            vec![0, 1, 2, 4]
        };

        let cells: Vec<[String; 5]> = self
            .rows
            .iter()
            .map(|r| {
                [
                    r.name.to_string(),
                    settings.format_value(r.value),
                    r.unit.to_string(),
                    settings.format_uncertainty(r.uncertainty),
                    r.reference.to_string(),
                ]
            })
            .collect();

        let mut widths = HEADERS.map(|h| h.chars().count());
        for row in &cells {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let line = |row: &[String; 5]| -> String {
            columns
                .iter()
                .map(|&c| {
                    let w = widths[c];
                    if c == 1 || c == 3 {
                        format!("{:>w$}", row[c], w = w)
                    } else {
                        format!("{:<w$}", row[c], w = w)
                    }
                })
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let header = HEADERS.map(str::to_string);
        let rule = widths.map(|w| "-".repeat(w));

        let mut out = Vec::with_capacity(cells.len() + 2);
        out.push(line(&header));
        out.push(line(&rule));
        out.extend(cells.iter().map(line));
        out.join("\n")
    }
}

impl fmt::Display for ConstantsTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render_with(&self.settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::data::{AGE, GM, METALLICITY};

    fn table() -> ConstantsTable {
        ConstantsTable::new(vec![GM, AGE, METALLICITY])
    }

    #[test]
    fn test_header_and_rule() {
        let rendered = table().to_string();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[0].ends_with("Reference"));
        assert!(lines[1].chars().all(|c| c == '-' || c == ' '));
    }

    #[test]
    fn test_rows_in_order_and_aligned() {
        let rendered = table().to_string();
        let lines: Vec<&str> = rendered.lines().skip(2).collect();
        assert!(lines[0].starts_with("GM "));
        assert!(lines[1].starts_with("age "));
        assert!(lines[2].starts_with("metallicity "));

        let unit_col = |l: &str, unit: &str| l.find(unit).unwrap();
        assert_eq!(unit_col(lines[0], "m3 s-2"), unit_col(lines[1], "yr"));
    }

    #[test]
    fn test_value_precision() {
        let rendered = table().to_string();
        assert!(rendered.contains("1.32712e20"));
        assert!(rendered.contains("exact"));

        let short = table().render_with(&TableSettings {
            precision: 2,
            show_uncertainty: true,
        });
        assert!(short.contains("1.3e20"));
        assert!(short.contains("1.0e8"));
    }

    #[test]
    fn test_hide_uncertainty() {
        let rendered = table().render_with(&TableSettings {
            precision: 6,
            show_uncertainty: false,
        });
        assert!(!rendered.contains("Uncertainty"));
        assert!(!rendered.contains("exact"));
    }

    #[test]
    fn test_len() {
        assert_eq!(table().len(), 3);
        assert!(ConstantsTable::new(Vec::new()).is_empty());
    }
}
