//! Plain-text table rendering for CLI listings.

use super::formatting::pad_right;

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let line = |cells: &[String], out: &mut String| {
            let joined: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad_right(cells.get(i).map(String::as_str).unwrap_or(""), *w))
                .collect();
            out.push_str(joined.join("  ").trim_end());
            out.push('\n');
        };

        line(&self.headers, &mut out);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        out.push_str(&rule.join("  "));
        out.push('\n');

        for row in &self.rows {
            line(row, &mut out);
        }

        out
    }
}
