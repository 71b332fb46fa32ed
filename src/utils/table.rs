//! Aligned-table rendering for report output.
//!
//! Widths are measured over the whole data set before anything is emitted:
//! a column is as wide as its header or its longest cell, whichever wins.
//! Cells are left-aligned and columns joined with " | "; a dash rule
//! separates the header from the data rows.

use crate::db::queries::QueryOutput;

const COLUMN_JOIN: &str = " | ";
const NO_DATA: &str = "(No Data to Display)";

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Rows must have exactly one cell per header; uniform shape is the
    /// caller's contract (all rows of a report come from one result set).
    pub fn add_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.headers.len());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.measure();

        let mut out = String::new();
        out.push_str(&format_line(&self.headers, &widths));
        out.push('\n');

        let rule_len =
            widths.iter().sum::<usize>() + COLUMN_JOIN.len() * widths.len().saturating_sub(1);
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');

        if self.rows.is_empty() {
            out.push_str(NO_DATA);
            out.push('\n');
            return out;
        }

        for row in &self.rows {
            out.push_str(&format_line(row, &widths));
            out.push('\n');
        }

        out
    }

    fn measure(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.len());
            }
        }
        widths
    }
}

impl From<QueryOutput> for Table {
    fn from(output: QueryOutput) -> Self {
        let mut table = Table::new(output.headers);
        for row in output.rows {
            table.add_row(row);
        }
        table
    }
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| format!("{:<width$}", cell, width = w))
        .collect::<Vec<_>>()
        .join(COLUMN_JOIN)
}
