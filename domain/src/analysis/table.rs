//! Fixed-column data table

use super::record::Record;
use crate::conversation::entry::BotReply;

/// A table column: heading and the row field it reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableColumn {
    pub header: &'static str,
    pub field: &'static str,
}

/// The columns every data table shows, in order.
pub const TABLE_COLUMNS: [TableColumn; 7] = [
    TableColumn { header: "Year", field: "year" },
    TableColumn { header: "Area", field: "final_location" },
    TableColumn { header: "Total Sales (₹)", field: "total_sales_igr" },
    TableColumn { header: "Flats Sold", field: "flat_sold_igr" },
    TableColumn { header: "Avg Flat Rate", field: "flat_weighted_avg_rate" },
    TableColumn { header: "Total Units", field: "total_units" },
    TableColumn { header: "Carpet Area (sqft)", field: "total_carpet_area" },
];

pub type TableRow = [String; TABLE_COLUMNS.len()];

/// Table cells derived from a reply's rows. Missing fields are empty cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    rows: Vec<TableRow>,
}

impl TableView {
    /// `None` when the reply has no rows.
    pub fn from_reply(reply: &BotReply) -> Option<Self> {
        Self::from_rows(reply.rows())
    }

    pub fn from_rows(rows: &[Record]) -> Option<Self> {
        if rows.is_empty() {
            return None;
        }
        Some(Self {
            rows: rows.iter().map(cells).collect(),
        })
    }

    pub fn headers(&self) -> [&'static str; TABLE_COLUMNS.len()] {
        TABLE_COLUMNS.map(|c| c.header)
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Same table with every cell passed through `f(column, cell)`.
    pub fn map_cells(&self, f: impl Fn(usize, &str) -> String) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|row| std::array::from_fn(|i| f(i, &row[i])))
                .collect(),
        }
    }

    /// Display width of each column (header or widest cell, in chars).
    pub fn column_widths(&self) -> [usize; TABLE_COLUMNS.len()] {
        let mut widths = TABLE_COLUMNS.map(|c| c.header.chars().count());
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }
}

fn cells(record: &Record) -> TableRow {
    TABLE_COLUMNS.map(|c| record.cell(c.field))
}
