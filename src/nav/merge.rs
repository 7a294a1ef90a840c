use std::collections::{HashMap, HashSet};

use crate::core::{Cell, NavError, RawTable};
use crate::nav::ColumnTokens;

const LEFT_SUFFIX: &str = "_x";
const RIGHT_SUFFIX: &str = "_y";

fn key_column(table: &RawTable, tokens: &ColumnTokens, side: &str) -> Result<usize, NavError> {
    table
        .columns()
        .iter()
        .position(|c| tokens.is_date_column(c))
        .ok_or_else(|| NavError::Data(format!("{side} table has no date column to merge on")))
}

fn pick(row: &[Cell], cols: &[usize]) -> Vec<Cell> {
    cols.iter().map(|&i| row[i].clone()).collect()
}

/// Outer-joins `right` into `left` on their date columns.
///
/// The key column keeps `left`'s name and position; `right`'s other columns are appended.
/// Non-key names present on both sides get `_x` (left) and `_y` (right) suffixes. Rows
/// unmatched on either side are kept with missing cells for the other side's columns.
pub fn outer_join_on_date(
    left: &RawTable,
    right: &RawTable,
    tokens: &ColumnTokens,
) -> Result<RawTable, NavError> {
    let lk = key_column(left, tokens, "left")?;
    let rk = key_column(right, tokens, "right")?;

    let left_names: HashSet<&str> = left
        .columns()
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != lk)
        .map(|(_, c)| c.as_str())
        .collect();
    let right_cols: Vec<usize> = (0..right.columns().len()).filter(|&i| i != rk).collect();
    let right_names: HashSet<&str> = right_cols
        .iter()
        .map(|&i| right.columns()[i].as_str())
        .collect();

    let mut columns: Vec<String> = left
        .columns()
        .iter()
        .enumerate()
        .map(|(i, c)| {
            if i != lk && right_names.contains(c.as_str()) {
                format!("{c}{LEFT_SUFFIX}")
            } else {
                c.clone()
            }
        })
        .collect();
    columns.extend(right_cols.iter().map(|&i| {
        let c = &right.columns()[i];
        if left_names.contains(c.as_str()) {
            format!("{c}{RIGHT_SUFFIX}")
        } else {
            c.clone()
        }
    }));

    let mut by_key: HashMap<String, Vec<usize>> = HashMap::new();
    for (ri, row) in right.rows().enumerate() {
        if let Some(key) = row[rk].date_text() {
            by_key.entry(key).or_default().push(ri);
        }
    }

    let right_rows: Vec<&[Cell]> = right.rows().collect();
    let mut matched = vec![false; right_rows.len()];
    let mut out = RawTable::new(columns);

    for row in left.rows() {
        let hits = row[lk].date_text().and_then(|k| by_key.get(&k));
        match hits {
            Some(idxs) => {
                for &ri in idxs {
                    matched[ri] = true;
                    let mut cells = row.to_vec();
                    cells.extend(pick(right_rows[ri], &right_cols));
                    out.push_row(cells)?;
                }
            }
            None => {
                let mut cells = row.to_vec();
                cells.resize(row.len() + right_cols.len(), Cell::Missing);
                out.push_row(cells)?;
            }
        }
    }

    for (ri, row) in right_rows.iter().enumerate() {
        if matched[ri] {
            continue;
        }
        let mut cells: Vec<Cell> = vec![Cell::Missing; left.columns().len()];
        cells[lk] = row[rk].clone();
        cells.extend(pick(row, &right_cols));
        out.push_row(cells)?;
    }

    Ok(out)
}
