//! Reshaping a flat sequence into fixed-width rows.
//!
//! `to_rows` regroups an iterator into a grid: a new row starts exactly
//! every `row_length` elements, so every row is `row_length` long except
//! possibly the last, which holds the remainder. Concatenating the rows in
//! order reproduces the input exactly.

use crate::error::{CollkitError, Result};

/// Collects `items` into rows of `row_length` elements each.
///
/// The final row holds `n % row_length` elements when that is nonzero,
/// otherwise exactly `row_length`. An empty input produces no rows at all.
/// Fails with [`CollkitError::InvalidArgument`] when `row_length` is zero,
/// before the iterator is consumed.
pub fn to_rows<T>(items: impl Iterator<Item = T>, row_length: usize) -> Result<Vec<Vec<T>>> {
    if row_length == 0 {
        return Err(CollkitError::InvalidArgument {
            message: "row length must be greater than zero".to_string(),
        });
    }

    let mut rows: Vec<Vec<T>> = Vec::new();

    for item in items {
        match rows.last_mut() {
            Some(row) if row.len() < row_length => {
                row.push(item);
            }
            _ => {
                let mut row = Vec::with_capacity(row_length);
                row.push(item);
                rows.push(row);
            }
        }
    }

    Ok(rows)
}
