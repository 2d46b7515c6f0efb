use crate::utils::error::{AppError, Result};
use std::io::Read;
use std::iter::Sum;

/// Arithmetic sum of `values`; the empty slice sums to zero.
pub fn sum<'a, T>(values: &'a [T]) -> T
where
    T: Sum<&'a T>,
{
    values.iter().sum()
}

/// Integer sum that reports overflow instead of wrapping.
pub fn checked_sum(values: &[i64]) -> Result<i64> {
    values
        .iter()
        .enumerate()
        .try_fold(0i64, |total, (i, v)| {
            total
                .checked_add(*v)
                .ok_or(AppError::OverflowError { count: i + 1 })
        })
}

/// 從 CSV 讀取所有數字，每格可為空；第一列若無法解析則視為標題列
pub fn read_numbers_csv<R: Read>(reader: R) -> Result<Vec<f64>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut numbers = Vec::new();

    for (row, record) in csv_reader.records().enumerate() {
        let record = record?;
        let mut parsed = Vec::with_capacity(record.len());
        let mut bad_cell = None;

        for (column, cell) in record.iter().enumerate() {
            if cell.is_empty() {
                continue;
            }
            match cell.parse::<f64>() {
                Ok(n) => parsed.push(n),
                Err(_) => {
                    bad_cell = Some((column, cell.to_string()));
                    break;
                }
            }
        }

        match bad_cell {
            None => numbers.extend(parsed),
            Some(_) if row == 0 => {
                tracing::debug!("Skipping header row: {:?}", record);
            }
            Some((column, cell)) => {
                return Err(AppError::ProcessingError {
                    message: format!(
                        "Not a number at row {}, column {}: '{}'",
                        row + 1,
                        column + 1,
                        cell
                    ),
                });
            }
        }
    }

    Ok(numbers)
}
