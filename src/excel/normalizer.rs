use std::io::Cursor;

use calamine::{Data, Range, Reader, open_workbook_auto_from_rs};
use serde_json::Value;

use crate::error::PipelineError;
use crate::excel::labels::header_labels;
use crate::models::cell::CellValue;
use crate::models::record::Record;

/// Parses the first worksheet of `bytes` into records.
///
/// Accepts anything calamine can sniff (xlsx, xlsm, xls, ods).
pub fn normalize_workbook(bytes: Vec<u8>) -> Result<Vec<Record>, PipelineError> {
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(PipelineError::EmptyWorkbook)??;

    Ok(records_from_range(&range))
}

/// First row is the header; every non-blank row after it becomes a record.
///
/// Columns are counted from the sheet's column A, so empty leading columns
/// outside the used range still show up as null placeholders.
pub fn records_from_range(range: &Range<Data>) -> Vec<Record> {
    let first_column = range.start().map_or(0, |(_, col)| col as usize);
    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Vec::new();
    };
    let labels = header_labels(header, first_column);

    rows.filter(|row| !is_blank(row))
        .map(|row| to_record(&labels, first_column, row))
        .collect()
}

fn is_blank(row: &[Data]) -> bool {
    row.iter().all(|cell| matches!(cell, Data::Empty))
}

fn to_record(labels: &[String], first_column: usize, row: &[Data]) -> Record {
    labels
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let value = index
                .checked_sub(first_column)
                .and_then(|i| row.get(i))
                .map_or(Value::Null, |cell| CellValue::from(cell).into_json());
            (label.clone(), value)
        })
        .collect()
}
