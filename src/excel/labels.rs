use std::collections::HashMap;

use calamine::Data;

use crate::excel::constants::{DUPLICATE_SEPARATOR, LABEL_REPLACEMENTS, UNNAMED_PREFIX};
use crate::models::cell::is_whole;

/// Applies the header substitution table until the label stops changing.
///
/// A replacement can expose a new match (`"ÂÂ¿"` becomes `"Â¿"` on the first
/// pass), so a single pass would not be idempotent. Each substitution shrinks
/// the string, which bounds the loop.
pub fn clean_label(raw: &str) -> String {
    let mut label = raw.to_string();
    loop {
        let next = LABEL_REPLACEMENTS
            .iter()
            .fold(label.clone(), |acc, (from, to)| acc.replace(from, to));
        if next == label {
            return label;
        }
        label = next;
    }
}

/// Text of a header cell, or `None` when the cell is blank.
fn header_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if is_whole(*f) => format!("{}", *f as i64),
        other => other.to_string(),
    };
    (!text.is_empty()).then_some(text)
}

/// Turns the header row into the final column labels.
///
/// `first_column` is the sheet column of `row[0]`; columns before it are
/// blank and still get a label. Blank headers become `Unnamed: <column>`
/// before cleaning, and repeated labels get `.1`, `.2`, ... in the order
/// they appear.
pub fn header_labels(row: &[Data], first_column: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let blank = Data::Empty;

    std::iter::repeat(&blank)
        .take(first_column)
        .chain(row.iter())
        .enumerate()
        .map(|(index, cell)| {
            let raw = header_text(cell).unwrap_or_else(|| format!("{UNNAMED_PREFIX}{index}"));
            let label = clean_label(&raw);

            let count = seen.entry(label.clone()).or_insert(0);
            let label = if *count == 0 {
                label
            } else {
                format!("{label}{DUPLICATE_SEPARATOR}{count}")
            };
            *count += 1;
            label
        })
        .collect()
}
