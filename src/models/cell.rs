use calamine::{Data, ExcelDateTime};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::{Number, Value};

const TIME_FORMAT: &str = "%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

// Text the sheet reader treats as "no value"
const NA_STRINGS: [&str; 19] = [
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Every kind of value a spreadsheet cell can hold once it has been read.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Blank cell, error cell (`#N/A`, `#REF!`, ...) or NaN
    Missing,
    Time(NaiveTime),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
    Int(i64),
    Float(f64),
    Text(String),
    Bool(bool),
    /// Anything without a JSON scalar counterpart, kept as its string form
    Other(String),
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }

    /// Renders the value as a JSON scalar. Dates and times become ISO-8601
    /// strings.
    pub fn into_json(self) -> Value {
        match self {
            CellValue::Missing => Value::Null,
            CellValue::Time(t) => Value::String(t.format(TIME_FORMAT).to_string()),
            CellValue::Date(d) => Value::String(d.format(DATE_FORMAT).to_string()),
            CellValue::Timestamp(ts) => Value::String(ts.format(TIMESTAMP_FORMAT).to_string()),
            CellValue::Int(i) => Value::Number(i.into()),
            CellValue::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            CellValue::Text(s) => Value::String(s),
            CellValue::Bool(b) => Value::Bool(b),
            CellValue::Other(s) => Value::String(s),
        }
    }
}

impl From<&Data> for CellValue {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Missing,
            Data::Float(f) if f.is_nan() => CellValue::Missing,
            Data::String(s) if NA_STRINGS.contains(&s.as_str()) => CellValue::Missing,
            Data::DateTime(dt) => from_serial(dt),
            Data::DateTimeIso(s) => from_iso(s),
            Data::Int(i) => CellValue::Int(*i),
            // xlsx stores every number as a float
            Data::Float(f) if is_whole(*f) => CellValue::Int(*f as i64),
            Data::Float(f) => CellValue::Float(*f),
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DurationIso(s) => CellValue::Other(s.clone()),
        }
    }
}

pub(crate) fn is_whole(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Excel date serials below 1 carry no calendar day, only a time of day.
fn from_serial(dt: &ExcelDateTime) -> CellValue {
    if dt.is_duration() {
        return match dt.as_duration() {
            Some(duration) => CellValue::Other(duration.to_string()),
            None => CellValue::Other(dt.to_string()),
        };
    }

    match dt.as_datetime() {
        Some(ts) if dt.as_f64() < 1.0 => CellValue::Time(ts.time()),
        Some(ts) => CellValue::Timestamp(ts),
        None => CellValue::Other(dt.to_string()),
    }
}

/// ODS files hand dates over as ISO strings; parse them back so every date
/// goes through the same formatting.
fn from_iso(s: &str) -> CellValue {
    if let Ok(ts) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        CellValue::Timestamp(ts)
    } else if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        CellValue::Date(date)
    } else if let Ok(time) = NaiveTime::parse_from_str(s, "%H:%M:%S%.f") {
        CellValue::Time(time)
    } else {
        CellValue::Other(s.to_string())
    }
}
