use serde_json::{Map, Value};

/// One sheet row keyed by cleaned column label, in column order.
pub type Record = Map<String, Value>;
