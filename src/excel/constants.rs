// Published export of the appointments sheet
pub const EXCEL_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTehAmmwC6fZqVfOG1Z_AyfHVZUEh1HnOnRamIIK0eYLXjtpWn9BGf7u0YZnMk__NIBgLBE9SSGkasx/pub?output=xlsx";

// Name given to a header cell that is blank; the column index is appended
pub const UNNAMED_PREFIX: &str = "Unnamed: ";

// Header substitutions, applied in order. Every replacement is shorter than
// its pattern.
pub const LABEL_REPLACEMENTS: [(&str, &str); 8] = [
    // placeholder columns
    (UNNAMED_PREFIX, "col_"),
    // inverted punctuation the form export mangles
    ("\u{c2}\u{bf}", "\u{bf}"), // Â¿ -> ¿
    ("\u{c2}\u{a1}", "\u{a1}"), // Â¡ -> ¡
    // UTF-8 vowels read back as Latin-1
    ("\u{c3}\u{a1}", "\u{e1}"), // Ã¡ -> á
    ("\u{c3}\u{a9}", "\u{e9}"), // Ã© -> é
    ("\u{c3}\u{ad}", "\u{ed}"), // Ã<soft hyphen> -> í
    ("\u{c3}\u{b3}", "\u{f3}"), // Ã³ -> ó
    ("\u{c3}\u{ba}", "\u{fa}"), // Ãº -> ú
];

// Suffix separator for repeated header labels
pub const DUPLICATE_SEPARATOR: char = '.';
