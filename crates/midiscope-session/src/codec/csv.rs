//! Tabular export.

use std::borrow::Cow;

use crate::mapping::MappingTable;

pub const HEADER: [&str; 6] = [
    "Label",
    "Type",
    "Category",
    "Channel",
    "Description",
    "Data Pattern",
];

/// Quote fields containing a comma, quote or newline; double inner quotes.
pub fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Rows joined by `\n`, no trailing newline.
pub fn export_csv(table: &MappingTable) -> String {
    let mut lines = Vec::with_capacity(table.len() + 1);
    lines.push(HEADER.join(","));
    for entry in table.entries() {
        let channel = entry.channel.map(|c| c.to_string()).unwrap_or_default();
        let row = [
            escape_field(&entry.label),
            escape_field(&entry.type_label),
            escape_field(&entry.category),
            Cow::Owned(channel),
            escape_field(&entry.description),
            escape_field(entry.data.as_str()),
        ];
        lines.push(row.join(","));
    }
    lines.join("\n")
}
