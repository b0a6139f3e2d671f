use crate::prelude::{SizingError, SizingResult};
use crate::report::metric::MetricRow;

/// File name offered for the downloadable report.
pub const EXPORT_FILE_NAME: &str = "evessel_charging_sizing.csv";
pub const EXPORT_MIME_TYPE: &str = "text/csv";

const HEADER: [&str; 2] = ["Metric", "Value"];

fn quote_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Serializes rows as a two-column `Metric,Value` table.
pub fn to_csv(rows: &[MetricRow]) -> String {
    let mut csv = format!("{},{}\n", HEADER[0], HEADER[1]);
    for row in rows {
        csv.push_str(&format!(
            "{},{}\n",
            quote_field(&row.label),
            quote_field(&row.value.raw())
        ));
    }
    csv
}

/// Pretty-printed JSON array of the rows.
pub fn to_json(rows: &[MetricRow]) -> SizingResult<String> {
    serde_json::to_string_pretty(rows).map_err(|err| SizingError::Internal(err.to_string()))
}

fn is_blank(record: &[String]) -> bool {
    matches!(record, [only] if only.is_empty())
}

fn split_records(text: &str) -> SizingResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => in_quotes = false,
                _ => field.push(ch),
            }
            continue;
        }

        match ch {
            '"' if field.is_empty() => in_quotes = true,
            ',' => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                record.push(std::mem::take(&mut field));
                let record = std::mem::take(&mut record);
                if !is_blank(&record) {
                    records.push(record);
                }
            }
            _ => field.push(ch),
        }
    }

    if in_quotes {
        return Err(SizingError::InvalidInput("unterminated quoted field".into()));
    }
    if !field.is_empty() || !record.is_empty() {
        record.push(field);
        records.push(record);
    }
    Ok(records)
}

/// Reads an exported table back into `(label, value)` pairs.
pub fn parse_csv(text: &str) -> SizingResult<Vec<(String, String)>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text)?.into_iter();

    match records.next() {
        Some(header) if header == HEADER => {}
        Some(header) => {
            return Err(SizingError::InvalidInput(format!(
                "unexpected header {:?}",
                header
            )))
        }
        None => return Err(SizingError::InvalidInput("empty export".into())),
    }

    records
        .enumerate()
        .map(|(idx, record)| match <[String; 2]>::try_from(record) {
            Ok([label, value]) => Ok((label, value)),
            Err(record) => Err(SizingError::InvalidInput(format!(
                "row {} has {} fields, expected 2",
                idx + 1,
                record.len()
            ))),
        })
        .collect()
}
