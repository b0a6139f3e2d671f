use crate::report::metric::MetricRow;

/// Energy and power figures are shown with two decimals.
pub fn format_fixed(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats a currency amount with no decimals and comma thousands separators.
pub fn group_thousands(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if sign.is_empty() || grouped.chars().all(|c| c == '0') {
        grouped
    } else {
        format!("{}{}", sign, grouped)
    }
}

/// One `label: value` line per row.
pub fn render_lines(rows: &[MetricRow]) -> Vec<String> {
    rows.iter()
        .map(|row| format!("{}: {}", row.label, row.value.display()))
        .collect()
}
