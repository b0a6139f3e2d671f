pub mod export;
pub mod format;
pub mod metric;

pub use export::{parse_csv, to_csv, to_json, EXPORT_FILE_NAME, EXPORT_MIME_TYPE};
pub use format::{format_fixed, group_thousands, render_lines};
pub use metric::{MetricRow, MetricValue};
