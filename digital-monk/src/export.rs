//! CSV export of the fortune history.

use crate::error::ExportError;
use crate::storage::history::HistoryEntry;

pub const EXPORT_FILENAME: &str = "digital_monk_fortunes_history.csv";
pub const CSV_MIME: &str = "text/csv;charset=utf-8;";

const HEADERS: [&str; 9] = [
    "Date",
    "Time",
    "Nickname",
    "Initiator",
    "Emotion/State",
    "Color Metaphor",
    "Main Focus",
    "Recent Activity",
    "Generated Fortune/Outcome",
];

/// Quote a field, doubling embedded quotes. An absent value becomes `""`.
fn escape_field(field: Option<&str>) -> String {
    match field {
        Some(s) => format!("\"{}\"", s.replace('"', "\"\"")),
        None => "\"\"".to_string(),
    }
}

fn row<'a>(fields: impl IntoIterator<Item = &'a str>) -> String {
    fields
        .into_iter()
        .map(|f| escape_field(Some(f)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Render the history as CSV: a header row plus one row per entry.
///
/// An empty history is refused rather than exported as a header-only file.
pub fn to_csv(entries: &[HistoryEntry]) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut rows = Vec::with_capacity(entries.len() + 1);
    rows.push(row(HEADERS));
    rows.extend(entries.iter().map(|e| {
        row([
            e.date.as_str(),
            e.time.as_str(),
            e.nickname.as_str(),
            e.starter.as_str(),
            e.mood.as_str(),
            e.color.as_str(),
            e.focus.as_str(),
            e.activity.as_str(),
            e.result.as_str(),
        ])
    }));

    Ok(rows.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(result: &str) -> HistoryEntry {
        HistoryEntry {
            date: "5/4/2025".to_string(),
            time: "10:00:00 AM".to_string(),
            starter: "I feel".to_string(),
            mood: "happy".to_string(),
            color: "yellow, like joy or clarity".to_string(),
            focus: "my work or career".to_string(),
            activity: "achieving small victories".to_string(),
            nickname: "Ada".to_string(),
            result: result.to_string(),
        }
    }

    #[test]
    fn test_empty_history_is_refused() {
        assert_eq!(to_csv(&[]), Err(ExportError::NothingToExport));
    }

    #[test]
    fn test_header_and_rows() {
        let csv = to_csv(&[entry("Stay caffeinated."), entry("Reboot.")]).unwrap();
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "\"Date\",\"Time\",\"Nickname\",\"Initiator\",\"Emotion/State\",\"Color Metaphor\",\
             \"Main Focus\",\"Recent Activity\",\"Generated Fortune/Outcome\""
        );
        assert_eq!(
            lines[1],
            "\"5/4/2025\",\"10:00:00 AM\",\"Ada\",\"I feel\",\"happy\",\
             \"yellow, like joy or clarity\",\"my work or career\",\
             \"achieving small victories\",\"Stay caffeinated.\""
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let csv = to_csv(&[entry(r#"The monk says "ping""#)]).unwrap();
        assert!(csv.ends_with(r#","The monk says ""ping""""#));
    }

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field(None), "\"\"");
        assert_eq!(escape_field(Some("")), "\"\"");
        assert_eq!(escape_field(Some("a\"b")), "\"a\"\"b\"");
    }
}
