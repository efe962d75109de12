//! Report rendering for query results.
//!
//! Matches are ordered by their rendered `number | file` line, padding
//! included, rather than by the `(number, file)` pair. Numbers longer than
//! the column width therefore sort against the padding of shorter ones.

use crate::error::Result;
use crate::types::CardMatch;

/// Printed when a query matched no cards.
pub const NOTHING_FOUND: &str = "Nothing was found!";

/// Printed when a query supplied no predicates.
pub const NO_ARGUMENTS: &str = "No arguments!";

const INDEX_WIDTH: usize = 5;
const NUMBER_WIDTH: usize = 15;
const FILE_WIDTH: usize = 22;
const RULE_WIDTH: usize = INDEX_WIDTH + 49;

/// Render the padded `number | file` entry used for ordering.
pub fn render_entry(card: &CardMatch) -> String {
    format!(
        "{:<nw$} | {:<fw$}",
        card.number,
        card.file_name,
        nw = NUMBER_WIDTH,
        fw = FILE_WIDTH
    )
}

/// Sort matches by their rendered entry.
pub fn sort_matches(matches: &mut [CardMatch]) {
    matches.sort_by_cached_key(render_entry);
}

/// Render a numbered table of matches, or a "nothing found" line.
pub fn render_report(matches: &[CardMatch]) -> String {
    if matches.is_empty() {
        return NOTHING_FOUND.to_string();
    }

    let mut entries: Vec<String> = matches.iter().map(render_entry).collect();
    entries.sort();

    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(format!(
        "{:<iw$}{:<nw$} | {:<fw$}",
        "#.",
        "card number",
        "card file",
        iw = INDEX_WIDTH,
        nw = NUMBER_WIDTH,
        fw = FILE_WIDTH
    ));
    lines.push("-".repeat(RULE_WIDTH));

    for (idx, entry) in entries.iter().enumerate() {
        let index = format!("{}.", idx + 1);
        let iw = INDEX_WIDTH.max(index.len() + 1);
        lines.push(format!("{:<iw$}{}", index, entry));
    }

    lines
        .iter()
        .map(|line| line.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render matches as a JSON array, in report order.
pub fn render_json(matches: &[CardMatch]) -> Result<String> {
    let mut sorted = matches.to_vec();
    sort_matches(&mut sorted);
    Ok(serde_json::to_string_pretty(&sorted)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_report() {
        assert_eq!(render_report(&[]), "Nothing was found!");
    }

    #[test]
    fn entry_padding() {
        let entry = render_entry(&CardMatch::new("1", "a.txt"));
        assert_eq!(entry, format!("1{} | a.txt{}", " ".repeat(14), " ".repeat(17)));
    }

    #[test]
    fn report_layout() {
        let report = render_report(&[CardMatch::new("2_1", "b.txt"), CardMatch::new("1_1", "a.txt")]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "#.   card number     | card file");
        assert_eq!(lines[1], "-".repeat(54));
        assert_eq!(lines[2], "1.   1_1             | a.txt");
        assert_eq!(lines[3], "2.   2_1             | b.txt");
    }

    #[test]
    fn shorter_number_sorts_first_under_padding() {
        let report = render_report(&[CardMatch::new("10", "b.txt"), CardMatch::new("1", "a.txt")]);
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines[2], "1.   1               | a.txt");
        assert_eq!(lines[3], "2.   10              | b.txt");
    }

    #[test]
    fn ordering_uses_rendered_line_not_tuple() {
        // A tab sorts below the padding space, so the longer number comes
        // first even though the tuple order puts "1" ahead of "1\t".
        let mut matches = vec![CardMatch::new("1", "a.txt"), CardMatch::new("1\t", "b.txt")];
        sort_matches(&mut matches);
        assert_eq!(matches[0].number, "1\t");
        assert_eq!(matches[1].number, "1");
    }

    #[test]
    fn same_number_orders_by_file() {
        let mut matches = vec![CardMatch::new("7", "z.txt"), CardMatch::new("7", "m.txt")];
        sort_matches(&mut matches);
        assert_eq!(matches[0].file_name, "m.txt");
    }

    #[test]
    fn json_report_is_sorted() {
        let json = render_json(&[CardMatch::new("10", "b.txt"), CardMatch::new("1", "a.txt")]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["number"], "1");
        assert_eq!(value[1]["file_name"], "b.txt");
    }

    #[test]
    fn wide_index_keeps_a_space() {
        let matches: Vec<CardMatch> = (0..10_000)
            .map(|i| CardMatch::new(format!("{:05}", i), format!("{:05}.txt", i)))
            .collect();
        let report = render_report(&matches);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[2], "1.   00000           | 00000.txt");
        assert_eq!(lines[10_000], "9999. 09998           | 09998.txt");
        assert_eq!(lines[10_001], "10000. 09999           | 09999.txt");
    }
}
