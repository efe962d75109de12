//! Card fixtures.

/// Render a card file from its header fields and body lines.
pub fn card(number: &str, references: &str, date: &str, card_type: &str, body: &[&str]) -> String {
    let mut lines = vec![number, references, date, card_type];
    lines.extend_from_slice(body);
    lines.join("\n") + "\n"
}

/// A small archive used across the search tests: (file name, content).
pub fn archive() -> Vec<(&'static str, String)> {
    vec![
        (
            "index.txt",
            card("0", "", "20210831", "i", &["INDEX of the archive", "", "see 1 and 2"]),
        ),
        (
            "alpha.txt",
            card("1", "0", "20210901", "n", &["Hello World", "second line"]),
        ),
        (
            "alpha_child.txt",
            card("1_1", "1/0", "20210915", "n", &["A child note about Rust"]),
        ),
        (
            "beta.txt",
            card("10", "1_1", "20220110", "q", &["Quote: hello again"]),
        ),
        (
            "gamma.txt",
            card("2", "0/1_1", "20220203", "n", &["Unrelated thoughts"]),
        ),
    ]
}
