//! Positional parser for card files.
//!
//! # Format
//! ```text
//! 1_111_a_2
//! 1_1/1_111_2/0
//! 20210831
//! n
//! Body text starts on the fifth line.
//!
//! Blank lines in the body are ignored.
//! ```
//!
//! The first four lines are the header. Short files are never rejected:
//! missing header lines read as empty strings.

use crate::types::CardRecord;

/// Parse the full text of a card file.
pub fn parse(content: &str) -> CardRecord {
    parse_lines(content.lines())
}

/// Parse a card from its lines, trailing newlines already stripped.
pub fn parse_lines<I, S>(lines: I) -> CardRecord
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();
    let header = Header::read(&mut lines);
    let body = join_body(lines);

    CardRecord {
        number: header.number,
        references: header.references,
        date: header.date,
        card_type: header.card_type,
        body,
    }
}

/// The four fixed header lines.
#[derive(Debug, Default)]
struct Header {
    number: String,
    references: String,
    date: String,
    card_type: String,
}

impl Header {
    fn read<I, S>(lines: &mut I) -> Self
    where
        I: Iterator<Item = S>,
        S: AsRef<str>,
    {
        let mut next = || {
            lines
                .next()
                .map(|line| line.as_ref().to_string())
                .unwrap_or_default()
        };

        // Field order is the on-disk line order.
        let number = next();
        let references = next();
        let date = next();
        let card_type = next();

        Self {
            number,
            references,
            date,
            card_type,
        }
    }
}

fn join_body<I, S>(lines: I) -> String
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    let kept: Vec<String> = lines
        .filter(|line| !line.as_ref().trim().is_empty())
        .map(|line| line.as_ref().to_string())
        .collect();
    kept.join(" ")
}
