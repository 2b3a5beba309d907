//! Best-effort scrape of the door-status page.
//!
//! The page is one specific PHP page, not a well-defined format. A single
//! hard-coded row pattern is matched against the raw HTML; anything the
//! pattern does not recognize is ignored.

use crate::model::RosterEntry;
use regex::Regex;
use std::sync::OnceLock;

/// Fixed message reported when the page contains no matching row.
pub const NOTHING_FOUND: &str = "Nothing found";

/// One table row of the status page: identifier, RFID tag, member name,
/// room flags.
const ROW_PATTERN: &str =
    r"<tr><td>(\d+)</td><td>([0-9A-Fa-f]+)</td><td>([^<]*)</td><td>([^<]*)</td>";

fn row_regex() -> &'static Regex {
    static ROW: OnceLock<Regex> = OnceLock::new();
    ROW.get_or_init(|| Regex::new(ROW_PATTERN).unwrap())
}

/// Returns the identifier of the first roster row found in the body.
pub fn first_identifier(html: &str) -> Option<&str> {
    row_regex()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// The line printed to the console and shown in the status bar: the first
/// row's identifier, or [`NOTHING_FOUND`].
pub fn diagnostic(html: &str) -> String {
    match first_identifier(html) {
        Some(id) => id.to_string(),
        None => NOTHING_FOUND.to_string(),
    }
}

/// Collects every roster row of the status page.
pub fn scan_roster(html: &str) -> Vec<RosterEntry> {
    row_regex()
        .captures_iter(html)
        .map(|caps| RosterEntry {
            id: caps[1].to_string(),
            tag: caps[2].to_string(),
            name: caps[3].trim().to_string(),
            rooms: caps[4].trim().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = concat!(
        "<html><head><title>EAA690 Door</title></head><body>",
        "<h2>Currently badged in</h2><table>",
        "<tr><td>17</td><td>04A2BC91</td><td>Joe Pilot</td><td>CH</td></tr>",
        "<tr><td>23</td><td>00f3d27a</td><td>Sam Wrench</td><td>H</td></tr>",
        "</table></body></html>"
    );

    #[test]
    fn first_identifier_reads_first_row() {
        assert_eq!(first_identifier(PAGE), Some("17"));
    }

    #[test]
    fn first_identifier_ignores_pages_without_rows() {
        assert_eq!(
            first_identifier("<html><body>No table here</body></html>"),
            None
        );
    }

    #[test]
    fn diagnostic_prints_identifier_or_fixed_message() {
        assert_eq!(diagnostic(PAGE), "17");
        assert_eq!(diagnostic("<html></html>"), NOTHING_FOUND);
    }

    #[test]
    fn scan_collects_all_rows() {
        let roster = scan_roster(PAGE);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].id, "17");
        assert_eq!(roster[0].tag, "04A2BC91");
        assert_eq!(roster[0].name, "Joe Pilot");
        assert_eq!(roster[0].rooms, "CH");
        assert_eq!(roster[1].tag, "00f3d27a");
    }

    #[test]
    fn scan_skips_rows_the_pattern_does_not_recognize() {
        let page = concat!(
            "<table>",
            "<tr><th>ID</th><th>Tag</th><th>Name</th><th>Rooms</th></tr>",
            "<tr><td>9</td><td>not-hex!</td><td>Bad Row</td><td>C</td></tr>",
            "<tr><td>5</td><td>AB</td><td>Pat Short</td><td>C</td></tr>",
            "</table>"
        );
        let roster = scan_roster(page);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "5");
        assert_eq!(roster[0].name, "Pat Short");
    }

    #[test]
    fn scan_trims_name_and_rooms_cells() {
        let page = "<tr><td>5</td><td>AB</td><td> Pat Short </td><td> C </td></tr>";
        let roster = scan_roster(page);
        assert_eq!(roster[0].name, "Pat Short");
        assert_eq!(roster[0].rooms, "C");
    }

    #[test]
    fn empty_rooms_cell_is_allowed() {
        let page = "<tr><td>8</td><td>F00D</td><td>No Rooms</td><td></td></tr>";
        let roster = scan_roster(page);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].rooms, "");
    }
}
