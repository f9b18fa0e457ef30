//! Collection of error and warning lines from a transcript.

/// Logger markers that make a line an error candidate.
pub const SEVERITY_MARKERS: &[&str] = &["/ERROR]", "/WARN]"];

/// Substrings of known-harmless notices that are never reported.
pub const BENIGN_PATTERNS: &[&str] = &["Ambiguity between arguments", "Unknown or incomplete command", "Caching"];

/// Excerpts keep at most this many trailing characters of a line.
pub const MAX_ERROR_LINE_CHARS: usize = 200;

/// At most this many excerpts are kept, in transcript order.
pub const MAX_ERRORS: usize = 20;

/// Scan `text` line by line for error and warning excerpts.
///
/// A line qualifies if it carries one of the [`SEVERITY_MARKERS`] and none of
/// the [`BENIGN_PATTERNS`]. Qualifying lines are trimmed and cut down to their
/// final [`MAX_ERROR_LINE_CHARS`] characters; only the first [`MAX_ERRORS`] are kept.
#[must_use]
pub fn scan_errors(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| SEVERITY_MARKERS.iter().any(|marker| line.contains(marker)))
        .filter(|line| !BENIGN_PATTERNS.iter().any(|benign| line.contains(benign)))
        .map(|line| tail_chars(line.trim(), MAX_ERROR_LINE_CHARS).to_string())
        .take(MAX_ERRORS)
        .collect()
}

/// The last `count` characters of `s`, respecting char boundaries.
fn tail_chars(s: &str, count: usize) -> &str {
    if count == 0 {
        return "";
    }

    s.char_indices().rev().nth(count - 1).map_or(s, |(start, _)| &s[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_error_and_warn_lines() {
        let text = "\
[10:00:00] [Server thread/INFO]: Starting minecraft server
[10:00:01] [Server thread/WARN]: Can't keep up! Is the server overloaded?
[10:00:02] [Worker-Main-1/ERROR]: Failed to load datapack
[10:00:03] [Server thread/INFO]: Done
";
        let errors = scan_errors(text);
        assert_eq!(
            errors,
            vec![
                "[10:00:01] [Server thread/WARN]: Can't keep up! Is the server overloaded?",
                "[10:00:02] [Worker-Main-1/ERROR]: Failed to load datapack",
            ]
        );
    }

    #[test]
    fn test_skips_benign_notices() {
        let text = "\
[10:00:00] [Server thread/WARN]: Ambiguity between arguments [teleport, location] and [teleport, destination]
[10:00:01] [Server thread/ERROR]: Unknown or incomplete command, see below for error
[10:00:02] [Worker/WARN]: Caching of registry entries failed
[10:00:03] [Server thread/ERROR]: Real problem
";
        assert_eq!(scan_errors(text), vec!["[10:00:03] [Server thread/ERROR]: Real problem"]);
    }

    #[test]
    fn test_markers_must_be_bracketed_logger_form() {
        let text = "ERROR without logger prefix\nWARN: also not a marker\n";
        assert!(scan_errors(text).is_empty());
    }

    #[test]
    fn test_trims_surrounding_whitespace() {
        let text = "   \t[x/WARN]: padded   \r\n";
        assert_eq!(scan_errors(text), vec!["[x/WARN]: padded"]);
    }

    #[test]
    fn test_truncates_to_final_characters() {
        let line = format!("[x/ERROR]: {}", "a".repeat(300));
        let errors = scan_errors(&line);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].chars().count(), MAX_ERROR_LINE_CHARS);
        assert!(errors[0].chars().all(|c| c == 'a'));
    }

    #[test]
    fn test_truncation_respects_multibyte_characters() {
        let line = format!("[x/ERROR]: {}", "é".repeat(250));
        let errors = scan_errors(&line);
        assert_eq!(errors[0].chars().count(), MAX_ERROR_LINE_CHARS);
    }

    #[test]
    fn test_caps_at_first_twenty() {
        let text: String = (0..30).map(|i| format!("[x/WARN]: warning {i}\n")).collect();
        let errors = scan_errors(&text);
        assert_eq!(errors.len(), MAX_ERRORS);
        assert_eq!(errors[0], "[x/WARN]: warning 0");
        assert_eq!(errors[19], "[x/WARN]: warning 19");
    }

    #[test]
    fn test_tail_chars_short_input() {
        assert_eq!(tail_chars("abc", 5), "abc");
        assert_eq!(tail_chars("abc", 3), "abc");
        assert_eq!(tail_chars("abc", 2), "bc");
        assert_eq!(tail_chars("abc", 0), "");
    }
}
