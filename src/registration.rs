use std::fs::File;
use std::io::{BufRead, BufReader};

/// Allow-list of course registration codes, loaded once at startup from a
/// CSV file with a single `code` column.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RegistrationCodes {
    pub codes: Vec<String>,
}

impl RegistrationCodes {
    pub fn new(file: File) -> Self {
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Self {
        let codes = reader
            .lines()
            .map(|line| line.expect("Failed to read line"))
            // The first record is the CSV header, not a code
            .skip(1)
            .map(|line| line.trim().to_string())
            .filter(|line| !line.is_empty())
            .collect();

        Self { codes }
    }

    /// Exact, case-sensitive membership check. Only surrounding whitespace
    /// on the candidate is forgiven.
    pub fn is_valid(&self, candidate: &str) -> bool {
        let candidate = candidate.trim();
        self.codes.iter().any(|code| code == candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn codes() -> RegistrationCodes {
        RegistrationCodes::from_reader(Cursor::new("code\nABC123\n  XYZ789  \nGDG024\n\n"))
    }

    #[test]
    fn known_codes_are_accepted() {
        let codes = codes();

        assert!(codes.is_valid("ABC123"));
        assert!(codes.is_valid("GDG024"));
    }

    #[test]
    fn candidate_whitespace_is_trimmed() {
        let codes = codes();

        assert!(codes.is_valid("  ABC123  "));
        assert!(codes.is_valid("XYZ789"), "stored entries are trimmed too");
    }

    #[test]
    fn unknown_codes_are_rejected() {
        let codes = codes();

        assert!(!codes.is_valid("NOPE42"));
        assert!(!codes.is_valid(""));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let codes = codes();

        assert!(!codes.is_valid("abc123"));
    }

    #[test]
    fn the_header_record_is_not_a_code() {
        let codes = codes();

        assert!(!codes.is_valid("code"));
    }

    #[test]
    fn partial_matches_do_not_count() {
        let codes = codes();

        assert!(!codes.is_valid("ABC12"));
        assert!(!codes.is_valid("ABC1234"));
    }
}
