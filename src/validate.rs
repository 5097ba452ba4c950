//! Field validation predicates.
//!
//! Pure string checks, separated from the prompting loop so the CLI is the
//! only place that retries and the rules stay testable on their own.

use crate::codec::FIELD_DELIMITER;

/// Name must be non-empty after trimming.
pub fn valid_name(s: &str) -> bool {
    !s.trim().is_empty()
}

/// Email must contain an `@`.
pub fn valid_email(s: &str) -> bool {
    s.contains('@')
}

/// Phone must be at least 9 characters. Digits are expected but not
/// enforced, matching the record contract.
pub fn valid_phone(s: &str) -> bool {
    s.trim().chars().count() >= 9
}

/// Search terms must not be blank; a blank term is rejected rather than
/// treated as match-all.
pub fn valid_query(s: &str) -> bool {
    !s.trim().is_empty()
}

/// The line format has no escaping, so free-text values must not contain
/// the field delimiter.
pub fn safe_field(s: &str) -> bool {
    !s.contains(FIELD_DELIMITER)
}
