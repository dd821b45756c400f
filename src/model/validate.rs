//! Validation predicates for the record family.
//!
//! Pure boolean predicates, one set per entity kind, invoked only from
//! the validating constructors. Text fields require at least
//! `IDENTITY_PREFIX_LEN` characters so identity derivation can never
//! fail on a constructed record.
//!
//! Date predicates take `today` explicitly; constructors pass the
//! current UTC date, tests pass fixed dates.

use chrono::NaiveDate;

use super::record::IDENTITY_PREFIX_LEN;

/// Minimum length for name-like and title-like text fields.
pub const MIN_TEXT_LEN: usize = IDENTITY_PREFIX_LEN;

/// Minimum length for email addresses.
pub const MIN_EMAIL_LEN: usize = 5;

/// Inclusive credit range for courses.
pub const CREDITS_RANGE: (u8, u8) = (1, 10);

/// Inclusive expertise range for instructors.
pub const EXPERTISE_RANGE: (u8, u8) = (1, 50);

/// Inclusive max-points range for assignments.
pub const MAX_POINTS_RANGE: (u8, u8) = (1, 100);

/// Records dated before this are rejected.
pub fn earliest_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).expect("constant date")
}

fn has_min_chars(s: &str, min: usize) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().count() >= min
}

/// Person names: trimmed, non-empty, at least three characters.
pub fn is_valid_name(s: &str) -> bool {
    has_min_chars(s, MIN_TEXT_LEN)
}

/// Titles, descriptions, and module content share the name policy.
pub fn is_valid_text(s: &str) -> bool {
    has_min_chars(s, MIN_TEXT_LEN)
}

/// Emails: at least five characters, a non-empty local part, exactly
/// one '@', and a '.' somewhere in the domain.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().count() < MIN_EMAIL_LEN {
        return false;
    }
    let mut parts = s.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    !local.is_empty() && !domain.contains('@') && domain.contains('.')
}

pub fn is_valid_credits(credits: u8) -> bool {
    (CREDITS_RANGE.0..=CREDITS_RANGE.1).contains(&credits)
}

pub fn is_valid_expertise(expertise: u8) -> bool {
    (EXPERTISE_RANGE.0..=EXPERTISE_RANGE.1).contains(&expertise)
}

pub fn is_valid_max_points(max_points: u8) -> bool {
    (MAX_POINTS_RANGE.0..=MAX_POINTS_RANGE.1).contains(&max_points)
}

/// Enrollment dates may not be in the future and not before the epoch.
pub fn is_valid_enrollment_date(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today && date >= earliest_date()
}

/// Course start dates may be in the future but not before the epoch.
pub fn is_valid_start_date(date: NaiveDate) -> bool {
    date >= earliest_date()
}

/// Due dates may not be in the past.
pub fn is_valid_due_date(date: NaiveDate, today: NaiveDate) -> bool {
    date >= today
}
