//! Constants used throughout the HMS core crate.

/// Environment variable pinning the date used as "today" for age calculation.
pub const AGE_REFERENCE_DATE_ENV: &str = "HMS_AGE_REFERENCE_DATE";

/// Calendar date format accepted for configured dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Separator placed between name components in a display name.
pub const NAME_SEPARATOR: char = ' ';
