//! Mapper runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the mapper. Nothing in
//! this crate reads process-wide environment variables during a conversion.

use crate::constants::{AGE_REFERENCE_DATE_ENV, DATE_FORMAT};
use crate::{MapperError, MapperResult};
use chrono::{Local, NaiveDate};

/// Mapper configuration resolved at startup.
#[derive(Clone, Debug, Default)]
pub struct MapperConfig {
    reference_date: Option<NaiveDate>,
}

impl MapperConfig {
    /// Create a new `MapperConfig`.
    ///
    /// When `reference_date` is `None`, ages are computed against the local calendar date at the
    /// time of each conversion.
    pub fn new(reference_date: Option<NaiveDate>) -> Self {
        Self { reference_date }
    }

    pub fn reference_date(&self) -> Option<NaiveDate> {
        self.reference_date
    }

    /// The date treated as "today" by derived-field calculations.
    pub fn today(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// Parse the age reference date from an optional string value.
///
/// If `value` is `None` or empty/whitespace, no reference date is configured.
///
/// # Errors
///
/// Returns [`MapperError::InvalidDate`] if the value is not a `YYYY-MM-DD` date.
pub fn reference_date_from_env_value(value: Option<String>) -> MapperResult<Option<NaiveDate>> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    value
        .map(|v| {
            NaiveDate::parse_from_str(&v, DATE_FORMAT).map_err(|source| {
                tracing::warn!("{} is not a valid date: {}", AGE_REFERENCE_DATE_ENV, v);
                MapperError::InvalidDate { value: v, source }
            })
        })
        .transpose()
}
