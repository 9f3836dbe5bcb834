//! Derived fields computed at conversion time.

use crate::constants::NAME_SEPARATOR;
use crate::record::Patient;
use chrono::NaiveDate;
use hms_types::NonEmptyText;

/// Builds a display name from the patient's name components.
///
/// Components are taken in the order prefix, given, middle, family, suffix. Each one is trimmed
/// and skipped when blank, and the survivors are joined by a single space.
///
/// Returns `None` when there is no patient, and an empty string when every component is blank.
pub fn build_full_name(patient: Option<&Patient>) -> Option<String> {
    let patient = patient?;

    let components = [
        &patient.prefix,
        &patient.given_name,
        &patient.middle_name,
        &patient.family_name,
        &patient.suffix,
    ];

    let mut full_name = String::new();
    for text in components
        .into_iter()
        .filter_map(|c| NonEmptyText::from_optional(c.as_deref()))
    {
        if !full_name.is_empty() {
            full_name.push(NAME_SEPARATOR);
        }
        full_name.push_str(text.as_str());
    }

    Some(full_name)
}

/// Whole years completed between `date_of_birth` and `today`.
///
/// A birthday not yet reached in `today`'s year does not count. A birth date after `today` has no
/// meaningful age and yields `None`.
pub fn calculate_age(date_of_birth: Option<NaiveDate>, today: NaiveDate) -> Option<u32> {
    let date_of_birth = date_of_birth?;

    let age = today.years_since(date_of_birth);
    if age.is_none() {
        tracing::warn!(
            "date of birth {} is after reference date {}; age left unset",
            date_of_birth,
            today
        );
    }
    age
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    fn patient_with_name(parts: [Option<&str>; 5]) -> Patient {
        let [prefix, given, middle, family, suffix] = parts.map(|p| p.map(str::to_string));
        Patient {
            prefix,
            given_name: given,
            middle_name: middle,
            family_name: family,
            suffix,
            ..Patient::new()
        }
    }

    #[test]
    fn full_name_uses_every_component_in_order() {
        let patient = patient_with_name([
            Some("Dr"),
            Some("Sarah"),
            Some("Jane"),
            Some("Williams"),
            Some("PhD"),
        ]);
        assert_eq!(
            build_full_name(Some(&patient)).as_deref(),
            Some("Dr Sarah Jane Williams PhD")
        );
    }

    #[test]
    fn full_name_trims_components() {
        let patient = patient_with_name([None, Some("  Sarah "), None, Some(" Williams  "), None]);
        assert_eq!(
            build_full_name(Some(&patient)).as_deref(),
            Some("Sarah Williams")
        );
    }

    #[test]
    fn full_name_has_no_stray_separators_for_any_combination() {
        let values = ["Mr", "John", "Paul", "Smith", "Jr"];

        for mask in 0u8..32 {
            let mut parts: [Option<&str>; 5] = [None; 5];
            for (i, value) in values.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    parts[i] = Some(*value);
                } else if i % 2 == 0 {
                    // Blank strings must behave like missing ones.
                    parts[i] = Some("   ");
                }
            }

            let expected: Vec<&str> = values
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, v)| *v)
                .collect();

            let full_name =
                build_full_name(Some(&patient_with_name(parts))).expect("patient present");

            assert_eq!(full_name, expected.join(" "), "mask {mask:05b}");
            assert!(!full_name.contains("  "), "mask {mask:05b}");
            assert_eq!(full_name, full_name.trim(), "mask {mask:05b}");
        }
    }

    #[test]
    fn full_name_is_empty_when_no_components() {
        let patient = Patient::new();
        assert_eq!(build_full_name(Some(&patient)).as_deref(), Some(""));
    }

    #[test]
    fn full_name_is_absent_without_patient() {
        assert_eq!(build_full_name(None), None);
    }

    #[test]
    fn age_counts_completed_years() {
        let today = date(2024, 6, 15);
        assert_eq!(calculate_age(Some(date(1990, 6, 15)), today), Some(34));
        assert_eq!(calculate_age(Some(date(1990, 6, 16)), today), Some(33));
        assert_eq!(calculate_age(Some(date(1990, 1, 1)), today), Some(34));
        assert_eq!(calculate_age(Some(date(1990, 12, 31)), today), Some(33));
    }

    #[test]
    fn age_is_zero_on_birth_date() {
        let today = date(2024, 6, 15);
        assert_eq!(calculate_age(Some(today), today), Some(0));
    }

    #[test]
    fn leap_day_birthday_completes_on_first_of_march() {
        let born = date(2000, 2, 29);
        assert_eq!(calculate_age(Some(born), date(2001, 2, 28)), Some(0));
        assert_eq!(calculate_age(Some(born), date(2001, 3, 1)), Some(1));
        assert_eq!(calculate_age(Some(born), date(2004, 2, 29)), Some(4));
    }

    #[test]
    fn age_is_absent_without_birth_date() {
        assert_eq!(calculate_age(None, date(2024, 6, 15)), None);
    }

    #[test]
    fn age_is_absent_for_future_birth_date() {
        assert_eq!(
            calculate_age(Some(date(2030, 1, 1)), date(2024, 6, 15)),
            None
        );
    }
}
