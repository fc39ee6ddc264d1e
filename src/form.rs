//! Birth date input: parsing and validation before any age is computed.

use chrono::NaiveDate;
use thiserror::Error;

/// Earliest year the date input accepts unless configured otherwise.
pub const DEFAULT_MIN_YEAR: i32 = 1900;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BirthDateError {
    #[error("A date of birth is required.")]
    Required,

    #[error("Invalid date '{0}': expected YYYY-MM-DD.")]
    Malformed(String),

    #[error("Date of birth cannot be in the future.")]
    InFuture,

    #[error("Date of birth cannot be before January 1st, {min_year}.")]
    TooEarly { min_year: i32 },
}

/// The range of dates the input accepts: `[min_year-01-01, today]`.
#[derive(Debug, Clone, Copy)]
pub struct DateBounds {
    pub min_year: i32,
    pub today: NaiveDate,
}

impl DateBounds {
    pub fn new(min_year: i32, today: NaiveDate) -> Self {
        Self { min_year, today }
    }

    /// Parses and validates a submitted date. Empty or missing input counts
    /// as no selection.
    pub fn validate(&self, input: Option<&str>) -> Result<NaiveDate, BirthDateError> {
        let raw = input.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(BirthDateError::Required);
        }

        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map_err(|_| BirthDateError::Malformed(raw.to_string()))?;

        self.check(date)
    }

    /// Range check for an already well-formed date.
    fn check(&self, date: NaiveDate) -> Result<NaiveDate, BirthDateError> {
        if date > self.today {
            return Err(BirthDateError::InFuture);
        }

        // An unrepresentable minimum imposes no bound.
        if let Some(min) = NaiveDate::from_ymd_opt(self.min_year, 1, 1) {
            if date < min {
                return Err(BirthDateError::TooEarly {
                    min_year: self.min_year,
                });
            }
        }

        Ok(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> DateBounds {
        DateBounds::new(DEFAULT_MIN_YEAR, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_missing_input_is_required() {
        assert_eq!(bounds().validate(None), Err(BirthDateError::Required));
        assert_eq!(bounds().validate(Some("   ")), Err(BirthDateError::Required));
    }

    #[test]
    fn test_malformed_input() {
        assert_eq!(
            bounds().validate(Some("15/06/2000")),
            Err(BirthDateError::Malformed("15/06/2000".to_string()))
        );
        // Not a real calendar date.
        assert!(matches!(
            bounds().validate(Some("2023-02-29")),
            Err(BirthDateError::Malformed(_))
        ));
    }

    #[test]
    fn test_future_date_rejected() {
        assert_eq!(
            bounds().validate(Some("2024-01-02")),
            Err(BirthDateError::InFuture)
        );
    }

    #[test]
    fn test_range_is_inclusive() {
        let b = bounds();
        assert_eq!(
            b.validate(Some("2024-01-01")),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        );
        assert_eq!(
            b.validate(Some(" 1900-01-01 ")),
            Ok(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap())
        );
        assert_eq!(
            b.validate(Some("1899-12-31")),
            Err(BirthDateError::TooEarly { min_year: 1900 })
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BirthDateError::Required.to_string(),
            "A date of birth is required."
        );
        assert_eq!(
            BirthDateError::InFuture.to_string(),
            "Date of birth cannot be in the future."
        );
        assert_eq!(
            BirthDateError::TooEarly { min_year: 1900 }.to_string(),
            "Date of birth cannot be before January 1st, 1900."
        );
    }
}
