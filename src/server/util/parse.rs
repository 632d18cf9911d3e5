use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::server::error::AppError;

/// Parses a snake_case enum value from a query string parameter.
///
/// # Arguments
/// - `field` - Parameter name used in the error message
/// - `value` - Raw value, e.g. `"pending"`
///
/// # Returns
/// - `Ok(None)` - Value absent or empty
/// - `Ok(Some(T))` - Parsed enum variant
/// - `Err(AppError::BadRequest)` - Value does not name a variant
pub fn parse_enum_param<T: DeserializeOwned>(
    field: &str,
    value: Option<&str>,
) -> Result<Option<T>, AppError> {
    match value {
        None | Some("") => Ok(None),
        Some(raw) => serde_json::from_value(serde_json::Value::String(raw.to_string()))
            .map(Some)
            .map_err(|_| AppError::BadRequest(format!("Invalid {} '{}'", field, raw))),
    }
}

/// Parses a calendar date in `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value))
    })
}

/// Trims a search term, treating blank input as absent.
pub fn search_term(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::sea_orm_active_enums::WorkStatus;

    #[test]
    fn parses_known_enum_values() {
        let status: Option<WorkStatus> = parse_enum_param("status", Some("approved")).unwrap();
        assert_eq!(status, Some(WorkStatus::Approved));

        let empty: Option<WorkStatus> = parse_enum_param("status", Some("")).unwrap();
        assert_eq!(empty, None);
    }

    #[test]
    fn rejects_unknown_enum_values() {
        let result: Result<Option<WorkStatus>, _> = parse_enum_param("status", Some("archived"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(
            parse_date("2026-03-14").unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
        assert!(parse_date("14/03/2026").is_err());
    }

    #[test]
    fn blank_search_is_absent() {
        assert_eq!(search_term(Some("  ")), None);
        assert_eq!(search_term(Some(" poem ")), Some("poem".to_string()));
    }
}
