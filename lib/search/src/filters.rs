use crate::error::FilterError;
use serde::Deserialize;
use time::macros::format_description;
use time::Date;

/// The search parameters as they arrive on the wire.
///
/// Every parameter is optional. Older clients send the literal string `null` for
/// parameters they do not want to constrain, which [`SearchFilters::try_from`] treats
/// like a missing parameter.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSearchParams {
    /// A WKT geometry the events' areas must intersect.
    pub extent: Option<String>,
    /// A comma-separated list of keywords matched against event titles.
    pub keys: Option<String>,
    /// Events must have happened strictly before this date.
    pub event_date: Option<String>,
    /// Events must have happened strictly after this date.
    pub reference_date: Option<String>,
}

/// Validated search constraints. `None` means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilters {
    /// WKT geometry used for the spatial intersection filter.
    pub extent: Option<String>,
    /// Case-insensitive regular expression matched against the title.
    pub keys: Option<String>,
    /// Exclusive upper bound of the event date.
    pub event_date: Option<Date>,
    /// Exclusive lower bound of the event date.
    pub reference_date: Option<Date>,
}

impl TryFrom<RawSearchParams> for SearchFilters {
    type Error = FilterError;

    fn try_from(params: RawSearchParams) -> Result<Self, Self::Error> {
        let event_date = normalize(params.event_date)
            .map(|value| parse_date("event_date", value))
            .transpose()?;
        let reference_date = normalize(params.reference_date)
            .map(|value| parse_date("reference_date", value))
            .transpose()?;
        Ok(Self {
            extent: normalize(params.extent),
            keys: normalize(params.keys).map(|keys| keyword_pattern(&keys)),
            event_date,
            reference_date,
        })
    }
}

/// Maps the legacy `null` sentinel and empty values to `None`.
pub fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "null")
}

/// Parses an ISO 8601 calendar date (`YYYY-MM-DD`).
pub fn parse_date(field: &'static str, value: String) -> Result<Date, FilterError> {
    Date::parse(&value, format_description!("[year]-[month]-[day]"))
        .map_err(|error| FilterError::InvalidDate {
            field,
            value,
            error,
        })
}

/// Turns a comma-separated keyword list into a regex alternation.
pub fn keyword_pattern(keys: &str) -> String {
    keys.replace(',', "|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Month;

    fn params(
        extent: Option<&str>,
        keys: Option<&str>,
        event_date: Option<&str>,
        reference_date: Option<&str>,
    ) -> RawSearchParams {
        RawSearchParams {
            extent: extent.map(ToOwned::to_owned),
            keys: keys.map(ToOwned::to_owned),
            event_date: event_date.map(ToOwned::to_owned),
            reference_date: reference_date.map(ToOwned::to_owned),
        }
    }

    #[test]
    fn null_sentinel_is_absent() {
        let filters =
            SearchFilters::try_from(params(Some("null"), Some("null"), Some("null"), Some("null")))
                .unwrap();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn empty_values_are_absent() {
        let filters = SearchFilters::try_from(params(Some(""), Some(""), Some(""), None)).unwrap();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn keys_become_alternation() {
        let filters = SearchFilters::try_from(params(None, Some("Camp,Flood"), None, None)).unwrap();
        assert_eq!(filters.keys.as_deref(), Some("Camp|Flood"));
    }

    #[test]
    fn dates_are_parsed() {
        let filters = SearchFilters::try_from(params(
            Some("POINT(1 10)"),
            None,
            Some("2017-01-01"),
            Some("2016-02-29"),
        ))
        .unwrap();
        assert_eq!(
            filters.event_date,
            Some(Date::from_calendar_date(2017, Month::January, 1).unwrap())
        );
        assert_eq!(
            filters.reference_date,
            Some(Date::from_calendar_date(2016, Month::February, 29).unwrap())
        );
        assert_eq!(filters.extent.as_deref(), Some("POINT(1 10)"));
    }

    #[test]
    fn invalid_date_is_rejected() {
        let err = SearchFilters::try_from(params(None, None, Some("2017-13-40"), None)).unwrap_err();
        let FilterError::InvalidDate { field, value, .. } = &err;
        assert_eq!(*field, "event_date");
        assert_eq!(value, "2017-13-40");
        assert!(err.to_string().contains("ISO8601"));
    }

    #[test]
    fn non_iso_reference_date_is_rejected() {
        assert!(SearchFilters::try_from(params(None, None, None, Some("01/02/2016"))).is_err());
    }

    #[test]
    fn unpadded_date_is_rejected() {
        let err = SearchFilters::try_from(params(None, None, Some("2017-1-5"), None)).unwrap_err();
        let FilterError::InvalidDate { field, .. } = &err;
        assert_eq!(*field, "event_date");
    }
}
