use crate::errors::ValidationError;
use crate::models::parse_date;
use chrono::{Duration, NaiveDate};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DateFilter {
    #[default]
    All,
    Today,
    Last7Days,
    Last30Days,
    Custom {
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    },
}

impl DateFilter {
    pub fn from_query(query: &DateQuery) -> Result<Self, ValidationError> {
        let filter = match query.date.as_deref().map(str::trim).unwrap_or("") {
            "" | "all" => DateFilter::All,
            "today" => DateFilter::Today,
            "7days" => DateFilter::Last7Days,
            "30days" => DateFilter::Last30Days,
            "custom" => {
                let from = bound(query.from.as_deref(), "from")?;
                let to = bound(query.to.as_deref(), "to")?;
                if let (Some(from), Some(to)) = (from, to) {
                    if from > to {
                        return Err(ValidationError::new("Date range start is after its end"));
                    }
                }
                DateFilter::Custom { from, to }
            }
            other => return Err(ValidationError::new(format!("Unknown date filter: {other}"))),
        };
        Ok(filter)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            DateFilter::All => "all",
            DateFilter::Today => "today",
            DateFilter::Last7Days => "7days",
            DateFilter::Last30Days => "30days",
            DateFilter::Custom { .. } => "custom",
        }
    }

    /// Orders without a date only pass the unbounded filter.
    pub fn matches(&self, date: Option<NaiveDate>, today: NaiveDate) -> bool {
        let (from, to) = match *self {
            DateFilter::All => return true,
            DateFilter::Today => (Some(today), Some(today)),
            DateFilter::Last7Days => (Some(today - Duration::days(6)), Some(today)),
            DateFilter::Last30Days => (Some(today - Duration::days(29)), Some(today)),
            DateFilter::Custom { from, to } => (from, to),
        };
        let Some(date) = date else {
            return false;
        };
        from.is_none_or(|from| date >= from) && to.is_none_or(|to| date <= to)
    }

    /// Query string that reproduces this filter, without the leading `?`.
    pub fn to_query(&self) -> String {
        match self {
            DateFilter::All => String::new(),
            DateFilter::Custom { from, to } => {
                let mut query = String::from("date=custom");
                if let Some(from) = from {
                    query.push_str(&format!("&from={from}"));
                }
                if let Some(to) = to {
                    query.push_str(&format!("&to={to}"));
                }
                query
            }
            other => format!("date={}", other.slug()),
        }
    }
}

fn bound(raw: Option<&str>, name: &str) -> Result<Option<NaiveDate>, ValidationError> {
    match raw.map(str::trim).filter(|value| !value.is_empty()) {
        None => Ok(None),
        Some(value) => parse_date(value)
            .map(Some)
            .ok_or_else(|| ValidationError::new(format!("Invalid '{name}' date: {value}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn query(date: &str, from: Option<&str>, to: Option<&str>) -> DateQuery {
        DateQuery {
            date: Some(date.into()),
            from: from.map(Into::into),
            to: to.map(Into::into),
        }
    }

    #[test]
    fn all_includes_undated_orders() {
        assert!(DateFilter::All.matches(None, day(14)));
        assert!(!DateFilter::Today.matches(None, day(14)));
    }

    #[test]
    fn rolling_windows_include_today() {
        let today = day(14);
        assert!(DateFilter::Today.matches(Some(today), today));
        assert!(!DateFilter::Today.matches(Some(day(13)), today));
        assert!(DateFilter::Last7Days.matches(Some(day(8)), today));
        assert!(!DateFilter::Last7Days.matches(Some(day(7)), today));
        assert!(DateFilter::Last30Days.matches(Some(NaiveDate::from_ymd_opt(2026, 9, 15).unwrap()), today));
        assert!(!DateFilter::Last30Days.matches(Some(NaiveDate::from_ymd_opt(2026, 9, 14).unwrap()), today));
        assert!(!DateFilter::Last7Days.matches(Some(day(15)), today));
    }

    #[test]
    fn custom_range_is_inclusive_and_open_ended() {
        let filter = DateFilter::from_query(&query("custom", Some("2026-10-02"), None)).unwrap();
        assert!(filter.matches(Some(day(2)), day(14)));
        assert!(filter.matches(Some(day(30)), day(14)));
        assert!(!filter.matches(Some(day(1)), day(14)));
        assert_eq!(filter.to_query(), "date=custom&from=2026-10-02");
    }

    #[test]
    fn invalid_queries_are_rejected() {
        assert!(DateFilter::from_query(&query("yesterday", None, None)).is_err());
        assert!(DateFilter::from_query(&query("custom", Some("2026-10-05"), Some("2026-10-01"))).is_err());
        assert!(DateFilter::from_query(&query("custom", Some("soon"), None)).is_err());
    }

    #[test]
    fn missing_filter_means_all() {
        assert_eq!(DateFilter::from_query(&DateQuery::default()).unwrap(), DateFilter::All);
        assert_eq!(DateFilter::All.to_query(), "");
        assert_eq!(DateFilter::Last7Days.to_query(), "date=7days");
    }
}
