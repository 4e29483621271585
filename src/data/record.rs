//! One parsed observation row and the lenient date and score coercions

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use std::sync::Arc;

use crate::constants::columns;

/// Date-only layouts, tried in order. Chrono accepts unpadded month/day
/// and either full or abbreviated month names.
const DATE_FORMATS: [&str; 8] = [
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%d %b %Y",
];

/// Date + time layouts, the time part is discarded
const DATETIME_FORMATS: [&str; 11] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// One observation row.
///
/// Values are stored positionally against a header shared by every record of
/// the same dataset. A row shorter than the header simply has no value for the
/// trailing fields.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    header: Arc<[String]>,
    values: Vec<String>,
    /// Parsed once at construction, `None` when the date column is missing or unparseable
    observed_on: Option<NaiveDate>,
}

impl Record {
    pub fn new(header: Arc<[String]>, mut values: Vec<String>) -> Self {
        values.truncate(header.len());
        let observed_on = lookup(&header, &values, columns::DATE).and_then(parse_observation_date);
        Self {
            header,
            values,
            observed_on,
        }
    }

    /// Value of a field by header name.
    ///
    /// When a header name repeats, the last column with that name wins.
    pub fn get(&self, field: &str) -> Option<&str> {
        lookup(&self.header, &self.values, field)
    }

    pub fn plant_id(&self) -> Option<&str> {
        self.get(columns::PLANT_ID)
    }

    pub fn plant_name(&self) -> Option<&str> {
        self.get(columns::PLANT_NAME)
    }

    pub fn solar_term(&self) -> Option<&str> {
        self.get(columns::SOLAR_TERM)
    }

    pub fn observed_on(&self) -> Option<NaiveDate> {
        self.observed_on
    }

    /// Calendar year of the observation date
    pub fn year(&self) -> Option<i32> {
        self.observed_on.map(|d| d.year())
    }

    pub fn leaf_score(&self) -> f64 {
        parse_score(self.get(columns::LEAF_SCORE))
    }

    pub fn flower_score(&self) -> f64 {
        parse_score(self.get(columns::FLOWER_SCORE))
    }

    pub fn fruit_score(&self) -> f64 {
        parse_score(self.get(columns::FRUIT_SCORE))
    }
}

fn lookup<'a>(header: &[String], values: &'a [String], field: &str) -> Option<&'a str> {
    header
        .iter()
        .rposition(|h| h == field)
        .and_then(|idx| values.get(idx))
        .map(String::as_str)
}

/// Parse an observation date into a local calendar date.
///
/// Date-only strings are taken as calendar dates with no timezone shift.
/// RFC 3339 timestamps carry an offset and are converted to the local date.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    for format in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Some(date);
        }
    }

    for format in &DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt.date());
        }
    }

    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Local).date_naive())
}

/// Parse a score the lenient way: the longest numeric prefix after leading
/// whitespace is used, anything else (including an absent field) is NaN.
pub fn parse_score(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return f64::NAN;
    };
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }

    if s[i..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_start = i;
    while bytes.get(i).is_some_and(u8::is_ascii_digit) {
        i += 1;
    }
    let mut digits = i - int_start;

    if bytes.get(i) == Some(&b'.') {
        let frac_start = i + 1;
        let mut j = frac_start;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return f64::NAN;
    }

    // Exponent only counts when at least one digit follows it
    if matches!(bytes.get(i), Some(b'e') | Some(b'E')) {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while bytes.get(j).is_some_and(u8::is_ascii_digit) {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[..i].parse::<f64>().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Arc<[String]> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_get_by_header_name() {
        let h = header(&["植物編號", "植物名稱", "日期"]);
        let r = Record::new(h, vec!["P1".into(), "樟樹".into(), "2023-03-05".into()]);
        assert_eq!(r.plant_id(), Some("P1"));
        assert_eq!(r.plant_name(), Some("樟樹"));
        assert_eq!(r.observed_on(), NaiveDate::from_ymd_opt(2023, 3, 5));
        assert_eq!(r.year(), Some(2023));
        assert_eq!(r.get("missing"), None);
    }

    #[test]
    fn test_short_row_leaves_trailing_fields_absent() {
        let h = header(&["a", "b", "c"]);
        let r = Record::new(h, vec!["1".into()]);
        assert_eq!(r.get("a"), Some("1"));
        assert_eq!(r.get("b"), None);
        assert_eq!(r.get("c"), None);
    }

    #[test]
    fn test_duplicate_header_last_column_wins() {
        let h = header(&["x", "y", "x"]);
        let full = Record::new(h.clone(), vec!["first".into(), "mid".into(), "last".into()]);
        assert_eq!(full.get("x"), Some("last"));

        // Last "x" column is missing in a short row, so the field is absent
        let short = Record::new(h, vec!["first".into(), "mid".into()]);
        assert_eq!(short.get("x"), None);
    }

    #[test]
    fn test_extra_values_are_dropped() {
        let h = header(&["a"]);
        let r = Record::new(h, vec!["1".into(), "2".into()]);
        assert_eq!(r.get("a"), Some("1"));
        assert_eq!(r.values, vec!["1".to_string()]);
    }

    #[test]
    fn test_parse_observation_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2023, 3, 5);
        assert_eq!(parse_observation_date("2023-03-05"), expected);
        assert_eq!(parse_observation_date("2023/3/5"), expected);
        assert_eq!(parse_observation_date("2023.03.05"), expected);
        assert_eq!(parse_observation_date("03/05/2023"), expected);
        assert_eq!(parse_observation_date(" 2023-03-05 10:30 "), expected);
        assert_eq!(parse_observation_date("2023/03/05 08:00:00"), expected);
        assert_eq!(parse_observation_date("2023-03-05T08:00:00.000"), expected);
        assert_eq!(parse_observation_date("2023-03-05 23:59:59.5"), expected);
        assert_eq!(parse_observation_date("Mar 5, 2023"), expected);
        assert_eq!(parse_observation_date("March 05, 2023"), expected);
        assert_eq!(parse_observation_date("Mar 5 2023"), expected);
        assert_eq!(parse_observation_date("5 Mar 2023"), expected);
        assert_eq!(parse_observation_date("Marchember 5, 2023"), None);
    }

    #[test]
    fn test_parse_observation_date_rejects_garbage() {
        assert_eq!(parse_observation_date(""), None);
        assert_eq!(parse_observation_date("   "), None);
        assert_eq!(parse_observation_date("not a date"), None);
        assert_eq!(parse_observation_date("2023-13-40"), None);
    }

    #[test]
    fn test_rfc3339_resolves_to_some_date() {
        let date = parse_observation_date("2023-06-15T12:00:00+00:00");
        // Noon UTC lands on the 15th in every timezone within +-11h
        assert!(date.is_some());
        assert_eq!(date.map(|d| d.year()), Some(2023));
    }

    #[test]
    fn test_parse_score_numeric_prefix() {
        assert_eq!(parse_score(Some("3")), 3.0);
        assert_eq!(parse_score(Some("2.5")), 2.5);
        assert_eq!(parse_score(Some("  4")), 4.0);
        assert_eq!(parse_score(Some("3.5kg")), 3.5);
        assert_eq!(parse_score(Some("-1")), -1.0);
        assert_eq!(parse_score(Some(".5")), 0.5);
        assert_eq!(parse_score(Some("5.")), 5.0);
        assert_eq!(parse_score(Some("1e2")), 100.0);
        assert_eq!(parse_score(Some("1e")), 1.0);
        assert_eq!(parse_score(Some("Infinity")), f64::INFINITY);
    }

    #[test]
    fn test_parse_score_gaps() {
        assert!(parse_score(None).is_nan());
        assert!(parse_score(Some("")).is_nan());
        assert!(parse_score(Some("abc")).is_nan());
        assert!(parse_score(Some(".")).is_nan());
        assert!(parse_score(Some("-")).is_nan());
    }
}
