//! Locale, clock and date normalization applied to every sar line.
//!
//! All functions here are pure: the same input always yields the same output.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

use crate::error::{SarError, SarResult};

static RE_DATE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)([-/])([0-9]+)[-/]([0-9]+)$").unwrap());

/// Rewrite decimal commas (`12,5`) to dots.
///
/// Only a comma with an ASCII digit on both sides is touched; list
/// separators and trailing commas survive.
pub fn decimal_commas(line: &str) -> Cow<'_, str> {
    if !line.contains(',') {
        return Cow::Borrowed(line);
    }
    let chars: Vec<char> = line.chars().collect();
    let out: String = chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            let between_digits = c == ','
                && i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).is_some_and(char::is_ascii_digit);
            if between_digits { '.' } else { c }
        })
        .collect();
    Cow::Owned(out)
}

/// Convert a 12-hour row (`02:15:00 PM ...`) to 24-hour time in place.
///
/// Files concatenated from AM/PM and 24-hour locales mix both forms, so the
/// meridiem token is always dropped to keep column positions aligned.
pub fn meridiem(tokens: &mut Vec<String>) {
    let Some(marker) = tokens.get(1).map(String::as_str) else {
        return;
    };
    let pm = match marker {
        "PM" => true,
        "AM" => false,
        _ => return,
    };

    if let Some((hour, rest)) = tokens[0].split_once(':') {
        let hour = match (pm, hour) {
            (true, "12") => hour.to_string(),
            // Out-of-range hours are left as-is and fail later as a bad time.
            (true, h) => match h.parse::<u8>() {
                Ok(n) if n < 12 => (n + 12).to_string(),
                _ => h.to_string(),
            },
            (false, "12") => "00".to_string(),
            (false, h) => h.to_string(),
        };
        tokens[0] = format!("{hour}:{rest}");
    }
    tokens.remove(1);
}

/// Tokenize a raw sar line after the decimal-comma and clock fix-ups.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens: Vec<String> = decimal_commas(line)
        .split_whitespace()
        .map(String::from)
        .collect();
    meridiem(&mut tokens);
    tokens
}

/// Normalize a header date token to `yy-mm-dd`.
///
/// Accepted layouts: `yyyy-mm-dd`, `mm/dd/yy` and `mm/dd/yyyy`.
pub fn date(token: &str) -> SarResult<String> {
    let caps = RE_DATE_TOKEN
        .captures(token)
        .ok_or_else(|| SarError::MalformedHeader(format!("unrecognized date: {token}")))?;
    let (first, sep, second, third) = (&caps[1], &caps[2], &caps[3], &caps[4]);

    match (sep, third.len()) {
        ("-", _) => Ok(format!("{}-{second}-{third}", last_two(first))),
        ("/", 2) => Ok(format!("{third}-{first}-{second}")),
        ("/", 4) => Ok(format!("{}-{first}-{second}", last_two(third))),
        _ => Err(SarError::MalformedHeader(format!(
            "unknown date layout: {token}"
        ))),
    }
}

fn last_two(year: &str) -> &str {
    &year[year.len().saturating_sub(2)..]
}

/// Combine a `yy-mm-dd` day with a row's `HH:MM:SS` time of day.
pub fn timestamp(date: &str, time: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(&format!("{date} {time}"), "%y-%m-%d %H:%M:%S").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn comma_between_digits_becomes_dot() {
        assert_eq!(decimal_commas("all 12,5 0,00"), "all 12.5 0.00");
    }

    #[test]
    fn trailing_and_list_commas_untouched() {
        assert_eq!(decimal_commas("a, b 12, x,1"), "a, b 12, x,1");
        assert!(matches!(decimal_commas("no commas"), Cow::Borrowed(_)));
    }

    #[test]
    fn pm_adds_twelve_hours() {
        let mut row = tokens("02:15:00 PM all 1.0");
        meridiem(&mut row);
        assert_eq!(row, tokens("14:15:00 all 1.0"));
    }

    #[test]
    fn twelve_am_becomes_midnight() {
        let mut row = tokens("12:05:00 AM all");
        meridiem(&mut row);
        assert_eq!(row, tokens("00:05:00 all"));
    }

    #[test]
    fn twelve_pm_unchanged() {
        let mut row = tokens("12:05:00 PM all");
        meridiem(&mut row);
        assert_eq!(row, tokens("12:05:00 all"));
    }

    #[test]
    fn morning_hour_kept() {
        let mut row = tokens("09:30:01 AM CPU %user");
        meridiem(&mut row);
        assert_eq!(row, tokens("09:30:01 CPU %user"));
    }

    #[test]
    fn out_of_range_pm_hour_left_unchanged() {
        let row = tokenize("4294967295:00:00 PM all 1.0");
        assert_eq!(row, tokens("4294967295:00:00 all 1.0"));
        assert!(timestamp("21-03-04", &row[0]).is_none());

        let row = tokenize("13:00:00 PM all 1.0");
        assert_eq!(row, tokens("13:00:00 all 1.0"));
    }

    #[test]
    fn twenty_four_hour_rows_pass_through() {
        let mut row = tokens("14:15:00 all 1.0");
        meridiem(&mut row);
        assert_eq!(row, tokens("14:15:00 all 1.0"));
    }

    #[test]
    fn tokenize_applies_both_fixups() {
        assert_eq!(
            tokenize("02:15:00 PM     all      2,15      0,00\n"),
            tokens("14:15:00 all 2.15 0.00")
        );
    }

    #[test]
    fn date_layouts() {
        assert_eq!(date("2021-03-04").unwrap(), "21-03-04");
        assert_eq!(date("03/04/21").unwrap(), "21-03-04");
        assert_eq!(date("03/04/2021").unwrap(), "21-03-04");
    }

    #[test]
    fn date_rejects_other_layouts() {
        assert!(matches!(date("04.03.2021"), Err(SarError::MalformedHeader(_))));
        assert!(matches!(date("03/04/021"), Err(SarError::MalformedHeader(_))));
        assert!(matches!(date("yesterday"), Err(SarError::MalformedHeader(_))));
    }

    #[test]
    fn date_rejects_non_ascii_digits() {
        assert!(matches!(date("२०२१-03-05"), Err(SarError::MalformedHeader(_))));
        assert!(matches!(date("03/05/٢٠٢١"), Err(SarError::MalformedHeader(_))));
    }

    #[test]
    fn timestamp_combines_day_and_time() {
        let ts = timestamp("21-03-04", "14:15:00").unwrap();
        assert_eq!(ts.to_string(), "2021-03-04 14:15:00");
        assert!(timestamp("21-03-04", "Average:").is_none());
    }
}
