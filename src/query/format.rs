//! Display formatting for location keys and concert dates

use chrono::NaiveDate;

/// Human-readable label for a location key.
///
/// `"seattle-washington_state-usa"` becomes `"Seattle, Washington State, Usa"`.
pub fn format_location(key: &str) -> String {
    key.split('-')
        .map(|segment| title_case(segment.replace('_', " ").trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Upper-case the first letter of every word, lower-case the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        word_start = !c.is_alphanumeric();
    }

    out
}

/// `"DD-MM-YYYY"` to `"D Month YYYY"`.
///
/// The API marks some dates with a leading `*`; it is dropped. Anything
/// that is not a valid date comes back unchanged.
pub fn format_date(date: &str) -> String {
    let trimmed = date.trim().trim_start_matches('*');
    match NaiveDate::parse_from_str(trimmed, "%d-%m-%Y") {
        Ok(parsed) => parsed.format("%-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_location() {
        assert_eq!(
            format_location("seattle-washington_state-usa"),
            "Seattle, Washington State, Usa"
        );
        assert_eq!(format_location("london-uk"), "London, Uk");
        assert_eq!(
            format_location("playa_del_carmen-mexico"),
            "Playa Del Carmen, Mexico"
        );
    }

    #[test]
    fn test_format_location_normalizes_case() {
        assert_eq!(format_location("NEW_YORK-USA"), "New York, Usa");
        assert_eq!(format_location("st.louis-usa"), "St.Louis, Usa");
    }

    #[test]
    fn test_format_location_without_separator() {
        assert_eq!(format_location("osaka"), "Osaka");
        assert_eq!(format_location(""), "");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("14-12-1973"), "14 December 1973");
        assert_eq!(format_date("05-08-1967"), "5 August 1967");
        assert_eq!(format_date("*23-08-2019"), "23 August 2019");
    }

    #[test]
    fn test_format_date_passthrough() {
        assert_eq!(format_date("unknown"), "unknown");
        assert_eq!(format_date("31-02-2020"), "31-02-2020");
        assert_eq!(format_date("12-13-2020"), "12-13-2020");
    }
}
