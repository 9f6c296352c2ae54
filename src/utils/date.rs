use chrono::{Datelike, NaiveDate};

const MONTHS_FR: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Long date as printed in the report header.
///
/// `fr` (default): `19 octobre 2026`; `en`: `October 19, 2026`.
pub fn long_date(date: NaiveDate, locale: &str) -> String {
    match locale.trim().to_ascii_lowercase().as_str() {
        "en" | "en-us" | "en-gb" => date.format("%B %-d, %Y").to_string(),
        _ => format!(
            "{} {} {}",
            date.day(),
            MONTHS_FR[date.month0() as usize],
            date.year()
        ),
    }
}
