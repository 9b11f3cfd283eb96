use chrono::{Days, Local, NaiveDate};
use rand::Rng;
use serde::{Serialize, Serializer};
use std::fmt;
use thiserror::Error;

pub const MIN_DAYS: i64 = 1;
pub const MAX_DAYS: i64 = 7;

const HIGH_RANGE: std::ops::RangeInclusive<i32> = 15..=35;
const SPREAD_RANGE: std::ops::RangeInclusive<i32> = 3..=10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    Sunny,
    PartlyCloudy,
    Cloudy,
    Rainy,
    Stormy,
    Snowy,
    Windy,
}

impl Condition {
    pub const ALL: [Condition; 7] = [
        Condition::Sunny,
        Condition::PartlyCloudy,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Stormy,
        Condition::Snowy,
        Condition::Windy,
    ];
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Condition::Sunny => "Sunny ☀️",
            Condition::PartlyCloudy => "Partly Cloudy ⛅",
            Condition::Cloudy => "Cloudy ☁️",
            Condition::Rainy => "Rainy 🌧️",
            Condition::Stormy => "Stormy ⛈️",
            Condition::Snowy => "Snowy ❄️",
            Condition::Windy => "Windy 🌬️",
        };
        write!(f, "{}", label)
    }
}

impl Serialize for Condition {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// The Display texts double as the user-facing messages rendered by the
// form. Existing callers expect them verbatim.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ForecastError {
    #[error("❌ Please enter a valid city name.")]
    InvalidCity,
    #[error("❌ Please choose between 1 and 7 days.")]
    InvalidDayCount,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub condition: Condition,
    pub low: i32,
    pub high: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastReport {
    pub city: String,
    pub days: Vec<ForecastDay>,
}

/// Generate the forecast text for a city, starting today. Invalid input
/// comes back as the matching error message rather than an error value;
/// the form displays whatever string it gets.
pub fn generate(rng: &mut impl Rng, city: &str, days: f64) -> String {
    match report(rng, city, days, Local::now().date_naive()) {
        Ok(report) => format_report(&report),
        Err(err) => err.to_string(),
    }
}

/// Roll a fresh report with `days` entries from `today` on. The day count
/// arrives as a float from the range input and is floored before the
/// bounds check, so 7.9 still means 7 days while 0.9 is rejected.
pub fn report(
    rng: &mut impl Rng,
    city: &str,
    days: f64,
    today: NaiveDate,
) -> Result<ForecastReport, ForecastError> {
    if city.trim().is_empty() {
        return Err(ForecastError::InvalidCity);
    }
    // NaN and infinities saturate to an out-of-range integer here.
    let days = days.floor() as i64;
    if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
        return Err(ForecastError::InvalidDayCount);
    }

    let mut entries = Vec::with_capacity(days as usize);
    for i in 0..days as u64 {
        let condition = Condition::ALL[rng.random_range(0..Condition::ALL.len())];
        let high = rng.random_range(HIGH_RANGE);
        let low = high - rng.random_range(SPREAD_RANGE);
        entries.push(ForecastDay {
            date: today + Days::new(i),
            condition,
            low,
            high,
        });
    }
    Ok(ForecastReport {
        city: title_case(city),
        days: entries,
    })
}

pub fn format_report(report: &ForecastReport) -> String {
    let mut lines = vec![
        format!("### 📍 Weather Forecast for **{}**", report.city),
        String::new(),
    ];
    for day in &report.days {
        lines.push(format!(
            "**{}**: {}, {}°C – {}°C",
            day.date.format("%A %d %B %Y"),
            day.condition,
            day.low,
            day.high
        ));
    }
    lines.join("\n")
}

// Uppercase the first letter of every whitespace-separated word and
// lowercase the rest, keeping the whitespace as-is.
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.extend(c.to_lowercase());
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    fn some_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn empty_city_is_rejected() {
        assert_eq!(
            generate(&mut rng(), "", 3.0),
            "❌ Please enter a valid city name."
        );
    }

    #[test]
    fn whitespace_city_is_rejected_regardless_of_days() {
        for days in [-1.0, 0.0, 3.0, 8.0] {
            assert_eq!(
                report(&mut rng(), " \t\n", days, some_day()),
                Err(ForecastError::InvalidCity)
            );
        }
    }

    #[test]
    fn day_count_out_of_bounds_is_rejected() {
        assert_eq!(
            generate(&mut rng(), "paris", 0.0),
            "❌ Please choose between 1 and 7 days."
        );
        assert_eq!(
            generate(&mut rng(), "paris", 8.0),
            "❌ Please choose between 1 and 7 days."
        );
    }

    #[test]
    fn error_path_is_deterministic() {
        let first = generate(&mut rng(), "", 3.0);
        let second = generate(&mut rng(), "", 3.0);
        assert_eq!(first, second);
    }

    #[test]
    fn fractional_day_count_is_floored() {
        let floored = report(&mut rng(), "paris", 7.9, some_day()).unwrap();
        assert_eq!(floored.days.len(), 7);
        assert_eq!(
            report(&mut rng(), "paris", 0.9, some_day()),
            Err(ForecastError::InvalidDayCount)
        );
    }

    #[test]
    fn non_finite_day_count_is_rejected() {
        for days in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(
                report(&mut rng(), "paris", days, some_day()),
                Err(ForecastError::InvalidDayCount)
            );
        }
    }

    #[test]
    fn single_day_forecast_has_header_and_one_line() {
        let text = generate(&mut rng(), "london", 1.0);
        let lines: Vec<&str> = text.split('\n').collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "### 📍 Weather Forecast for **London**");
        assert_eq!(lines[1], "");
        assert!(lines[2].starts_with("**"));
    }

    #[test]
    fn dates_are_consecutive_from_today() {
        let today = some_day();
        let report = report(&mut rng(), "new york", 7.0, today).unwrap();
        assert_eq!(report.days.len(), 7);
        for (i, day) in report.days.iter().enumerate() {
            assert_eq!(day.date, today + Days::new(i as u64));
        }
    }

    #[test]
    fn temperatures_stay_within_bounds() {
        let mut rng = rng();
        for _ in 0..200 {
            let report = report(&mut rng, "reykjavik", 7.0, some_day()).unwrap();
            for day in report.days {
                assert!(day.low < day.high);
                assert!((15..=35).contains(&day.high));
                assert!((3..=10).contains(&(day.high - day.low)));
            }
        }
    }

    #[test]
    fn seeded_rng_gives_reproducible_reports() {
        let first = report(&mut rng(), "oslo", 5.0, some_day()).unwrap();
        let second = report(&mut rng(), "oslo", 5.0, some_day()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn city_is_title_cased() {
        assert_eq!(title_case("new york"), "New York");
        assert_eq!(title_case("LONDON"), "London");
        assert_eq!(title_case("rio de janeiro"), "Rio De Janeiro");
    }

    #[test]
    fn report_formats_to_the_wire_format() {
        let report = ForecastReport {
            city: "London".to_string(),
            days: vec![ForecastDay {
                date: some_day(),
                condition: Condition::Sunny,
                low: 12,
                high: 20,
            }],
        };
        assert_eq!(
            format_report(&report),
            "### 📍 Weather Forecast for **London**\n\n\
             **Monday 01 January 2024**: Sunny ☀️, 12°C – 20°C"
        );
    }
}
