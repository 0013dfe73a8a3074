//! Date and date-time validation.
//!
//! Input is normalized before parsing: `/` and `.` become `-`, a date alone
//! gets a midnight time, and a time without seconds gets `:00`. The layout is
//! chosen from the position of the first `-`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use serde::Deserialize;
use serde_json::Value as JsonValue;

use super::patterns::{strip, DAY_FIRST_PATTERN, YEAR_FIRST_PATTERN};
use super::Validator;
use crate::registry::{parse_optional_args, RegistryError, ValidatorFactory, ValidatorRegistry};

/// Longest input treated as a bare date.
const DATE_ONLY_MAX_LEN: usize = 10;

/// Input lengths treated as a date-time missing its seconds.
const MISSING_SECONDS_LEN: std::ops::RangeInclusive<usize> = 14..=16;

/// Position of the first `-` in a year-first layout.
const YEAR_FIRST_DASH_INDEX: usize = 4;

/// Largest accepted seconds field; 60 and 61 are leap seconds.
const MAX_SECOND: u32 = 61;

/// The two accepted field orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateLayout {
    /// `DD-MM-YYYY HH:MM:SS`
    DayFirst,
    /// `YYYY-MM-DD HH:MM:SS`
    YearFirst,
}

impl DateLayout {
    /// Pick the layout for a normalized date-time string.
    ///
    /// Returns `None` if the string has no `-` at all.
    pub fn detect(normalized: &str) -> Option<Self> {
        let dash = normalized.chars().position(|c| c == '-')?;
        if dash == YEAR_FIRST_DASH_INDEX {
            Some(DateLayout::YearFirst)
        } else {
            Some(DateLayout::DayFirst)
        }
    }

    /// chrono format string for this layout.
    pub fn format(self) -> &'static str {
        match self {
            DateLayout::DayFirst => "%d-%m-%Y %H:%M:%S",
            DateLayout::YearFirst => "%Y-%m-%d %H:%M:%S",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            DateLayout::DayFirst => &DAY_FIRST_PATTERN,
            DateLayout::YearFirst => &YEAR_FIRST_PATTERN,
        }
    }

    /// Strictly parse a normalized date-time in this layout.
    pub fn parse(self, normalized: &str) -> Option<NaiveDateTime> {
        let caps = self.pattern().captures(normalized)?;

        let year: i32 = field(&caps, "year")?;
        // Year zero has no calendar meaning here.
        if year == 0 {
            return None;
        }

        let date = NaiveDate::from_ymd_opt(year, field(&caps, "month")?, field(&caps, "day")?)?;
        let (hour, minute, second): (u32, u32, u32) = (
            field(&caps, "hour")?,
            field(&caps, "minute")?,
            field(&caps, "second")?,
        );
        let time = match second {
            0..=59 => NaiveTime::from_hms_opt(hour, minute, second)?,
            // chrono has a single leap-second slot, after second 59.
            60..=MAX_SECOND => NaiveTime::from_hms_nano_opt(hour, minute, 59, 1_000_000_000)?,
            _ => return None,
        };
        Some(NaiveDateTime::new(date, time))
    }
}

fn field<T: std::str::FromStr>(caps: &Captures<'_>, name: &str) -> Option<T> {
    caps.name(name)?.as_str().trim_start().parse().ok()
}

/// Validates dates and date-times in day-first or year-first order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateTimeValidator;

impl DateTimeValidator {
    /// Create a date-time validator.
    pub fn new() -> Self {
        Self
    }

    /// Apply separator and width normalization.
    ///
    /// Returns the string handed to [`DateLayout::parse`].
    pub fn normalize(value: &str) -> String {
        let replaced = value.replace(['/', '.'], "-").replace("  ", " ");
        let mut date = strip(&replaced).to_string();

        let len = date.chars().count();
        if len <= DATE_ONLY_MAX_LEN {
            date.push_str(" 00:00:00");
        } else if MISSING_SECONDS_LEN.contains(&len) {
            date.push_str(":00");
        }
        date
    }

    /// Parse `value`, returning the date-time it denotes if it is accepted.
    pub fn parse(&self, value: &str) -> Option<NaiveDateTime> {
        let normalized = Self::normalize(value);
        let layout = DateLayout::detect(&normalized)?;
        tracing::trace!(?layout, "Parsing date-time");
        layout.parse(&normalized)
    }
}

impl Validator for DateTimeValidator {
    fn validate(&self, value: &str) -> bool {
        self.parse(value).is_some()
    }

    fn kind(&self) -> &str {
        "date"
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct DateTimeArgs {}

/// Registry factory for [`DateTimeValidator`]. Takes no options.
pub struct DateTimeValidatorFactory;

impl ValidatorFactory for DateTimeValidatorFactory {
    fn create(
        &self,
        args: &JsonValue,
        _registry: &ValidatorRegistry,
    ) -> Result<Box<dyn Validator>, RegistryError> {
        self.validate_args(args)?;
        Ok(Box::new(DateTimeValidator::new()))
    }

    fn validate_args(&self, args: &JsonValue) -> Result<(), RegistryError> {
        parse_optional_args::<DateTimeArgs>("date", args).map(|_| ())
    }

    fn description(&self) -> &'static str {
        "Date or date-time in DD-MM-YYYY or YYYY-MM-DD order"
    }
}
