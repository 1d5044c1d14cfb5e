//! Lesson date and time fields.
//!
//! # Invariants
//! - `Date` only holds calendar days strictly after the day it was validated on.
//! - Both fields order chronologically.

use crate::model::fields::FieldError;
use chrono::{Local, NaiveDate, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt::{Display, Formatter};

static DATE_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{1,2}-[0-9]{1,2}-[0-9]{4}$").expect("valid date shape regex"));
static TIME_SHAPE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}$").expect("valid time shape regex"));

const DATE_PARSE_FORMAT: &str = "%d-%m-%Y";
const DATE_INPUT_FORMAT: &str = "%-d-%-m-%Y";
const DATE_DISPLAY_FORMAT: &str = "%d %b %Y";
const TIME_FORMAT: &str = "%H:%M";

/// Calendar day of a lesson, entered as `d-M-yyyy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(NaiveDate);

impl Date {
    pub const LABEL: &'static str = "Date";
    pub const CONSTRAINTS: &'static str = "Error: Date must be in DD-MM-YYYY or D-M-YYYY format \
        (e.g., 05-10-2023 or 5-10-2023), and must be a future date (after today)";

    /// Validates `value` against the local calendar day.
    pub fn parse(value: &str) -> Result<Self, FieldError> {
        Self::parse_as_of(value, today())
    }

    /// Validates `value` against an explicit `today`.
    pub fn parse_as_of(value: &str, today: NaiveDate) -> Result<Self, FieldError> {
        parse_calendar_day(value)
            .filter(|day| *day > today)
            .map(Self)
            .ok_or(FieldError::new(Self::LABEL, Self::CONSTRAINTS))
    }

    /// Renders the date in the same `d-M-yyyy` shape it is entered in.
    pub fn to_input_string(&self) -> String {
        self.0.format(DATE_INPUT_FORMAT).to_string()
    }
}

impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(DATE_DISPLAY_FORMAT))
    }
}

/// Start time of a lesson, 24-hour `HH:mm`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(NaiveTime);

impl Time {
    pub const LABEL: &'static str = "Time";
    pub const CONSTRAINTS: &'static str =
        "Time must be in HH:mm 24-hour format (e.g., 09:30 or 14:00)";

    pub fn parse(value: &str) -> Result<Self, FieldError> {
        if !TIME_SHAPE_RE.is_match(value) {
            return Err(FieldError::new(Self::LABEL, Self::CONSTRAINTS));
        }
        NaiveTime::parse_from_str(value, TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::new(Self::LABEL, Self::CONSTRAINTS))
    }

    pub fn to_input_string(&self) -> String {
        self.0.format(TIME_FORMAT).to_string()
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TIME_FORMAT))
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_calendar_day(value: &str) -> Option<NaiveDate> {
    if !DATE_SHAPE_RE.is_match(value) {
        return None;
    }
    NaiveDate::parse_from_str(value, DATE_PARSE_FORMAT).ok()
}
