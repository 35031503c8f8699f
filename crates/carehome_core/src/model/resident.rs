//! Resident roster model and lifecycle status derivation.
//!
//! # Responsibility
//! - Define the roster record shared by resident list/detail views.
//! - Derive the admission lifecycle status from admission/discharge dates.
//!
//! # Invariants
//! - Status is derived on every read; `Resident` never stores it.
//! - Status is `None` if and only if the admission date is absent.
//! - Date comparison happens at calendar-day granularity, inclusive.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a resident.
pub type ResidentId = Uuid;

/// Display label for residents whose admission day is still ahead.
pub const RESIDENT_STATUS_PRE_ADMISSION: &str = "入所前";
/// Display label for residents currently admitted.
pub const RESIDENT_STATUS_ADMITTED: &str = "入所中";
/// Display label for residents whose discharge day has been reached.
pub const RESIDENT_STATUS_DISCHARGED: &str = "退所";

// Accepts `YYYY-M-D` with an optional `HH:MM[:SS[.fff]][Z|±HH[:]MM]` time
// part, after `/` has already been normalized to `-`.
static CALENDAR_DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(\d{4})-(\d{1,2})-(\d{1,2})",
        r"(?:[T ]\d{1,2}:\d{2}(?::\d{2}(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?$",
    ))
    .expect("valid calendar date regex")
});

/// Admission lifecycle of a resident.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidentStatus {
    /// Admission date is in the future.
    #[serde(rename = "入所前")]
    PreAdmission,
    /// Admission date reached, discharge not reached (or absent).
    #[serde(rename = "入所中")]
    Admitted,
    /// Discharge date reached.
    #[serde(rename = "退所")]
    Discharged,
}

impl ResidentStatus {
    /// Label rendered by roster badges.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PreAdmission => RESIDENT_STATUS_PRE_ADMISSION,
            Self::Admitted => RESIDENT_STATUS_ADMITTED,
            Self::Discharged => RESIDENT_STATUS_DISCHARGED,
        }
    }
}

impl Display for ResidentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster record for one resident.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resident {
    pub id: ResidentId,
    pub name: String,
    /// Room label as shown on the floor plan, e.g. `"201"`.
    #[serde(default)]
    pub room: Option<String>,
    /// Certified care level label, e.g. `"要介護3"`.
    #[serde(default)]
    pub care_level: Option<String>,
    /// Calendar date, slash or hyphen separated.
    #[serde(default)]
    pub admission_date: Option<String>,
    /// Calendar date, slash or hyphen separated.
    #[serde(default)]
    pub discharge_date: Option<String>,
}

impl Resident {
    /// Creates a resident with a generated ID and no dates.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            room: None,
            care_level: None,
            admission_date: None,
            discharge_date: None,
        }
    }

    /// Borrows the date fields relevant to status derivation.
    pub fn lifecycle_input(&self) -> ResidentLifecycleInput<'_> {
        ResidentLifecycleInput {
            admission_date: self.admission_date.as_deref(),
            discharge_date: self.discharge_date.as_deref(),
        }
    }

    /// Derives the status as of `today`.
    pub fn status_on(&self, today: NaiveDate) -> Option<ResidentStatus> {
        resolve_status(self.lifecycle_input(), today)
    }
}

/// Date inputs for status derivation.
///
/// Only `None` and the empty string count as absent. Any other text is a
/// present date, even when it does not parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResidentLifecycleInput<'a> {
    pub admission_date: Option<&'a str>,
    pub discharge_date: Option<&'a str>,
}

/// Which date field failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    Admission,
    Discharge,
}

impl DateField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admission => "admission_date",
            Self::Discharge => "discharge_date",
        }
    }
}

/// Returned by strict status derivation for an unparseable date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParseError {
    pub field: DateField,
    pub value: String,
}

impl Display for DateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} is not a calendar date: `{}`",
            self.field.as_str(),
            self.value
        )
    }
}

impl Error for DateParseError {}

/// Parses a calendar date, accepting `/` or `-` separators.
///
/// A time component after the day (`T08:30`, ` 08:30:00+09:00`) is ignored.
/// Returns `None` for malformed input, trailing text that is not a time, or
/// impossible dates such as `2024-02-30`.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let normalized = value.trim().replace('/', "-");
    let captures = CALENDAR_DATE_RE.captures(&normalized)?;
    let year = captures[1].parse::<i32>().ok()?;
    let month = captures[2].parse::<u32>().ok()?;
    let day = captures[3].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Derives the lifecycle status of a resident as of `today`.
///
/// # Contract
/// - Absent admission date -> `None`, whatever the other inputs are.
/// - Discharge reached (`today >= discharge`) wins over admission.
/// - Otherwise `today >= admission` -> `Admitted`, else `PreAdmission`.
/// - An unparseable date never counts as reached, so a malformed admission
///   date yields `PreAdmission` and a malformed discharge date is ignored.
pub fn resolve_status(
    input: ResidentLifecycleInput<'_>,
    today: NaiveDate,
) -> Option<ResidentStatus> {
    let admission = present(input.admission_date)?;
    let reached = |value: &str| parse_calendar_date(value).is_some_and(|date| today >= date);

    let discharge_reached = present(input.discharge_date).is_some_and(|value| reached(value));
    Some(classify(discharge_reached, reached(admission)))
}

/// Strict variant of [`resolve_status`] that rejects malformed dates.
///
/// # Errors
/// - Returns `DateParseError` when a present date cannot be parsed.
pub fn try_resolve_status(
    input: ResidentLifecycleInput<'_>,
    today: NaiveDate,
) -> Result<Option<ResidentStatus>, DateParseError> {
    let Some(admission) = present(input.admission_date) else {
        return Ok(None);
    };
    let admission = parse_field(DateField::Admission, admission)?;
    let discharge = present(input.discharge_date)
        .map(|value| parse_field(DateField::Discharge, value))
        .transpose()?;

    let discharge_reached = discharge.is_some_and(|date| today >= date);
    Ok(Some(classify(discharge_reached, today >= admission)))
}

fn classify(discharge_reached: bool, admission_reached: bool) -> ResidentStatus {
    if discharge_reached {
        ResidentStatus::Discharged
    } else if admission_reached {
        ResidentStatus::Admitted
    } else {
        ResidentStatus::PreAdmission
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

fn parse_field(field: DateField, value: &str) -> Result<NaiveDate, DateParseError> {
    parse_calendar_date(value).ok_or_else(|| DateParseError {
        field,
        value: value.to_string(),
    })
}
