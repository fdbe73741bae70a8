//! Wall-clock tools reporting in a fixed zone.

use chrono::{DateTime, TimeDelta, Utc};
use chrono_tz::Tz;

use super::{ParamType, ToolArgs, ToolDeclaration, ToolError};

pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// 12-hour clock with AM/PM and the zone abbreviation, e.g. `02:15:30 PM WIB`.
pub const TIME_FORMAT: &str = "%I:%M:%S %p %Z";

/// Roughly a century either way.
const MAX_OFFSET_HOURS: f64 = 876_600.0;

/// Clock tools bound to one zone. The time source is injectable for tests.
#[derive(Debug, Clone, Copy)]
pub struct ClockTool {
    tz: Tz,
    now: fn() -> DateTime<Utc>,
}

impl Default for ClockTool {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEZONE)
    }
}

impl ClockTool {
    pub fn new(tz: Tz) -> Self {
        Self::with_clock(tz, Utc::now)
    }

    pub fn with_clock(tz: Tz, now: fn() -> DateTime<Utc>) -> Self {
        Self { tz, now }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    pub fn now_in_zone(&self) -> DateTime<Tz> {
        (self.now)().with_timezone(&self.tz)
    }

    pub fn current_time(&self) -> String {
        format_time(&self.now_in_zone())
    }

    pub fn future_time(&self, n_hours: f64) -> Result<String, ToolError> {
        let future = offset_by_hours(self.now_in_zone(), n_hours)?;
        Ok(format_time(&future))
    }

    pub fn current_time_declaration(&self) -> ToolDeclaration {
        ToolDeclaration::new(
            "get_current_time",
            format!("Get the current real-time clock time in {} timezone.", self.tz.name()),
        )
    }

    pub fn future_time_declaration(&self) -> ToolDeclaration {
        ToolDeclaration::new(
            "get_future_time",
            format!("Calculate the clock time N hours from now in {} timezone.", self.tz.name()),
        )
        .required_param("n_hours", ParamType::Number, "Number of hours from now")
    }
}

pub fn format_time(instant: &DateTime<Tz>) -> String {
    instant.format(TIME_FORMAT).to_string()
}

/// `base` shifted by a possibly fractional, possibly negative number of
/// hours, at millisecond resolution.
pub fn offset_by_hours(base: DateTime<Tz>, n_hours: f64) -> Result<DateTime<Tz>, ToolError> {
    if !n_hours.is_finite() || n_hours.abs() > MAX_OFFSET_HOURS {
        return Err(ToolError::InvalidArguments(format!(
            "n_hours must be a finite number within ±{MAX_OFFSET_HOURS}, got {n_hours}"
        )));
    }

    let millis = (n_hours * 3_600_000.0).round() as i64;
    TimeDelta::try_milliseconds(millis)
        .and_then(|delta| base.checked_add_signed(delta))
        .ok_or_else(|| ToolError::InvalidArguments(format!("n_hours {n_hours} is out of range")))
}

/// Read `n_hours` as a number. Numeric strings are accepted.
pub(crate) fn n_hours_arg(args: &ToolArgs) -> Result<f64, ToolError> {
    let value = args
        .get("n_hours")
        .ok_or_else(|| ToolError::InvalidArguments("missing required argument `n_hours`".into()))?;

    value
        .as_f64()
        .or_else(|| value.as_str().and_then(|s| s.trim().parse::<f64>().ok()))
        .ok_or_else(|| {
            ToolError::InvalidArguments(format!("`n_hours` must be a number, got {value}"))
        })
}
