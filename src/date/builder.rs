// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

use crate::error::{Result, ZipError};
use crate::ZipDateTime;

/// The first year representable by the 7-bit year field.
pub const MIN_YEAR: i32 = 1980;
/// The last year representable by the 7-bit year field.
pub const MAX_YEAR: i32 = MIN_YEAR + 0x7F;

/// A builder for [`ZipDateTime`].
///
/// Setters store their value as given; every component is range checked by [`ZipDateTimeBuilder::build()`].
#[derive(Debug, Clone, Copy)]
pub struct ZipDateTimeBuilder {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
}

impl Default for ZipDateTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ZipDateTimeBuilder {
    /// Constructs a new builder starting at 1980-01-01 00:00:00, the MS-DOS epoch.
    pub fn new() -> Self {
        Self { year: MIN_YEAR, month: 1, day: 1, hour: 0, minute: 0, second: 0 }
    }

    /// Sets the date and time's year.
    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Sets the date and time's month (1-based).
    pub fn month(mut self, month: u32) -> Self {
        self.month = month;
        self
    }

    /// Sets the date and time's day (1-based).
    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Sets the date and time's hour.
    pub fn hour(mut self, hour: u32) -> Self {
        self.hour = hour;
        self
    }

    /// Sets the date and time's minute.
    pub fn minute(mut self, minute: u32) -> Self {
        self.minute = minute;
        self
    }

    /// Sets the date and time's second.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds, so odd seconds round down.
    pub fn second(mut self, second: u32) -> Self {
        self.second = second;
        self
    }

    /// Consumes this builder and returns a final [`ZipDateTime`].
    ///
    /// # Errors
    /// Returns [`ZipError::InvalidTimestamp`] if the year falls outside of 1980 to 2107, or if any other component is
    /// out of its calendar range (month 1-12, day 1-31, hour 0-23, minute 0-59, second 0-59).
    pub fn build(self) -> Result<ZipDateTime> {
        check("year", self.year.into(), MIN_YEAR.into(), MAX_YEAR.into())?;
        check("month", self.month.into(), 1, 12)?;
        check("day", self.day.into(), 1, 31)?;
        check("hour", self.hour.into(), 0, 23)?;
        check("minute", self.minute.into(), 0, 59)?;
        check("second", self.second.into(), 0, 59)?;

        let year = ((self.year - MIN_YEAR) as u16) << 9;
        let month = (self.month as u16) << 5;
        let day = self.day as u16;

        let hour = (self.hour as u16) << 11;
        let minute = (self.minute as u16) << 5;
        let second = (self.second >> 1) as u16;

        Ok(ZipDateTime { date: year | month | day, time: hour | minute | second })
    }
}

fn check(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if !(min..=max).contains(&value) {
        return Err(ZipError::InvalidTimestamp { field, value, min, max });
    }

    Ok(())
}
