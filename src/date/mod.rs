// Copyright (c) 2021-2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

pub mod builder;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Timelike};

use crate::error::{Result, ZipError};

use self::builder::ZipDateTimeBuilder;

// https://github.com/Majored/rs-async-zip/blob/main/SPECIFICATION.md#446
// https://learn.microsoft.com/en-us/windows/win32/api/oleauto/nf-oleauto-dosdatetimetovarianttime

/// A date and time stored as per the MS-DOS representation used by ZIP files.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash)]
pub struct ZipDateTime {
    pub(crate) date: u16,
    pub(crate) time: u16,
}

impl ZipDateTime {
    /// Returns the raw MS-DOS date field.
    pub fn raw_date(&self) -> u16 {
        self.date
    }

    /// Returns the raw MS-DOS time field.
    pub fn raw_time(&self) -> u16 {
        self.time
    }

    /// Returns the year of this date & time.
    pub fn year(&self) -> i32 {
        (((self.date & 0xFE00) >> 9) + 1980).into()
    }

    /// Returns the month of this date & time.
    pub fn month(&self) -> u32 {
        ((self.date & 0x1E0) >> 5).into()
    }

    /// Returns the day of this date & time.
    pub fn day(&self) -> u32 {
        (self.date & 0x1F).into()
    }

    /// Returns the hour of this date & time.
    pub fn hour(&self) -> u32 {
        ((self.time & 0xF800) >> 11).into()
    }

    /// Returns the minute of this date & time.
    pub fn minute(&self) -> u32 {
        ((self.time & 0x7E0) >> 5).into()
    }

    /// Returns the second of this date & time.
    ///
    /// Note that MS-DOS has a maximum granularity of two seconds.
    pub fn second(&self) -> u32 {
        ((self.time & 0x1F) << 1).into()
    }

    /// Constructs chrono's [`NaiveDateTime`] representation of this date & time.
    ///
    /// Returns `None` if the stored fields don't form a valid calendar date (eg. a zeroed default value).
    pub fn as_chrono(&self) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.year(), self.month(), self.day())?.and_hms_opt(
            self.hour(),
            self.minute(),
            self.second(),
        )
    }

    /// Constructs this date & time from the wall-clock fields of chrono's [`DateTime`].
    ///
    /// The fields are taken in the date time's own timezone, so `Local::now()` stamps local time and
    /// `Utc::now()` stamps UTC.
    pub fn from_chrono<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<Self> {
        Self::try_from(&dt.naive_local())
    }
}

impl TryFrom<&NaiveDateTime> for ZipDateTime {
    type Error = ZipError;

    fn try_from(value: &NaiveDateTime) -> Result<Self> {
        ZipDateTimeBuilder::new()
            .year(value.year())
            .month(value.month())
            .day(value.day())
            .hour(value.hour())
            .minute(value.minute())
            .second(value.second())
            .build()
    }
}

impl TryFrom<NaiveDateTime> for ZipDateTime {
    type Error = ZipError;

    fn try_from(value: NaiveDateTime) -> Result<Self> {
        (&value).try_into()
    }
}
