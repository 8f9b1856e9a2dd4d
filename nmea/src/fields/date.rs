// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::fields::Time;
use crate::LiteralError;

/// A UTC date with a two digit year.
///
/// An empty field yields a date that is not [`valid`](Date::valid).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Date {
    pub valid: bool,
    pub day: u8,
    pub month: u8,
    /// The last two digits of the year.
    pub year: u8,
}

impl Date {
    /// Returns the date in the years 2000 to 2099 or `None` if it isn't valid.
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        if !self.valid {
            return None;
        }

        NaiveDate::from_ymd_opt(
            2000 + self.year as i32,
            self.month as u32,
            self.day as u32,
        )
    }

    /// Combines this date with the `time` if both are valid.
    pub fn and_time(&self, time: Time) -> Option<NaiveDateTime> {
        Some(self.to_naive_date()?.and_time(time.to_naive_time()?))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:02}/{:02}", self.day, self.month, self.year)
    }
}

/// Parses a date of the form `ddmmyy`.
///
/// An empty string is an invalid date but no error.
///
/// # Errors
///
/// Returns an error if the literal is not six digits or the day or month is
/// out of range.
pub fn parse_date(s: &str) -> Result<Date, LiteralError> {
    if s.is_empty() {
        return Ok(Date::default());
    }

    let invalid = || LiteralError::InvalidDate {
        literal: s.to_owned(),
    };

    let b = s.as_bytes();
    if b.len() != 6 {
        return Err(invalid());
    }

    let day = parse_digits!(2, u8, &b[0..2]).ok_or_else(invalid)?;
    let month = parse_digits!(2, u8, &b[2..4]).ok_or_else(invalid)?;
    let year = parse_digits!(2, u8, &b[4..6]).ok_or_else(invalid)?;

    if !(1..=31).contains(&day) || !(1..=12).contains(&month) {
        return Err(invalid());
    }

    Ok(Date {
        valid: true,
        day,
        month,
        year,
    })
}
