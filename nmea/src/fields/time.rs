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

use chrono::NaiveTime;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::LiteralError;

/// A UTC time of day.
///
/// An empty field yields a time that is not [`valid`](Time::valid).
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Time {
    pub valid: bool,
    pub hour: u8,
    pub minute: u8,
    /// The second which is 60 on a leap second.
    pub second: u8,
    pub millisecond: u16,
}

impl Time {
    /// Returns the time or `None` if it isn't valid.
    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        if !self.valid {
            return None;
        }

        let (hour, minute, second) = (self.hour as u32, self.minute as u32, self.second as u32);
        let milli = self.millisecond as u32;

        if second == 60 {
            // chrono represents a leap second as 59 with more than 1000 ms
            NaiveTime::from_hms_milli_opt(hour, minute, 59, 1000 + milli)
        } else {
            NaiveTime::from_hms_milli_opt(hour, minute, second, milli)
        }
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}.{:03}",
            self.hour, self.minute, self.second, self.millisecond
        )
    }
}

/// Parses a time of the form `hhmmss` with an optional fraction of seconds.
///
/// The fraction is rounded to milliseconds. An empty string is an invalid
/// time but no error.
///
/// # Errors
///
/// Returns an error if the literal is not in `hhmmss.ss` format or out of
/// range.
///
/// # Examples
///
/// ```
/// use nmea::fields::parse_time;
///
/// let time = parse_time("123519.25").expect("time should parse");
/// assert_eq!(time.to_string(), "12:35:19.250");
/// ```
pub fn parse_time(s: &str) -> Result<Time, LiteralError> {
    if s.is_empty() {
        return Ok(Time::default());
    }

    let invalid = || LiteralError::InvalidTime {
        literal: s.to_owned(),
    };

    let (hhmmss, fraction) = s.split_once('.').unwrap_or((s, ""));
    let b = hhmmss.as_bytes();

    if b.len() != 6 || !fraction.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(invalid());
    }

    let hour = parse_digits!(2, u8, &b[0..2]).ok_or_else(invalid)?;
    let minute = parse_digits!(2, u8, &b[2..4]).ok_or_else(invalid)?;
    let second = parse_digits!(2, u8, &b[4..6]).ok_or_else(invalid)?;

    if hour > 23 || minute > 59 || second > 60 {
        return Err(invalid());
    }

    Ok(Time {
        valid: true,
        hour,
        minute,
        second,
        millisecond: milliseconds(fraction.as_bytes()),
    })
}

/// Rounds the digits of a decimal fraction of a second to milliseconds.
fn milliseconds(digits: &[u8]) -> u16 {
    let mut padded = [b'0'; 3];
    let n = digits.len().min(3);
    padded[..n].copy_from_slice(&digits[..n]);

    let ms = parse_digits!(3, u16, &padded).unwrap_or(0);
    let round_up = digits.get(3).is_some_and(|&d| d >= b'5');

    if round_up {
        (ms + 1).min(999)
    } else {
        ms
    }
}
