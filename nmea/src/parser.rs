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

use log::{debug, trace};

use crate::fields::{parse_date, parse_lat_long, parse_time, Date, Time};
use crate::{Error, ErrorKind, Sentence};

/// Typed access to the fields of a [`Sentence`].
///
/// The parser remembers the first error that occurs. Once an error is set,
/// every further read returns a zero value without touching the fields, so a
/// sentence decoder can read all fields and check [`err`](Parser::err) (or
/// call [`finish`](Parser::finish)) once at the end:
///
/// ```
/// use nmea::{BaseSentence, Parser};
///
/// let rmc = BaseSentence::new("RMC", "GPRMC", ["123519", "A", "4807.038", "N"]);
/// let mut p = Parser::new(&rmc);
/// p.assert_type("RMC");
///
/// let status = p.enum_string(1, "status", &["A", "V"]);
/// let latitude = p.lat_long(2, 3, "latitude");
/// let speed = p.float64(6, "speed"); // out of range
///
/// assert_eq!(status, "A");
/// assert_eq!(speed, 0.0);
/// assert_eq!(
///     p.err().map(ToString::to_string).as_deref(),
///     Some("nmea: GPRMC invalid speed: index out of range")
/// );
/// ```
///
/// A parser is created per sentence and dropped once its fields are read.
pub struct Parser<'a, S: ?Sized> {
    sentence: &'a S,
    err: Option<Error>,
}

impl<'a, S> Parser<'a, S>
where
    S: Sentence + ?Sized,
{
    /// Creates a parser reading the fields of the `sentence`.
    pub fn new(sentence: &'a S) -> Self {
        Self {
            sentence,
            err: None,
        }
    }

    /// Sets an error if the sentence's type is not `kind`.
    pub fn assert_type(&mut self, kind: &str) -> &mut Self {
        let sentence = self.sentence;
        if sentence.kind() != kind {
            self.fail(ErrorKind::TypeMismatch, "type", sentence.kind());
        }
        self
    }

    /// Returns the first error encountered.
    #[inline]
    pub fn err(&self) -> Option<&Error> {
        self.err.as_ref()
    }

    /// Consumes the parser and returns the first error encountered.
    #[inline]
    pub fn into_err(self) -> Option<Error> {
        self.err
    }

    /// Returns the `value` decoded from the sentence, or the first error
    /// encountered while decoding it.
    ///
    /// # Errors
    ///
    /// Returns the latched error if any read failed.
    pub fn finish<T>(self, value: T) -> Result<T, Error> {
        match self.err {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }

    /// Sets an error. Has no effect if there is already an error.
    pub fn set_err(&mut self, context: &str, value: &str) {
        self.fail(ErrorKind::Invalid, context, value);
    }

    #[inline]
    pub(crate) fn failed(&self) -> bool {
        self.err.is_some()
    }

    pub(crate) fn fail(&mut self, kind: ErrorKind, context: &str, value: impl Into<String>) {
        if let Some(first) = &self.err {
            trace!("{} ignoring {context} since {first}", self.sentence.prefix());
            return;
        }

        let err = Error::new(kind, self.sentence.prefix(), context, value);
        debug!("{err}");
        self.err = Some(err);
    }

    /// Returns the field at index `i`.
    ///
    /// An empty field is a valid value. Sets an error if `i` is out of range.
    pub fn string(&mut self, i: isize, context: &str) -> &'a str {
        if self.failed() {
            return "";
        }

        let sentence = self.sentence;
        match usize::try_from(i).ok().and_then(|i| sentence.fields().get(i)) {
            Some(field) => field.as_str(),
            None => {
                self.fail(ErrorKind::Index, context, "index out of range");
                ""
            }
        }
    }

    /// Returns all fields starting at index `from`.
    ///
    /// Sets an error if there is no field at `from`.
    pub fn list_string(&mut self, from: isize, context: &str) -> Vec<&'a str> {
        if self.failed() {
            return Vec::new();
        }

        let sentence = self.sentence;
        let fields = sentence.fields();
        match usize::try_from(from).ok().filter(|&from| from < fields.len()) {
            Some(from) => fields[from..].iter().map(String::as_str).collect(),
            None => {
                self.fail(ErrorKind::Index, context, "index out of range");
                Vec::new()
            }
        }
    }

    /// Returns the field at index `i` if it is empty or one of the `options`.
    pub fn enum_string(&mut self, i: isize, context: &str, options: &[&str]) -> &'a str {
        let s = self.string(i, context);
        if self.failed() || s.is_empty() {
            return s;
        }

        if options.iter().any(|&o| o == s) {
            s
        } else {
            self.fail(ErrorKind::Enum, context, s);
            ""
        }
    }

    /// Returns the option matching each character of the field at index `i`.
    ///
    /// Every character must match one of the single character `options`, and
    /// the same option may match more than once. An empty field returns no
    /// options. The error reports the whole field.
    pub fn enum_chars<'o>(&mut self, i: isize, context: &str, options: &[&'o str]) -> Vec<&'o str> {
        let s = self.string(i, context);
        if self.failed() || s.is_empty() {
            return Vec::new();
        }

        let matched: Option<Vec<&'o str>> = s
            .chars()
            .map(|c| {
                let mut buf = [0; 4];
                let c = &*c.encode_utf8(&mut buf);
                options.iter().copied().find(|&o| o == c)
            })
            .collect();

        match matched {
            Some(matched) => matched,
            None => {
                self.fail(ErrorKind::Enum, context, s);
                Vec::new()
            }
        }
    }

    /// Returns the field at index `i` as integer or 0 if the field is empty.
    pub fn int64(&mut self, i: isize, context: &str) -> i64 {
        let s = self.string(i, context);
        if self.failed() || s.is_empty() {
            return 0;
        }

        s.parse().unwrap_or_else(|_| {
            self.fail(ErrorKind::Format, context, s);
            0
        })
    }

    /// Returns the field at index `i` as float or 0 if the field is empty.
    pub fn float64(&mut self, i: isize, context: &str) -> f64 {
        let s = self.string(i, context);
        if self.failed() || s.is_empty() {
            return 0.0;
        }

        // an infinite value must be spelled out, not the result of an overflow
        match s.parse::<f64>() {
            Ok(v) if v.is_finite() || is_infinity(s) => v,
            _ => {
                self.fail(ErrorKind::Format, context, s);
                0.0
            }
        }
    }

    /// Returns the time at index `i`, which is invalid if the field is empty.
    pub fn time(&mut self, i: isize, context: &str) -> Time {
        let s = self.string(i, context);
        if self.failed() {
            return Time::default();
        }

        parse_time(s).unwrap_or_else(|_| {
            self.fail(ErrorKind::Format, context, s);
            Time::default()
        })
    }

    /// Returns the date at index `i`, which is invalid if the field is empty.
    pub fn date(&mut self, i: isize, context: &str) -> Date {
        let s = self.string(i, context);
        if self.failed() {
            return Date::default();
        }

        parse_date(s).unwrap_or_else(|_| {
            self.fail(ErrorKind::Format, context, s);
            Date::default()
        })
    }

    /// Returns the coordinate of the value at index `i` with its direction at
    /// index `j` as decimal.
    pub fn lat_long(&mut self, i: isize, j: isize, context: &str) -> f64 {
        let value = self.string(i, context);
        let direction = self.string(j, context);
        if self.failed() {
            return 0.0;
        }

        parse_lat_long(&format!("{value} {direction}")).unwrap_or_else(|e| {
            self.fail(ErrorKind::Format, context, e.to_string());
            0.0
        })
    }
}

/// Returns `true` if the literal is a signed or unsigned `inf` or `infinity`.
fn is_infinity(s: &str) -> bool {
    s.trim_start_matches(|c: char| c == '+' || c == '-')
        .get(..3)
        .is_some_and(|inf| inf.eq_ignore_ascii_case("inf"))
}
