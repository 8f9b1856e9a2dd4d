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

use std::error;
use std::fmt;

/// The category of a failure latched by a [`Parser`](crate::Parser).
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum ErrorKind {
    /// A field index is outside of the sentence's fields.
    Index,
    /// A value is not one of the allowed options.
    Enum,
    /// A numeric, time, date or coordinate literal failed to parse.
    Format,
    /// The sentence's type differs from the asserted type.
    TypeMismatch,
    /// A 6-bit armored payload is malformed.
    Decode,
    /// A failure set by a sentence decoder through
    /// [`set_err`](crate::Parser::set_err).
    Invalid,
}

/// The first error encountered while reading the fields of a sentence.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Error {
    kind: ErrorKind,
    prefix: String,
    context: String,
    value: String,
}

impl Error {
    pub(crate) fn new(
        kind: ErrorKind,
        prefix: impl Into<String>,
        context: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            prefix: prefix.into(),
            context: context.into(),
            value: value.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The prefix of the sentence that failed, e.g. `GPGGA`.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The label of what was read when the error occurred.
    #[inline]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// The offending value or a description of the failure.
    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nmea: {} invalid {}: {}",
            self.prefix, self.context, self.value
        )
    }
}

impl error::Error for Error {}

/// A time, date or coordinate literal that could not be parsed.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum LiteralError {
    InvalidTime {
        literal: String,
    },
    InvalidDate {
        literal: String,
    },
    InvalidDirection {
        direction: String,
    },
    NotANumber {
        literal: String,
    },
    UnknownSymbol {
        symbol: char,
    },
    MissingDelimiter,
    TrailingData,
    UnknownCoordinate {
        literal: String,
    },
}

impl fmt::Display for LiteralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTime { literal } => {
                write!(f, "time should be in hhmmss.ss format but is \"{literal}\"")
            }
            Self::InvalidDate { literal } => {
                write!(f, "date should be in ddmmyy format but is \"{literal}\"")
            }
            Self::InvalidDirection { direction } => {
                write!(f, "direction should be N, S, E or W but is \"{direction}\"")
            }
            Self::NotANumber { literal } => {
                write!(f, "field should be a number but is \"{literal}\"")
            }
            Self::UnknownSymbol { symbol } => {
                write!(f, "unknown symbol \"{symbol}\" in coordinate")
            }
            Self::MissingDelimiter => write!(f, "coordinate has no delimiter after number"),
            Self::TrailingData => write!(f, "coordinate has trailing data"),
            Self::UnknownCoordinate { literal } => {
                write!(f, "cannot parse [{literal}], unknown format")
            }
        }
    }
}

impl error::Error for LiteralError {}
