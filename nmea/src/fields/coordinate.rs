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

use crate::LiteralError;

/// The degrees symbol of a DMS coordinate.
pub const DEGREES: char = '\u{00B0}';
/// The minutes symbol of a DMS coordinate.
pub const MINUTES: char = '\'';
/// The seconds symbol of a DMS coordinate.
pub const SECONDS: char = '"';

/// Parses a coordinate in any of the supported formats.
///
/// The formats are tried in the order [DMS](parse_dms), [GPS](parse_gps) and
/// [decimal](parse_decimal).
///
/// # Errors
///
/// Returns an error if the literal matches none of the formats.
///
/// # Examples
///
/// ```
/// use nmea::fields::parse_lat_long;
///
/// assert_eq!(parse_lat_long("4916.45 N"), Ok(49.274166666666666));
/// assert_eq!(parse_lat_long("33\u{00B0} 23' 22.5\""), Ok(33.389583333333334));
/// assert_eq!(parse_lat_long("-33.25"), Ok(-33.25));
/// ```
pub fn parse_lat_long(s: &str) -> Result<f64, LiteralError> {
    parse_dms(s)
        .or_else(|_| parse_gps(s))
        .or_else(|_| parse_decimal(s))
        .map_err(|_| LiteralError::UnknownCoordinate {
            literal: s.to_owned(),
        })
}

/// Parses a coordinate of the form `DDDMM.MMMM H` where `H` is the hemisphere
/// `N`, `S`, `E` or `W`.
///
/// # Errors
///
/// Returns an error if the number or hemisphere is malformed.
pub fn parse_gps(s: &str) -> Result<f64, LiteralError> {
    let mut parts = s.split(' ');

    let (number, direction) = match (parts.next(), parts.next(), parts.next()) {
        (Some(number), Some(direction), None) => (number, direction),
        _ => {
            return Err(LiteralError::UnknownCoordinate {
                literal: s.to_owned(),
            })
        }
    };

    let value: f64 = number.parse().map_err(|_| LiteralError::NotANumber {
        literal: number.to_owned(),
    })?;

    let deg = (value / 100.0).floor();
    let min = value - deg * 100.0;
    let decimal = deg + min / 60.0;

    match direction {
        "N" | "E" => Ok(decimal),
        "S" | "W" => Ok(-decimal),
        _ => Err(LiteralError::InvalidDirection {
            direction: direction.to_owned(),
        }),
    }
}

/// Parses a coordinate in degrees, minutes and seconds, e.g. `33° 23' 22"`.
///
/// Each number must be followed by its symbol and any part may be omitted.
/// Whitespace alone is a coordinate of 0.
///
/// # Errors
///
/// Returns an error on unknown symbols, numbers without a symbol or numbers
/// that fail to parse.
pub fn parse_dms(s: &str) -> Result<f64, LiteralError> {
    let mut deg = 0u32;
    let mut min = 0u32;
    let mut sec = 0f64;

    let mut number = String::new();
    let mut number_ended = false;

    let not_a_number = |number: &str| LiteralError::NotANumber {
        literal: number.to_owned(),
    };

    for c in s.chars() {
        match c {
            '0'..='9' | '.' => {
                if number_ended {
                    return Err(LiteralError::MissingDelimiter);
                }
                number.push(c);
            }
            c if c.is_whitespace() => {
                number_ended = !number.is_empty();
            }
            DEGREES => {
                deg = number.parse().map_err(|_| not_a_number(&number))?;
                number.clear();
                number_ended = false;
            }
            MINUTES => {
                min = number.parse().map_err(|_| not_a_number(&number))?;
                number.clear();
                number_ended = false;
            }
            SECONDS => {
                sec = number.parse().map_err(|_| not_a_number(&number))?;
                number.clear();
                number_ended = false;
            }
            symbol => return Err(LiteralError::UnknownSymbol { symbol }),
        }
    }

    if !number.is_empty() {
        return Err(LiteralError::TrailingData);
    }

    Ok(deg as f64 + min as f64 / 60.0 + sec / 3600.0)
}

/// Parses a signed decimal coordinate, e.g. `-33.2345`.
///
/// # Errors
///
/// Returns an error if the literal is not a number or has more than three
/// integer digits without being negative.
pub fn parse_decimal(s: &str) -> Result<f64, LiteralError> {
    let integer_digits = s.split('.').next().map_or(0, str::len);

    match s.parse::<f64>() {
        Ok(value) if s.starts_with('-') || integer_digits <= 3 => Ok(value),
        _ => Err(LiteralError::NotANumber {
            literal: s.to_owned(),
        }),
    }
}
