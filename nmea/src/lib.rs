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

//! NMEA 0183 sentence field parser.
//!
//! This crate reads typed values from the fields of an already tokenized
//! [`Sentence`] and decodes the 6-bit ASCII armored AIS payloads that VDM and
//! VDO sentences carry. Splitting a raw line into fields and validating its
//! checksum happens elsewhere; anything implementing [`Sentence`] can be read.
//!
//! A [`Parser`] keeps the first error and ignores every read after it. A
//! decoder for a specific sentence therefore reads all fields and checks for
//! an error once at the end.
//!
//! # Examples
//!
//! Lets decode the position of a GGA sentence:
//!
//! ```
//! use nmea::{BaseSentence, Parser};
//!
//! # fn main() -> Result<(), nmea::Error> {
//! let gga = BaseSentence::new(
//!     "GGA",
//!     "GPGGA",
//!     [
//!         "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9", "545.4", "M",
//!         "46.9", "M", "", "",
//!     ],
//! );
//!
//! let mut p = Parser::new(&gga);
//! p.assert_type("GGA");
//!
//! let time = p.time(0, "time");
//! let lat = p.lat_long(1, 2, "latitude");
//! let lon = p.lat_long(3, 4, "longitude");
//! let satellites = p.int64(6, "number of satellites");
//! let altitude = p.float64(8, "altitude");
//!
//! // the first error, if any, is returned once all fields are read
//! p.finish(())?;
//!
//! println!("{time}: {lat:.4}, {lon:.4} at {altitude} m with {satellites} satellites");
//! #     Ok(())
//! # }
//! ```
//!
//! The bits of an AIS payload are unpacked with
//! [`six_bit_ascii_armor`](Parser::six_bit_ascii_armor):
//!
//! ```
//! use nmea::{BaseSentence, Parser};
//!
//! let vdm = BaseSentence::new(
//!     "VDM",
//!     "AIVDM",
//!     ["1", "1", "", "B", "15M67FC000G?ufbE`FepT@3n00Sa", "0"],
//! );
//!
//! let mut p = Parser::new(&vdm);
//! let fill_bits = p.int64(5, "number of fill bits") as i32;
//! let bits = p.six_bit_ascii_armor(4, fill_bits, "data");
//!
//! assert!(p.err().is_none());
//! assert_eq!(bits.len(), 168);
//! assert_eq!(&bits[..6], &[0, 0, 0, 0, 0, 1]); // message type 1
//! ```

#[macro_use]
mod macros;

mod armor;
mod error;
mod parser;
mod sentence;

pub mod fields;

pub use armor::{armor_value, ARMOR_END, ARMOR_FIRST};
pub use error::{Error, ErrorKind, LiteralError};
pub use parser::Parser;
pub use sentence::{BaseSentence, Sentence};
