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

//! The 6-bit ASCII armor of AIS payloads carried by VDM and VDO sentences.

use log::trace;

use crate::{ErrorKind, Parser, Sentence};

/// The lowest character code of the armor alphabet (`0`).
pub const ARMOR_FIRST: u8 = 48;

/// One past the highest character code of the armor alphabet (`w`).
pub const ARMOR_END: u8 = 120;

/// Returns the 6-bit value of an armored character or `None` if the `code` is
/// outside of `48..120`.
///
/// The value is `code - 48` and another 8 are subtracted if it is above 40.
/// This maps `0` to `W` onto 0 to 39 and `` ` `` to `w` onto 40 to 63,
/// skipping the codes 88 to 95 in between.
///
/// # Examples
///
/// ```
/// use nmea::armor_value;
///
/// assert_eq!(armor_value(b'0'), Some(0));
/// assert_eq!(armor_value(b'W'), Some(39));
/// assert_eq!(armor_value(b'`'), Some(40));
/// assert_eq!(armor_value(b'w'), Some(63));
/// assert_eq!(armor_value(b'x'), None);
/// ```
#[inline]
pub const fn armor_value(code: u8) -> Option<u8> {
    if code < ARMOR_FIRST || code >= ARMOR_END {
        return None;
    }

    let value = code - ARMOR_FIRST;
    if value > 40 {
        Some(value - 8)
    } else {
        Some(value)
    }
}

impl<'a, S> Parser<'a, S>
where
    S: Sentence + ?Sized,
{
    /// Decodes the 6-bit ASCII armored payload at index `i` into bits.
    ///
    /// Each character is unpacked into six bits with the most significant
    /// bit first. The last `fill_bits` of the payload are padding and are
    /// not returned, so the result has `6 * len - fill_bits` elements which
    /// are either 0 or 1.
    ///
    /// Sets an error and returns no bits if `fill_bits` is not in `0..6`,
    /// exceeds the payload or if any character is not armored.
    pub fn six_bit_ascii_armor(&mut self, i: isize, fill_bits: i32, context: &str) -> Vec<u8> {
        if self.failed() {
            return Vec::new();
        }

        if !(0..6).contains(&fill_bits) {
            self.fail(ErrorKind::Decode, context, "fill bits");
            return Vec::new();
        }

        let payload = self.string(i, "encoded payload");
        if self.failed() {
            return Vec::new();
        }

        let num_bits = match (payload.len() * 6).checked_sub(fill_bits as usize) {
            Some(n) => n,
            None => {
                self.fail(ErrorKind::Decode, context, "num bits");
                return Vec::new();
            }
        };

        let mut bits = Vec::with_capacity(num_bits);

        for &code in payload.as_bytes() {
            let value = match armor_value(code) {
                Some(value) => value,
                None => {
                    self.fail(ErrorKind::Decode, context, "data byte");
                    return Vec::new();
                }
            };

            for shift in (0..6).rev() {
                if bits.len() == num_bits {
                    break;
                }
                bits.push((value >> shift) & 1);
            }
        }

        trace!("decoded {} armored bytes into {num_bits} bits", payload.len());
        bits
    }
}
