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

//! Parsers for the time, date and coordinate literals of sentence fields.

mod coordinate;
mod date;
mod time;

pub use coordinate::{parse_decimal, parse_dms, parse_gps, parse_lat_long};
pub use coordinate::{DEGREES, MINUTES, SECONDS};
pub use date::{parse_date, Date};
pub use time::{parse_time, Time};
