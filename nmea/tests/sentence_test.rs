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

use nmea::fields::{Date, Time};
use nmea::{Error, ErrorKind, Parser, Sentence};

/// A sentence split from a raw line, e.g. `$GPGGA,...*47`.
struct Line {
    prefix: String,
    fields: Vec<String>,
}

impl Line {
    fn split(raw: &str) -> Self {
        let raw = raw.trim_start_matches(|c: char| c == '$' || c == '!');
        let raw = raw.split_once('*').map_or(raw, |(data, _checksum)| data);
        let mut parts = raw.split(',');

        Self {
            prefix: parts.next().unwrap_or_default().to_owned(),
            fields: parts.map(str::to_owned).collect(),
        }
    }
}

impl Sentence for Line {
    fn kind(&self) -> &str {
        self.prefix.get(2..).unwrap_or_default()
    }

    fn prefix(&self) -> &str {
        &self.prefix
    }

    fn fields(&self) -> &[String] {
        &self.fields
    }
}

#[derive(Debug)]
struct Gga {
    time: Time,
    latitude: f64,
    longitude: f64,
    fix_quality: &'static str,
    satellites: i64,
    hdop: f64,
    altitude: f64,
}

fn gga(line: &Line) -> Result<Gga, Error> {
    let mut p = Parser::new(line);
    p.assert_type("GGA");

    let gga = Gga {
        time: p.time(0, "time"),
        latitude: p.lat_long(1, 2, "latitude"),
        longitude: p.lat_long(3, 4, "longitude"),
        fix_quality: match p.enum_string(5, "fix quality", &["0", "1", "2", "6"]) {
            "1" => "GPS",
            "2" => "DGPS",
            "6" => "estimated",
            _ => "invalid",
        },
        satellites: p.int64(6, "number of satellites"),
        hdop: p.float64(7, "hdop"),
        altitude: p.float64(8, "altitude"),
    };

    p.finish(gga)
}

#[test]
fn decodes_gga() {
    let line = Line::split(
        "$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47",
    );
    let gga = gga(&line).expect("GGA should decode");

    assert_eq!(gga.time.to_string(), "12:35:19.000");
    assert!((gga.latitude - 48.1173).abs() < 1e-9);
    assert!((gga.longitude - 11.516666666666667).abs() < 1e-9);
    assert_eq!(gga.fix_quality, "GPS");
    assert_eq!(gga.satellites, 8);
    assert_eq!(gga.hdop, 0.9);
    assert_eq!(gga.altitude, 545.4);
}

#[test]
fn reports_first_gga_error() {
    let line = Line::split("$GPGGA,123519,4807.038,N,01131.000,E,7,0x,0.9,5y5.4,M,46.9,M,,*47");
    let err = gga(&line).expect_err("fix quality should be invalid");

    assert_eq!(err.kind(), ErrorKind::Enum);
    assert_eq!(err.to_string(), "nmea: GPGGA invalid fix quality: 7");
}

#[test]
fn rejects_other_sentence_type() {
    let line = Line::split("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A");
    let err = gga(&line).expect_err("RMC is not a GGA");

    assert_eq!(err.kind(), ErrorKind::TypeMismatch);
    assert_eq!(err.to_string(), "nmea: GPRMC invalid type: RMC");
}

#[test]
fn decodes_rmc() {
    let line = Line::split("$GPRMC,123519,A,4807.038,N,01131.000,E,022.4,084.4,230394,003.1,W*6A");
    let mut p = Parser::new(&line);
    p.assert_type("RMC");

    let time = p.time(0, "time");
    let validity = p.enum_string(1, "validity", &["A", "V"]);
    let speed = p.float64(6, "speed");
    let course = p.float64(7, "course");
    let date: Date = p.date(8, "date");
    let variation = p.float64(9, "variation");
    let direction = p.enum_string(10, "variation direction", &["E", "W"]);

    assert_eq!(p.err(), None);
    assert_eq!(validity, "A");
    assert_eq!((speed, course, variation), (22.4, 84.4, 3.1));
    assert_eq!(direction, "W");

    let timestamp = date.and_time(time).expect("date and time should be valid");
    assert_eq!(timestamp.to_string(), "2094-03-23 12:35:19");
}

#[test]
fn decodes_gsa() {
    let line = Line::split("$GPGSA,A,3,04,05,,09,12,,,24,,,,,2.5,1.3,2.1*39");
    let mut p = Parser::new(&line);
    p.assert_type("GSA");

    let mode = p.enum_chars(0, "selection mode", &["A", "M"]);
    let fix = p.enum_string(1, "fix type", &["1", "2", "3"]);
    let satellites: Vec<i64> = (2..14)
        .map(|i| p.int64(i, "satellite in view"))
        .filter(|&prn| prn != 0)
        .collect();
    let dops = p.list_string(14, "dop");

    assert_eq!(p.err(), None);
    assert_eq!(mode, vec!["A"]);
    assert_eq!(fix, "3");
    assert_eq!(satellites, vec![4, 5, 9, 12, 24]);
    assert_eq!(dops, vec!["2.5", "1.3", "2.1"]);
}

#[test]
fn decodes_mode_indicators() {
    let line = Line::split("$GNGNS,014035.00,4332.69262,S,17235.48549,E,RR,13,0.9,25.63,11.24,,*70");
    let mut p = Parser::new(&line);
    p.assert_type("GNS");

    let modes = p.enum_chars(5, "mode", &["N", "A", "D", "P", "R", "F", "E", "M", "S"]);

    assert_eq!(modes, vec!["R", "R"]);
    assert_eq!(p.err(), None);
}

#[derive(Debug, PartialEq)]
struct PositionReport {
    message_type: u64,
    mmsi: u64,
}

fn uint(bits: &[u8], from: usize, n: usize) -> u64 {
    bits[from..from + n]
        .iter()
        .fold(0, |acc, &bit| (acc << 1) | bit as u64)
}

fn vdm(line: &Line) -> Result<PositionReport, Error> {
    let mut p = Parser::new(line);
    p.assert_type("VDM");

    let fill_bits = p.int64(5, "number of fill bits") as i32;
    let bits = p.six_bit_ascii_armor(4, fill_bits, "data");
    if p.err().is_none() && bits.len() < 38 {
        p.set_err("data", "message too short");
    }

    let report = match p.err() {
        Some(_) => PositionReport {
            message_type: 0,
            mmsi: 0,
        },
        None => PositionReport {
            message_type: uint(&bits, 0, 6),
            mmsi: uint(&bits, 8, 30),
        },
    };

    p.finish(report)
}

#[test]
fn decodes_vdm() {
    let line = Line::split("!AIVDM,1,1,,B,15M67FC000G?ufbE`FepT@3n00Sa,0*5C");

    assert_eq!(
        vdm(&line),
        Ok(PositionReport {
            message_type: 1,
            mmsi: 366053209,
        })
    );
}

#[test]
fn rejects_corrupt_vdm() {
    let line = Line::split("!AIVDM,1,1,,B,15M67FC000G?ufbE`FepT@3n00Sa{,0*5C");
    let err = vdm(&line).expect_err("payload should be corrupt");
    assert_eq!(err.kind(), ErrorKind::Decode);
    assert_eq!(err.to_string(), "nmea: AIVDM invalid data: data byte");

    let line = Line::split("!AIVDM,1,1,,B,15M67,0*5C");
    let err = vdm(&line).expect_err("payload should be too short");
    assert_eq!(err.kind(), ErrorKind::Invalid);
    assert_eq!(err.value(), "message too short");

    let line = Line::split("!AIVDM,1,1,,B,15M67FC000G?ufbE`FepT@3n00Sa,6*5C");
    let err = vdm(&line).expect_err("fill bits should be out of range");
    assert_eq!(err.value(), "fill bits");
}
