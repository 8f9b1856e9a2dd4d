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

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use nmea::{BaseSentence, Parser};

fn gga() -> BaseSentence {
    BaseSentence::new(
        "GGA",
        "GPGGA",
        [
            "123519", "4807.038", "N", "01131.000", "E", "1", "08", "0.9", "545.4", "M", "46.9",
            "M", "", "",
        ],
    )
}

fn vdm(payload: &str) -> BaseSentence {
    BaseSentence::new("VDM", "AIVDM", ["1", "1", "", "B", payload, "0"])
}

/// Benchmark reading all fields of a GGA sentence
fn bench_fields(c: &mut Criterion) {
    let sentence = gga();

    c.bench_function("gga", |b| {
        b.iter(|| {
            let mut p = Parser::new(black_box(&sentence));
            p.assert_type("GGA");
            let time = p.time(0, "time");
            let lat = p.lat_long(1, 2, "latitude");
            let lon = p.lat_long(3, 4, "longitude");
            let quality = p.enum_string(5, "fix quality", &["0", "1", "2"]);
            let satellites = p.int64(6, "number of satellites");
            let altitude = p.float64(8, "altitude");
            p.finish((time, lat, lon, quality, satellites, altitude))
        })
    });

    c.bench_function("first error", |b| {
        b.iter(|| {
            let mut p = Parser::new(black_box(&sentence));
            p.assert_type("RMC");
            let lat = p.lat_long(1, 2, "latitude");
            let altitude = p.float64(8, "altitude");
            p.finish((lat, altitude))
        })
    });
}

/// Benchmark unpacking the bits of AIS payloads
fn bench_armor(c: &mut Criterion) {
    let mut group = c.benchmark_group("armor");

    // a single slot position report and a long multi slot payload
    for (name, payload) in [
        ("position report", "15M67FC000G?ufbE`FepT@3n00Sa".to_owned()),
        ("long payload", "55?MbV02;H;s<HtKR20EHE:0@T4@Dn2222222216L961O5Gf0NSQEp6ClRp8".repeat(4)),
    ] {
        let sentence = vdm(&payload);
        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut p = Parser::new(black_box(&sentence));
                p.six_bit_ascii_armor(4, 0, "data")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_fields, bench_armor);
criterion_main!(benches);
