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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A tokenized sentence.
///
/// This trait is the only coupling between the [`Parser`](crate::Parser) and
/// whatever splits a raw line into its type and fields. The fields must not
/// change while a parser reads them.
pub trait Sentence {
    /// The sentence type, e.g. `GGA` or `VDM`.
    fn kind(&self) -> &str;

    /// The identifier of the sentence's source used in error messages,
    /// e.g. `GPGGA`.
    fn prefix(&self) -> &str;

    /// The fields in wire order.
    fn fields(&self) -> &[String];
}

/// An owned sentence split into its type, prefix and fields.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BaseSentence {
    pub kind: String,
    pub prefix: String,
    pub fields: Vec<String>,
}

impl BaseSentence {
    pub fn new<I, F>(kind: impl Into<String>, prefix: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            kind: kind.into(),
            prefix: prefix.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }
}

impl Sentence for BaseSentence {
    #[inline]
    fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    fn prefix(&self) -> &str {
        &self.prefix
    }

    #[inline]
    fn fields(&self) -> &[String] {
        &self.fields
    }
}
