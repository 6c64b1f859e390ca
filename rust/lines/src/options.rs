// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Options for [`lines`](crate::lines).

use serde::{Deserialize, Serialize};

use crate::error::{LinesError, Result};

/// Options accepted by [`lines`](crate::lines).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinesOptions {
    /// Attribute fields to classify by, most significant first.
    #[serde(default)]
    pub fields: Vec<String>,
}

/// The two accepted spellings of the field list: a bare array of names, or
/// an options object with a `fields` member.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldSpec {
    List(Vec<String>),
    Options(LinesOptions),
}

impl LinesOptions {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses either `["a", "b"]` or `{"fields": ["a", "b"]}`.
    pub fn from_json(json: &str) -> Result<Self> {
        let spec: FieldSpec =
            serde_json::from_str(json).map_err(|e| LinesError::Options(e.to_string()))?;
        Ok(spec.into())
    }
}

impl From<FieldSpec> for LinesOptions {
    fn from(spec: FieldSpec) -> Self {
        match spec {
            FieldSpec::List(fields) => Self { fields },
            FieldSpec::Options(options) => options,
        }
    }
}

impl From<Vec<String>> for LinesOptions {
    fn from(fields: Vec<String>) -> Self {
        Self { fields }
    }
}

impl From<&[String]> for LinesOptions {
    fn from(fields: &[String]) -> Self {
        Self::new(fields.iter().cloned())
    }
}

impl From<&[&str]> for LinesOptions {
    fn from(fields: &[&str]) -> Self {
        Self::new(fields.iter().copied())
    }
}

impl<const N: usize> From<[&str; N]> for LinesOptions {
    fn from(fields: [&str; N]) -> Self {
        Self::new(fields)
    }
}
