// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the renderer table, the description loader and the
//! module wrapper.

use crate::grammar::NodeKind;
use thiserror::Error;

pub type Result<T, E = GenError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum GenError {
    /// The identifier does not name any kind the renderer table knows.
    #[error("unrecognized node kind `{0}`")]
    UnknownKind(String),

    #[error("node kind `{kind}` cannot appear {position}")]
    Misplaced {
        kind: NodeKind,
        position: &'static str,
    },

    #[error("node kind `{kind}` is missing field `{field}`")]
    MissingField {
        kind: NodeKind,
        field: &'static str,
    },

    #[error("payload for node kind `{kind}` must be {expected}")]
    PayloadMismatch {
        kind: NodeKind,
        expected: &'static str,
    },

    #[error("in rule `{rule}`: {source}")]
    InRule {
        rule: String,
        #[source]
        source: Box<GenError>,
    },

    #[error("indent width {width} is outside {min}..={max}")]
    IndentWidth {
        width: usize,
        min: usize,
        max: usize,
    },

    #[error("malformed TOML input")]
    Toml(#[from] toml::de::Error),

    #[error("failed to print options")]
    Options(#[from] toml::ser::Error),

    #[error("failed to render module template")]
    Template(#[from] tera::Error),
}

impl GenError {
    /// Attach the name of the rule the error was found in.
    pub fn in_rule(self, rule: &str) -> GenError {
        GenError::InRule {
            rule: rule.to_string(),
            source: Box::new(self),
        }
    }
}
