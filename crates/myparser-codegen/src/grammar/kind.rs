// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Node kinds and reference quantifiers.
//!
//! Kind identifiers are the strings grammar descriptions use to tag nodes.
//! Quantified references are spelled as the `ref` identifier followed by the
//! quantifier suffix (`ref?`, `ref*`, `ref+`).

use crate::error::GenError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Repetition modifier of a rule reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantifier {
    /// Zero or one.
    Maybe,
    /// Zero or more.
    Any0,
    /// One or more.
    Any1,
}

impl Quantifier {
    pub const ALL: [Quantifier; 3] = [Quantifier::Maybe, Quantifier::Any0, Quantifier::Any1];

    pub fn suffix(self) -> char {
        match self {
            Quantifier::Maybe => '?',
            Quantifier::Any0 => '*',
            Quantifier::Any1 => '+',
        }
    }

    /// Name of the runtime tag type selecting the repetition bounds.
    pub fn tag(self) -> &'static str {
        match self {
            Quantifier::Maybe => "TagMaybe",
            Quantifier::Any0 => "TagAny0",
            Quantifier::Any1 => "TagAny1",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Quantifier> {
        Quantifier::ALL
            .into_iter()
            .find(|q| suffix.len() == 1 && suffix.starts_with(q.suffix()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Space,
    Keyword,
    Ref(Option<Quantifier>),
    Error,
    Line,
    List,
    Regex,
}

impl NodeKind {
    pub const ALL: [NodeKind; 10] = [
        NodeKind::Space,
        NodeKind::Keyword,
        NodeKind::Ref(None),
        NodeKind::Ref(Some(Quantifier::Maybe)),
        NodeKind::Ref(Some(Quantifier::Any0)),
        NodeKind::Ref(Some(Quantifier::Any1)),
        NodeKind::Error,
        NodeKind::Line,
        NodeKind::List,
        NodeKind::Regex,
    ];

    fn base_name(self) -> &'static str {
        match self {
            NodeKind::Space => "space",
            NodeKind::Keyword => "keyword",
            NodeKind::Ref(_) => "ref",
            NodeKind::Error => "error",
            NodeKind::Line => "line",
            NodeKind::List => "list",
            NodeKind::Regex => "regex",
        }
    }
}

impl Display for NodeKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.base_name())?;
        if let NodeKind::Ref(Some(quantifier)) = self {
            write!(f, "{}", quantifier.suffix())?;
        }
        Ok(())
    }
}

impl FromStr for NodeKind {
    type Err = GenError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        let kind = match id {
            "space" => NodeKind::Space,
            "keyword" => NodeKind::Keyword,
            "ref" => NodeKind::Ref(None),
            "error" => NodeKind::Error,
            "line" => NodeKind::Line,
            "list" => NodeKind::List,
            "regex" => NodeKind::Regex,
            _ => match id.strip_prefix("ref").and_then(Quantifier::from_suffix) {
                Some(quantifier) => NodeKind::Ref(Some(quantifier)),
                None => return Err(GenError::UnknownKind(id.to_string())),
            },
        };
        Ok(kind)
    }
}
