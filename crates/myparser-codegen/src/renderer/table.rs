// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! The dispatch table: one rendering entry per node kind.
//!
//! A table is any `RuleDump` implementation. Each kind has a required method,
//! so a table that forgets a kind does not compile. The `dispatch` entry
//! points exist for callers that only hold a kind tag and an untyped payload.

use crate::error::{GenError, Result};
use crate::grammar::{NodeKind, Quantifier};

pub trait RuleDump {
    fn space(&self) -> String;
    fn keyword(&self, text: &str) -> String;
    fn reference(&self, name: &str, quantifier: Option<Quantifier>) -> String;
    fn error(&self, text: &str) -> String;
    fn line(&self, items: &[String]) -> String;
    fn list(&self, name: &str, lines: &[String]) -> String;
    fn regex(&self, name: &str, pattern: &str) -> String;

    /// Render one node given its kind and an untyped payload.
    fn dispatch(&self, kind: NodeKind, payload: Payload<'_>) -> Result<String> {
        let mismatch = |expected| GenError::PayloadMismatch { kind, expected };

        match (kind, payload) {
            (NodeKind::Space, Payload::Unit) => Ok(self.space()),
            (NodeKind::Space, _) => Err(mismatch("empty")),

            (NodeKind::Keyword, Payload::Text(text)) => Ok(self.keyword(text)),
            (NodeKind::Ref(quantifier), Payload::Text(name)) => {
                Ok(self.reference(name, quantifier))
            }
            (NodeKind::Error, Payload::Text(text)) => Ok(self.error(text)),
            (NodeKind::Keyword | NodeKind::Ref(_) | NodeKind::Error, _) => {
                Err(mismatch("a text literal"))
            }

            (NodeKind::Line, Payload::Fragments(items)) => Ok(self.line(items)),
            (NodeKind::Line, _) => Err(mismatch("a list of fragments")),

            (NodeKind::List, Payload::Named { name, fragments }) => Ok(self.list(name, fragments)),
            (NodeKind::List, _) => Err(mismatch("a rule name with a list of fragments")),

            (NodeKind::Regex, Payload::NamedText { name, text }) => Ok(self.regex(name, text)),
            (NodeKind::Regex, _) => Err(mismatch("a rule name with a pattern")),
        }
    }

    /// Same as `dispatch`, keyed by the kind identifier string.
    fn dispatch_id(&self, id: &str, payload: Payload<'_>) -> Result<String> {
        let kind: NodeKind = id.parse()?;
        self.dispatch(kind, payload)
    }
}

/// Untyped node payload for `RuleDump::dispatch`.
#[derive(Debug, Clone, Copy)]
pub enum Payload<'a> {
    Unit,
    Text(&'a str),
    Fragments(&'a [String]),
    Named {
        name: &'a str,
        fragments: &'a [String],
    },
    NamedText {
        name: &'a str,
        text: &'a str,
    },
}
