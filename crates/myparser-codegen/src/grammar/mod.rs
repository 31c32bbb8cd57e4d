// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Grammar model handed to the generator.
//!
//! A grammar is an ordered list of named rules. A rule is either a list of
//! alternative lines or a single regular expression; a line is a sequence of
//! items.

pub mod check;
pub mod description;
mod kind;

pub use kind::{NodeKind, Quantifier};

use crate::renderer::RuleDump;
use log::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleItem {
    /// Whitespace, as matched by the grammar's `space` rule.
    Space,
    /// Literal token, as matched by the grammar's `keyword` rule.
    Keyword(String),
    Ref {
        name: String,
        quantifier: Option<Quantifier>,
    },
    /// Always fails with the given message.
    Error(String),
}

impl RuleItem {
    pub fn keyword(text: impl Into<String>) -> RuleItem {
        RuleItem::Keyword(text.into())
    }

    pub fn reference(name: impl Into<String>) -> RuleItem {
        RuleItem::Ref {
            name: name.into(),
            quantifier: None,
        }
    }

    pub fn quantified(name: impl Into<String>, quantifier: Quantifier) -> RuleItem {
        RuleItem::Ref {
            name: name.into(),
            quantifier: Some(quantifier),
        }
    }

    pub fn error(text: impl Into<String>) -> RuleItem {
        RuleItem::Error(text.into())
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            RuleItem::Space => NodeKind::Space,
            RuleItem::Keyword(_) => NodeKind::Keyword,
            RuleItem::Ref { quantifier, .. } => NodeKind::Ref(*quantifier),
            RuleItem::Error(_) => NodeKind::Error,
        }
    }

    pub fn dump<D: RuleDump + ?Sized>(&self, dump: &D) -> String {
        match self {
            RuleItem::Space => dump.space(),
            RuleItem::Keyword(text) => dump.keyword(text),
            RuleItem::Ref { name, quantifier } => dump.reference(name, *quantifier),
            RuleItem::Error(text) => dump.error(text),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleLine {
    pub items: Vec<RuleItem>,
}

impl RuleLine {
    pub fn new(items: Vec<RuleItem>) -> Self {
        Self { items }
    }

    pub fn dump<D: RuleDump + ?Sized>(&self, dump: &D) -> String {
        let items: Vec<String> = self.items.iter().map(|item| item.dump(dump)).collect();
        dump.line(&items)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Ordered alternatives; the first line that matches wins.
    List { name: String, lines: Vec<RuleLine> },
    Regex { name: String, pattern: String },
}

impl Rule {
    pub fn name(&self) -> &str {
        match self {
            Rule::List { name, .. } | Rule::Regex { name, .. } => name,
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Rule::List { .. } => NodeKind::List,
            Rule::Regex { .. } => NodeKind::Regex,
        }
    }

    /// All items of the rule, in order.
    pub fn items(&self) -> impl Iterator<Item = &RuleItem> {
        let lines: &[RuleLine] = match self {
            Rule::List { lines, .. } => lines,
            Rule::Regex { .. } => &[],
        };
        lines.iter().flat_map(|line| line.items.iter())
    }

    pub fn dump<D: RuleDump + ?Sized>(&self, dump: &D) -> String {
        match self {
            Rule::List { name, lines } => {
                let lines: Vec<String> = lines.iter().map(|line| line.dump(dump)).collect();
                dump.list(name, &lines)
            }
            Rule::Regex { name, pattern } => dump.regex(name, pattern),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grammar {
    pub rules: Vec<Rule>,
}

impl Grammar {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Render every rule through `dump`, children before parents, one
    /// declaration after the other. Declarations end with their own line
    /// break, so the joining newline leaves a blank line between them.
    pub fn dump<D: RuleDump + ?Sized>(&self, dump: &D) -> String {
        self.rules
            .iter()
            .map(|rule| {
                debug!("rendering {} rule `{}`", rule.kind(), rule.name());
                rule.dump(dump)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
