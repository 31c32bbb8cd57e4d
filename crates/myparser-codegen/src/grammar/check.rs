// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Reference checks on a grammar.
//!
//! The generated header only specializes `RuleDef` for rules the grammar
//! defines, so a dangling reference surfaces as a C++ link error far away from
//! the grammar. These checks report such problems up front; they never stop
//! generation.

use super::{Grammar, RuleItem};
use itertools::Itertools;
use log::warn;
use std::collections::BTreeSet;

/// Rules the runtime library defines itself.
pub const BUILTIN_RULES: &[&str] = &["error"];

/// Rule matched by `space` items.
pub const SPACE_RULE: &str = "space";

/// Rule matched by `keyword` items before comparing the text.
pub const KEYWORD_RULE: &str = "keyword";

impl Grammar {
    /// Names referenced by some item but defined by no rule, in order of first use.
    pub fn undefined_references(&self) -> Vec<&str> {
        let defined: BTreeSet<&str> = self
            .rules
            .iter()
            .map(|rule| rule.name())
            .chain(BUILTIN_RULES.iter().copied())
            .collect();

        self.rules
            .iter()
            .flat_map(|rule| rule.items())
            .filter_map(|item| match item {
                RuleItem::Space => Some(SPACE_RULE),
                RuleItem::Keyword(_) => Some(KEYWORD_RULE),
                RuleItem::Ref { name, .. } => Some(name.as_str()),
                RuleItem::Error(_) => None,
            })
            .filter(|name| !defined.contains(name))
            .unique()
            .collect()
    }

    /// Names defined by more than one rule.
    pub fn duplicate_rules(&self) -> Vec<&str> {
        self.rules
            .iter()
            .map(|rule| rule.name())
            .duplicates()
            .collect()
    }
}

/// Log every reference problem in `grammar` and return how many were found.
pub fn report(grammar: &Grammar) -> usize {
    let undefined = grammar.undefined_references();
    for name in &undefined {
        warn!("rule `{name}` is referenced but never defined");
    }
    let duplicates = grammar.duplicate_rules();
    for name in &duplicates {
        warn!("rule `{name}` is defined more than once");
    }
    undefined.len() + duplicates.len()
}
