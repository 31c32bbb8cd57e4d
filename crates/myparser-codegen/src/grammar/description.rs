// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Grammar descriptions: the serialized form of a grammar tree.
//!
//! Nodes are tagged with their kind identifier string (`"ref*"`, `"regex"`,
//! ...). Identifiers are resolved to `NodeKind` while converting into the
//! typed model, so an unknown kind is reported before anything is rendered.

use super::{Grammar, NodeKind, Rule, RuleItem, RuleLine};
use crate::error::{GenError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GrammarDescription {
    #[serde(default)]
    pub rules: Vec<RuleDescription>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct RuleDescription {
    pub name: String,
    pub kind: String,
    /// Alternatives of a `list` rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lines: Option<Vec<Vec<ItemDescription>>>,
    /// Pattern of a `regex` rule.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ItemDescription {
    pub kind: String,
    /// Literal of a `keyword` or `error` item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Referenced rule of a `ref` item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl ItemDescription {
    pub fn to_item(&self) -> Result<RuleItem> {
        let kind: NodeKind = self.kind.parse()?;
        let required = |value: &Option<String>, field| {
            value
                .clone()
                .ok_or(GenError::MissingField { kind, field })
        };

        let item = match kind {
            NodeKind::Space => RuleItem::Space,
            NodeKind::Keyword => RuleItem::Keyword(required(&self.text, "text")?),
            NodeKind::Error => RuleItem::Error(required(&self.text, "text")?),
            NodeKind::Ref(quantifier) => RuleItem::Ref {
                name: required(&self.name, "name")?,
                quantifier,
            },
            NodeKind::Line | NodeKind::List | NodeKind::Regex => {
                return Err(GenError::Misplaced {
                    kind,
                    position: "inside a line",
                })
            }
        };
        Ok(item)
    }
}

impl RuleDescription {
    pub fn to_rule(&self) -> Result<Rule> {
        self.convert().map_err(|err| err.in_rule(&self.name))
    }

    fn convert(&self) -> Result<Rule> {
        let kind: NodeKind = self.kind.parse()?;
        match kind {
            NodeKind::List => {
                let lines = self.lines.as_ref().ok_or(GenError::MissingField {
                    kind,
                    field: "lines",
                })?;
                let lines = lines
                    .iter()
                    .map(|items| {
                        items
                            .iter()
                            .map(ItemDescription::to_item)
                            .collect::<Result<Vec<_>>>()
                            .map(RuleLine::new)
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Rule::List {
                    name: self.name.clone(),
                    lines,
                })
            }
            NodeKind::Regex => {
                let pattern = self.pattern.clone().ok_or(GenError::MissingField {
                    kind,
                    field: "pattern",
                })?;
                Ok(Rule::Regex {
                    name: self.name.clone(),
                    pattern,
                })
            }
            _ => Err(GenError::Misplaced {
                kind,
                position: "as a rule",
            }),
        }
    }
}

impl TryFrom<&GrammarDescription> for Grammar {
    type Error = GenError;

    fn try_from(description: &GrammarDescription) -> Result<Self> {
        let rules = description
            .rules
            .iter()
            .map(RuleDescription::to_rule)
            .collect::<Result<Vec<_>>>()?;
        Ok(Grammar::new(rules))
    }
}

impl Grammar {
    /// Parse a TOML grammar description.
    pub fn from_toml(source: &str) -> Result<Grammar> {
        let description: GrammarDescription = toml::from_str(source)?;
        Grammar::try_from(&description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Quantifier;

    #[test]
    fn test_loads_every_kind() {
        let grammar = Grammar::from_toml(
            r#"
            [[rules]]
            name = "Stmt"
            kind = "list"
            lines = [
                [
                    { kind = "keyword", text = "if" },
                    { kind = "space" },
                    { kind = "ref", name = "Cond" },
                    { kind = "ref?", name = "Else" },
                    { kind = "ref*", name = "Attr" },
                    { kind = "ref+", name = "Body" },
                ],
                [{ kind = "error", text = "expected statement" }],
                [],
            ]

            [[rules]]
            name = "Id"
            kind = "regex"
            pattern = "[a-z]+"
            "#,
        )
        .unwrap();

        let expected = Grammar::new(vec![
            Rule::List {
                name: "Stmt".to_string(),
                lines: vec![
                    RuleLine::new(vec![
                        RuleItem::keyword("if"),
                        RuleItem::Space,
                        RuleItem::reference("Cond"),
                        RuleItem::quantified("Else", Quantifier::Maybe),
                        RuleItem::quantified("Attr", Quantifier::Any0),
                        RuleItem::quantified("Body", Quantifier::Any1),
                    ]),
                    RuleLine::new(vec![RuleItem::error("expected statement")]),
                    RuleLine::default(),
                ],
            },
            Rule::Regex {
                name: "Id".to_string(),
                pattern: "[a-z]+".to_string(),
            },
        ]);
        assert_eq!(grammar, expected);
    }

    #[test]
    fn test_unknown_item_kind_names_rule_and_kind() {
        let err = Grammar::from_toml(
            r#"
            [[rules]]
            name = "Expr"
            kind = "list"
            lines = [[{ kind = "ref!", name = "Term" }]]
            "#,
        )
        .unwrap_err();

        match &err {
            GenError::InRule { rule, source } => {
                assert_eq!(rule, "Expr");
                assert!(matches!(**source, GenError::UnknownKind(ref id) if id == "ref!"));
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "in rule `Expr`: unrecognized node kind `ref!`"
        );
    }

    #[test]
    fn test_unknown_rule_kind() {
        let err = Grammar::from_toml("[[rules]]\nname = \"A\"\nkind = \"choice\"\n").unwrap_err();
        assert_eq!(err.to_string(), "in rule `A`: unrecognized node kind `choice`");
    }

    #[test]
    fn test_misplaced_kinds() {
        let err = Grammar::from_toml(
            "[[rules]]\nname = \"A\"\nkind = \"list\"\nlines = [[{ kind = \"regex\" }]]\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "in rule `A`: node kind `regex` cannot appear inside a line"
        );

        let err = Grammar::from_toml("[[rules]]\nname = \"A\"\nkind = \"ref+\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "in rule `A`: node kind `ref+` cannot appear as a rule"
        );
    }

    #[test]
    fn test_only_item_kinds_load_inside_a_line() {
        for kind in NodeKind::ALL {
            let item = ItemDescription {
                kind: kind.to_string(),
                text: Some("x".to_string()),
                name: Some("X".to_string()),
            };
            match kind {
                NodeKind::Space | NodeKind::Keyword | NodeKind::Ref(_) | NodeKind::Error => {
                    assert_eq!(item.to_item().unwrap().kind(), kind)
                }
                NodeKind::Line | NodeKind::List | NodeKind::Regex => assert!(
                    matches!(
                        item.to_item(),
                        Err(GenError::Misplaced { kind: found, position: "inside a line" }) if found == kind
                    ),
                    "{kind}"
                ),
            }
        }
    }

    #[test]
    fn test_only_rule_kinds_load_as_rules() {
        for kind in NodeKind::ALL {
            let rule = RuleDescription {
                name: "R".to_string(),
                kind: kind.to_string(),
                lines: Some(vec![]),
                pattern: Some("x".to_string()),
            };
            match kind {
                NodeKind::List | NodeKind::Regex => assert_eq!(rule.to_rule().unwrap().kind(), kind),
                _ => assert_eq!(
                    rule.to_rule().unwrap_err().to_string(),
                    format!("in rule `R`: node kind `{kind}` cannot appear as a rule")
                ),
            }
        }
    }

    #[test]
    fn test_missing_payloads() {
        let err = Grammar::from_toml(
            "[[rules]]\nname = \"A\"\nkind = \"list\"\nlines = [[{ kind = \"keyword\" }]]\n",
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "in rule `A`: node kind `keyword` is missing field `text`"
        );

        let err = Grammar::from_toml("[[rules]]\nname = \"A\"\nkind = \"regex\"\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "in rule `A`: node kind `regex` is missing field `pattern`"
        );
    }

    #[test]
    fn test_malformed_toml() {
        let err = Grammar::from_toml("[[rules]]\nname = ").unwrap_err();
        assert!(matches!(err, GenError::Toml(_)));

        let err = Grammar::from_toml("[[rules]]\nname = \"A\"\nkind = \"list\"\nalts = []\n")
            .unwrap_err();
        assert!(matches!(err, GenError::Toml(_)));
    }
}
