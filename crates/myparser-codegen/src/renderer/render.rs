// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Per-kind rendering rules for the C++ target.
//!
//! Every rule is a plain function of its payload. Composite rules receive
//! their children already rendered and the `Layout` to indent them with.

use super::cpp_writer::{render_to_string, CppWriter, Layout};
use super::escape::str_literal;
use super::table::RuleDump;
use crate::grammar::Quantifier;

pub fn render_space() -> String {
    "RuleItemSpace<>".to_string()
}

pub fn render_keyword(text: &str) -> String {
    format!("RuleItemKeyword<{}>", str_literal(text))
}

pub fn render_reference(name: &str, quantifier: Option<Quantifier>) -> String {
    match quantifier {
        Some(quantifier) => format!("RuleItemRef<{}, {}>", str_literal(name), quantifier.tag()),
        None => format!("RuleItemRef<{}>", str_literal(name)),
    }
}

pub fn render_error(text: &str) -> String {
    format!("RuleItemError<{}>", str_literal(text))
}

/// A sequence of items, one per line.
pub fn render_line(layout: &Layout, items: &[String]) -> String {
    if items.is_empty() {
        return "RuleLine<>".to_string();
    }
    render_to_string(layout, |w| {
        w.write("RuleLine<");
        w.indent(true);
        w.sep(",\n", items);
        w.dedent(true);
        w.write(">");
    })
}

/// A named rule matching the first alternative that succeeds.
pub fn render_list(layout: &Layout, name: &str, lines: &[String]) -> String {
    render_to_string(layout, |w| {
        rule_head(w, name);
        w.write(&format!("public RuleList<{}", str_literal(name)));
        if lines.is_empty() {
            w.newline();
        } else {
            w.write(",");
            w.indent(true);
            w.sep(",\n", lines);
            w.dedent(true);
        }
        w.line("> {};");
    })
}

/// A named rule matching a regular expression.
pub fn render_regex(layout: &Layout, name: &str, pattern: &str) -> String {
    render_to_string(layout, |w| {
        rule_head(w, name);
        w.write(&format!("public RuleRegex<{},", str_literal(name)));
        w.indent(true);
        w.write(&str_literal(pattern));
        w.dedent(true);
        w.line("> {};");
    })
}

/// Explicit specialization of the runtime's `RuleDef` for `name`.
fn rule_head(w: &mut CppWriter<'_>, name: &str) {
    w.line("template<>");
    w.line(&format!("class RuleDef<{}>:", str_literal(name)));
}

/// The C++ renderer table.
#[derive(Debug, Clone, Default)]
pub struct CppDump {
    pub layout: Layout,
}

impl CppDump {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl RuleDump for CppDump {
    fn space(&self) -> String {
        render_space()
    }

    fn keyword(&self, text: &str) -> String {
        render_keyword(text)
    }

    fn reference(&self, name: &str, quantifier: Option<Quantifier>) -> String {
        render_reference(name, quantifier)
    }

    fn error(&self, text: &str) -> String {
        render_error(text)
    }

    fn line(&self, items: &[String]) -> String {
        render_line(&self.layout, items)
    }

    fn list(&self, name: &str, lines: &[String]) -> String {
        render_list(&self.layout, name, lines)
    }

    fn regex(&self, name: &str, pattern: &str) -> String {
        render_regex(&self.layout, name, pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::NodeKind;
    use crate::renderer::table::Payload;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_items() {
        assert_eq!(render_space(), "RuleItemSpace<>");
        assert_eq!(render_keyword("if"), "RuleItemKeyword<MP_STR(\"if\")>");
        assert_eq!(render_reference("Expr", None), "RuleItemRef<MP_STR(\"Expr\")>");
        assert_eq!(
            render_reference("Expr", Some(Quantifier::Maybe)),
            "RuleItemRef<MP_STR(\"Expr\"), TagMaybe>"
        );
        assert_eq!(
            render_reference("Expr", Some(Quantifier::Any0)),
            "RuleItemRef<MP_STR(\"Expr\"), TagAny0>"
        );
        assert_eq!(
            render_reference("Expr", Some(Quantifier::Any1)),
            "RuleItemRef<MP_STR(\"Expr\"), TagAny1>"
        );
        assert_eq!(
            render_error("missing \"then\""),
            "RuleItemError<MP_STR(\"missing \\\"then\\\"\")>"
        );
    }

    #[test]
    fn test_line() {
        let layout = Layout::default();
        let items = strings(&["RuleItemSpace<>", "RuleItemRef<MP_STR(\"X\")>"]);
        assert_eq!(
            render_line(&layout, &items),
            "RuleLine<\n    RuleItemSpace<>,\n    RuleItemRef<MP_STR(\"X\")>\n>"
        );
        assert_eq!(render_line(&layout, &[]), "RuleLine<>");
    }

    #[test]
    fn test_list_indents_nested_lines() {
        let layout = Layout::default();
        let line = render_line(&layout, &strings(&["RuleItemSpace<>"]));
        let out = render_list(&layout, "S", &[line.clone(), line]);
        assert_eq!(
            out,
            "template<>\n\
             class RuleDef<MP_STR(\"S\")>:\n\
             public RuleList<MP_STR(\"S\"),\n    \
             RuleLine<\n        \
             RuleItemSpace<>\n    \
             >,\n    \
             RuleLine<\n        \
             RuleItemSpace<>\n    \
             >\n\
             > {};\n"
        );
    }

    #[test]
    fn test_empty_list() {
        let out = render_list(&Layout::default(), "Nothing", &[]);
        assert_eq!(
            out,
            "template<>\n\
             class RuleDef<MP_STR(\"Nothing\")>:\n\
             public RuleList<MP_STR(\"Nothing\")\n\
             > {};\n"
        );
    }

    #[test]
    fn test_regex() {
        let out = render_regex(&Layout::with_width(2), "Number", r"[0-9]+(\.[0-9]+)?");
        assert_eq!(
            out,
            "template<>\n\
             class RuleDef<MP_STR(\"Number\")>:\n\
             public RuleRegex<MP_STR(\"Number\"),\n  \
             MP_STR(\"[0-9]+(\\\\.[0-9]+)\\?\")\n\
             > {};\n"
        );
    }

    #[test]
    fn test_every_kind_reflects_its_parameter() {
        let table = CppDump::default();
        let fragments = strings(&["RuleItemKeyword<MP_STR(\"if\")>"]);
        for kind in NodeKind::ALL {
            let payload = match kind {
                NodeKind::Space => Payload::Unit,
                NodeKind::Keyword | NodeKind::Ref(_) | NodeKind::Error => Payload::Text("if"),
                NodeKind::Line => Payload::Fragments(&fragments),
                NodeKind::List => Payload::Named {
                    name: "Cond",
                    fragments: &fragments,
                },
                NodeKind::Regex => Payload::NamedText {
                    name: "Cond",
                    text: "if",
                },
            };
            let out = table.dispatch(kind, payload).unwrap();
            assert!(!out.is_empty(), "{kind}");
            if kind != NodeKind::Space {
                assert!(out.contains("MP_STR(\"if\")"), "{kind}: {out}");
            }
            if matches!(kind, NodeKind::List | NodeKind::Regex) {
                assert!(out.contains("RuleDef<MP_STR(\"Cond\")>"), "{kind}: {out}");
            }
        }
    }
}
