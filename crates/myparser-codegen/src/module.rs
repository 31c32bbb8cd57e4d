// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Module wrapper: embeds the rendered declarations into a complete header.

use crate::error::Result;
use crate::grammar::Grammar;
use crate::options::Options;
use crate::renderer::{CppDump, Layout};
use log::info;
use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Header of the runtime library the generated declarations specialize.
pub const RUNTIME_HEADER: &str = "myparser.hpp";

/// Namespace of the runtime library.
pub const NAMESPACE: &str = "myparser";

const MODULE_TEMPLATE_NAME: &str = "module.hpp";
const MODULE_TEMPLATE: &str = include_str!("../templates/module.hpp.tera");

static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();
    tera.add_raw_template(MODULE_TEMPLATE_NAME, MODULE_TEMPLATE)
        .expect("bundled module template must parse");
    tera
});

/// Wrap `body` with the generated-file banner, the runtime include and the
/// runtime namespace. `runtime_path` is prefixed verbatim to the header name.
pub fn wrap_module(body: &str, runtime_path: &str) -> Result<String> {
    let mut context = Context::new();
    context.insert("runtime_path", runtime_path);
    context.insert("runtime_header", RUNTIME_HEADER);
    context.insert("namespace", NAMESPACE);
    context.insert("body", body);
    Ok(TEMPLATES.render(MODULE_TEMPLATE_NAME, &context)?)
}

/// Render `grammar` with the C++ table and wrap it into a header.
pub fn generate(grammar: &Grammar, options: &Options) -> Result<String> {
    options.layout.validate()?;
    let dump = CppDump::new(Layout::from(&options.layout));
    let body = grammar.dump(&dump);
    let module = wrap_module(&body, &options.runtime_path)?;
    info!(
        "generated {} rules ({} bytes)",
        grammar.rules.len(),
        module.len()
    );
    Ok(options.layout.line_ending.apply(module))
}
