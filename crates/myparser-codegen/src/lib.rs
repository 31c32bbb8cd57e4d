// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! MyParser C++ code generator
//!
//! Turns a grammar tree into a C++ header of template specializations for the
//! MyParser runtime. The grammar traverses itself and asks a renderer table
//! (`RuleDump`) for the text of every node; the module wrapper embeds the
//! resulting declarations into the runtime namespace. Writing the result out
//! is left to the caller.

#![forbid(unsafe_code)]

pub mod error;
pub mod grammar;
pub mod module;
pub mod options;
pub mod renderer;

pub use error::{GenError, Result};

// Grammar model
pub use grammar::{Grammar, NodeKind, Quantifier, Rule, RuleItem, RuleLine};

// Renderer table and formatting context
pub use renderer::{CppDump, Layout, Payload, RuleDump};

// Entry points
pub use module::{generate, wrap_module};
pub use options::{LayoutOptions, LineEnding, Options};
