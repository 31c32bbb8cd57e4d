// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

//! Simple C++ renderer - pure translation with minimal logic.
//!
//! This module maps each grammar node kind to the C++ template instantiation
//! the runtime library understands. The renderer is intentionally "dumb" - it
//! pattern matches node payloads and emits corresponding text without any
//! analysis of the grammar.

mod cpp_writer;
pub mod escape;
mod render;
mod table;

pub use cpp_writer::{render_to_string, CppWriter, Layout};
pub use render::{
    render_error, render_keyword, render_line, render_list, render_reference, render_regex,
    render_space, CppDump,
};
pub use table::{Payload, RuleDump};
