// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use crate::error::{GenError, Result};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Represents options provided to the generator. Most of those options are configured via a toml
/// source; some over the command line flags.
///
/// NOTE: any fields carrying structured data must appear at the end for making
/// toml printing work. When changing this config, use `myparser-gen --print-config` to
/// verify this works.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Options {
    /// Path fragment prefixed to the runtime header name in the generated include.
    pub runtime_path: String,
    /// Verbosity level for logging.
    pub verbosity_level: LevelFilter,

    /// BEGIN OF STRUCTURED OPTIONS. DO NOT ADD VALUE FIELDS AFTER THIS
    /// Layout of the generated text.
    pub layout: LayoutOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            runtime_path: String::new(),
            verbosity_level: LevelFilter::Info,
            layout: LayoutOptions::default(),
        }
    }
}

impl Options {
    pub fn from_toml(source: &str) -> Result<Self> {
        let options: Options = toml::from_str(source)?;
        options.layout.validate()?;
        Ok(options)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Accepted values of `LayoutOptions::indent_width`.
pub const INDENT_WIDTHS: RangeInclusive<usize> = 1..=16;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutOptions {
    /// Number of spaces per indentation level.
    pub indent_width: usize,
    pub line_ending: LineEnding,
}

impl LayoutOptions {
    /// Nested constructs must stay one visible unit deeper than their parent.
    pub fn validate(&self) -> Result<()> {
        if INDENT_WIDTHS.contains(&self.indent_width) {
            Ok(())
        } else {
            Err(GenError::IndentWidth {
                width: self.indent_width,
                min: *INDENT_WIDTHS.start(),
                max: *INDENT_WIDTHS.end(),
            })
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            indent_width: 4,
            line_ending: LineEnding::Lf,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    Lf,
    Crlf,
}

impl LineEnding {
    /// Rewrite the `\n` line breaks produced by the renderer.
    pub fn apply(self, text: String) -> String {
        match self {
            LineEnding::Lf => text,
            LineEnding::Crlf => text.replace('\n', "\r\n"),
        }
    }
}
