// Copyright (c) Asymptotic Labs
// SPDX-License-Identifier: Apache-2.0

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::*;
use colored::Colorize;
use log::{debug, info, warn, LevelFilter};
use myparser_codegen::{generate, grammar::check, Grammar, Options};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

#[derive(Parser)]
#[clap(
    name = env!("CARGO_BIN_NAME"),
    about = "Generates a C++ header of MyParser rule specializations from a TOML grammar description",
    rename_all = "kebab-case",
    author,
    version = env!("CARGO_PKG_VERSION"),
)]
pub struct Args {
    /// Grammar description (TOML)
    #[clap(value_name = "GRAMMAR", required_unless_present = "print_config")]
    pub grammar: Option<PathBuf>,

    /// Output header; stdout when absent
    #[clap(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Path fragment prefixed to `myparser.hpp` in the generated include
    #[clap(long, short = 'r')]
    pub runtime_path: Option<String>,

    /// Options file (TOML)
    #[clap(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[clap(long, short = 'v')]
    pub verbose: bool,

    /// Print the effective options as TOML and exit
    #[clap(long)]
    pub print_config: bool,
}

impl Args {
    /// Options from the config file, overridden by command line flags.
    fn options(&self) -> Result<Options> {
        let mut options = match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("failed to read options `{}`", path.display()))?;
                Options::from_toml(&source)
                    .with_context(|| format!("invalid options `{}`", path.display()))?
            }
            None => Options::default(),
        };
        if let Some(runtime_path) = &self.runtime_path {
            options.runtime_path = runtime_path.clone();
        }
        if self.verbose {
            options.verbosity_level = options.verbosity_level.max(LevelFilter::Debug);
        }
        Ok(options)
    }
}

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).unwrap();

    let args = Args::parse();

    if let Err(err) = run(&args) {
        let err = format!("{:?}", err);
        eprintln!("{}", err.bold().red());
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let options = args.options()?;

    if args.print_config {
        print!("{}", options.to_toml()?);
        return Ok(());
    }

    TermLogger::init(
        options.verbosity_level,
        ConfigBuilder::new().set_time_level(LevelFilter::Off).build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("failed to initialize logging")?;

    debug!("MyParser C++ generator version: {}", env!("CARGO_PKG_VERSION"));

    let path = args
        .grammar
        .as_deref()
        .context("no grammar description given")?;
    let grammar = load_grammar(path)?;

    let problems = check::report(&grammar);
    if problems > 0 {
        warn!("{problems} reference problem(s) in `{}`", path.display());
    }

    let header = generate(&grammar, &options)
        .with_context(|| format!("failed to generate code for `{}`", path.display()))?;

    match &args.output {
        Some(output) => {
            fs::write(output, &header)
                .with_context(|| format!("failed to write `{}`", output.display()))?;
            info!("wrote `{}`", output.display());
        }
        None => io::stdout()
            .write_all(header.as_bytes())
            .context("failed to write to stdout")?,
    }
    Ok(())
}

fn load_grammar(path: &Path) -> Result<Grammar> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("failed to read grammar `{}`", path.display()))?;
    Grammar::from_toml(&source).with_context(|| format!("invalid grammar `{}`", path.display()))
}
