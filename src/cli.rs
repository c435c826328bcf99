// src/cli.rs
use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use std::{env, path::PathBuf};

use crate::infra::t;

pub mod commands;

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` argument.
fn pre_parse_language() -> String {
    let args: Vec<String> = env::args().collect();
    if let Some(pos) = args.iter().position(|arg| arg == "--lang") {
        if let Some(lang) = args.get(pos + 1) {
            return lang.clone();
        }
    }
    // Fallback to system language detection
    sys_locale::get_locale().unwrap_or_else(|| "en".to_string())
}

fn build_cli(locale: &str) -> Command {
    Command::new("gherkin-report")
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help(t!("arg_input", locale = locale).to_string())
                .value_name("INPUT")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help(t!("arg_output", locale = locale).to_string())
                .value_name("OUTPUT")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .default_value("GherkinReport.toml")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
}

pub fn run() -> Result<()> {
    // Pre-parse language and initialize i18n first.
    let language = pre_parse_language();
    rust_i18n::set_locale(&language);

    let matches = build_cli(&language).get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .unwrap() // Required
        .clone();
    let output = matches
        .get_one::<PathBuf>("output")
        .unwrap() // Required
        .clone();
    let config = matches
        .get_one::<PathBuf>("config")
        .unwrap() // Has default
        .clone();

    commands::generate::execute(input, output, config, language)
}
