// src/cli.rs
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::{env, path::PathBuf};

use crate::core::filter::parse_filter_date;
use crate::core::models::{Method, Status};
use crate::infra::t;

pub mod commands;

use commands::{FilterOverrides, SessionOptions};

/// Pre-parses the command line arguments to find the language setting.
/// This allows i18n to be initialized before the full CLI is built.
/// It looks for a `--lang <VALUE>` or `--lang=<VALUE>` argument.
fn pre_parse_language() -> Option<String> {
    let args: Vec<String> = env::args().collect();
    args.iter().enumerate().find_map(|(pos, arg)| {
        if arg == "--lang" {
            args.get(pos + 1).cloned()
        } else {
            arg.strip_prefix("--lang=").map(str::to_string)
        }
    })
}

fn filter_args(locale: &str) -> [Arg; 4] {
    [
        Arg::new("query")
            .short('q')
            .long("query")
            .help(t!("arg_query", locale = locale).to_string())
            .value_name("TEXT")
            .action(ArgAction::Set),
        Arg::new("status")
            .short('s')
            .long("status")
            .help(t!("arg_status", locale = locale).to_string())
            .value_name("STATUS")
            .value_parser(|s: &str| s.parse::<Status>().map_err(|e| e.to_string()))
            .action(ArgAction::Append),
        Arg::new("method")
            .short('m')
            .long("method")
            .help(t!("arg_method", locale = locale).to_string())
            .value_name("METHOD")
            .value_parser(|s: &str| s.parse::<Method>().map_err(|e| e.to_string()))
            .action(ArgAction::Set),
        Arg::new("date")
            .short('d')
            .long("date")
            .help(t!("arg_date", locale = locale).to_string())
            .value_name("YYYY-MM-DD")
            .value_parser(|s: &str| parse_filter_date(s).map_err(|e| e.to_string()))
            .action(ArgAction::Set),
    ]
}

pub fn build_cli(locale: &str) -> Command {
    Command::new("result-inspector")
        .version(env!("CARGO_PKG_VERSION"))
        .about(t!("cli_about", locale = locale).to_string())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("lang")
                .long("lang")
                .help(t!("cli_lang", locale = locale).to_string())
                .value_name("LANGUAGE")
                .global(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help(t!("arg_config", locale = locale).to_string())
                .value_name("CONFIG")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("results")
                .short('r')
                .long("results")
                .help(t!("arg_results", locale = locale).to_string())
                .value_name("RESULTS")
                .global(true)
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .subcommand(
            Command::new("list")
                .about(t!("cmd_list_about", locale = locale).to_string())
                .args(filter_args(locale))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help(t!("arg_json", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("stats").about(t!("cmd_stats_about", locale = locale).to_string()))
        .subcommand(
            Command::new("methods").about(t!("cmd_methods_about", locale = locale).to_string()),
        )
        .subcommand(
            Command::new("show")
                .about(t!("cmd_show_about", locale = locale).to_string())
                .arg(
                    Arg::new("id")
                        .help(t!("arg_id", locale = locale).to_string())
                        .value_name("ID")
                        .required(true)
                        .action(ArgAction::Set),
                )
                .arg(
                    Arg::new("response")
                        .long("response")
                        .help(t!("arg_response", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("report")
                .about(t!("cmd_report_about", locale = locale).to_string())
                .args(filter_args(locale))
                .arg(
                    Arg::new("html")
                        .long("html")
                        .help(t!("arg_html", locale = locale).to_string())
                        .value_name("HTML")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf))
                        .action(ArgAction::Set),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about(t!("cmd_inspect_about", locale = locale).to_string())
                .args(filter_args(locale)),
        )
        .subcommand(
            Command::new("init")
                .about(t!("cmd_init_about", locale = locale).to_string())
                .arg(
                    Arg::new("non-interactive")
                        .long("non-interactive")
                        .help(t!("arg_non_interactive", locale = locale).to_string())
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn filter_overrides(matches: &ArgMatches) -> FilterOverrides {
    FilterOverrides {
        query: matches.get_one::<String>("query").cloned(),
        statuses: matches
            .get_many::<Status>("status")
            .map(|values| values.copied().collect())
            .unwrap_or_default(),
        method: matches.get_one::<Method>("method").cloned(),
        date: matches.get_one::<NaiveDate>("date").copied(),
    }
}

pub fn run() -> Result<()> {
    // Pre-parse language so that help text is localized.
    let requested_language = pre_parse_language();
    let help_locale = crate::resolve_locale(requested_language.as_deref());
    rust_i18n::set_locale(&help_locale);

    let matches = build_cli(&help_locale).get_matches();

    let options = SessionOptions {
        config: matches.get_one::<PathBuf>("config").cloned(),
        results: matches.get_one::<PathBuf>("results").cloned(),
        language: matches.get_one::<String>("lang").cloned(),
    };

    match matches.subcommand() {
        Some(("list", sub)) => {
            let session = commands::Session::open(&options, &filter_overrides(sub))?;
            commands::list::execute(&session, sub.get_flag("json"))?;
        }
        Some(("stats", _)) => {
            let session = commands::Session::open(&options, &FilterOverrides::default())?;
            commands::overview::execute_stats(&session);
        }
        Some(("methods", _)) => {
            let session = commands::Session::open(&options, &FilterOverrides::default())?;
            commands::overview::execute_methods(&session);
        }
        Some(("show", sub)) => {
            let mut session = commands::Session::open(&options, &FilterOverrides::default())?;
            let id = sub
                .get_one::<String>("id")
                .map(String::as_str)
                .unwrap_or_default();
            commands::show::execute(&mut session, id, sub.get_flag("response"))?;
        }
        Some(("report", sub)) => {
            let session = commands::Session::open(&options, &filter_overrides(sub))?;
            let html = sub
                .get_one::<PathBuf>("html")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("report.html"));
            commands::report::execute(&session, &html)?;
        }
        Some(("inspect", sub)) => {
            let session = commands::Session::open(&options, &filter_overrides(sub))?;
            commands::inspect::execute(session)?;
        }
        Some(("init", sub)) => {
            let language = options.language.as_deref().unwrap_or(&help_locale);
            commands::init::run_init_wizard(
                options.config.as_deref(),
                language,
                sub.get_flag("non-interactive"),
            )?;
        }
        _ => unreachable!("subcommand_required is set"),
    }
    Ok(())
}
