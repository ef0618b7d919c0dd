use crate::CLAP_STYLING;
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("vetlink")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("vetlink")
        .about("Scores scholarship links for authenticity")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("check")
                .about("Scores a single link and its title")
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The link to score. Malformed links are scored, not rejected."),
                )
                .arg(
                    arg!(-t --"title" <TITLE>)
                        .required(false)
                        .default_value("")
                        .help("Title or text shown alongside the link"),
                )
                .arg(
                    arg!(-F --"format" <FORMAT>)
                        .required(false)
                        .default_value("text")
                        .value_parser(["text", "json"])
                        .help("Output format"),
                ),
        )
        .subcommand(
            command!("batch")
                .about(
                    "Scores every candidate in a file. JSON files hold an array of records; \
                other files hold one `URL [title...]` per line.",
                )
                .arg(
                    arg!(-i --"input" <PATH>)
                        .required(true)
                        .help("Path to the candidate file"),
                )
                .arg(
                    arg!(-F --"format" <FORMAT>)
                        .required(false)
                        .default_value("text")
                        .value_parser(["text", "txt", "json"])
                        .help("Report format"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the report to this file instead of stdout"),
                )
                .arg(
                    arg!(--"min-status" <STATUS>)
                        .required(false)
                        .value_parser(["high-trust", "verified", "caution", "risk"])
                        .help("Only report links at least this trusted"),
                ),
        )
        .subcommand(
            command!("tone")
                .about("Runs only the tone check over a piece of text")
                .arg(arg!(<TEXT>).required(true).help("Text to analyze")),
        )
}
