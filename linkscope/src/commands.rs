use crate::CLAP_STYLING;
use clap::{arg, command};
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linkscope")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linkscope")
        .styles(CLAP_STYLING)
        .subcommand_required(true)
        .subcommand(
            command!("analyze")
                .about(
                    "Fetch a page, probe every hyperlink it contains and report \
                reachability, timing and internal/external classification.",
                )
                .arg(
                    arg!(-u --"url" <URL>)
                        .required(true)
                        .help("The page to analyze")
                        .value_parser(clap::value_parser!(Url)),
                )
                .arg(
                    arg!(-t --"timeout" <SECONDS>)
                        .required(false)
                        .help("Request timeout in seconds")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("10"),
                )
                .arg(
                    arg!(--"json")
                        .required(false)
                        .help("Print the raw JSON report instead of the human-readable summary")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save the JSON report to a file")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                ),
        )
}
