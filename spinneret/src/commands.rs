use clap::arg;
use url::Url;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("spinneret")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("spinneret")
        .about(
            "Crawls a site starting from a seed URL and reports the status of \
            every link it finds along the way.",
        )
        .arg(
            arg!(-u --"url" <URL>)
                .required(false)
                .help("The URL to start crawling from")
                .value_parser(clap::value_parser!(Url))
                .conflicts_with("hosts-file"),
        )
        .arg(
            arg!(-H --"hosts-file" <PATH>)
                .required(false)
                .help("Path to a newline-delimited file of URLs to crawl")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .conflicts_with("url"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS>)
                .required(false)
                .help("Request timeout in seconds")
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
        .arg(
            arg!(-c --"max-connections" <NUM>)
                .required(false)
                .help("Maximum number of idle connections kept per host")
                .value_parser(clap::value_parser!(usize))
                .default_value("10"),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Report format: text, json")
                .value_parser(["text", "json"])
                .default_value("text"),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Save report to file (default: display to screen)")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
}
