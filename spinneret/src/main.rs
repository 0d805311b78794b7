use commands::command_argument_builder;
use spinneret::handlers::handle_crawl;
use spinneret::print_banner;

mod commands;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let matches = cmd.get_matches();
    let quiet = matches.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    handle_crawl(&matches).await;
}
