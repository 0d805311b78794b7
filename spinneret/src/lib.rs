use colored::Colorize;

// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;
pub mod report;

// Re-export commonly used handler functions for convenience
pub use handlers::{load_urls_from_file, load_urls_from_source, parse_url_line};

pub use report::{CrawlTotals, generate_json_report, generate_text_report};

const BANNER: &str = r#"
███████╗██████╗ ██╗███╗   ██╗███╗   ██╗███████╗██████╗ ███████╗████████╗
██╔════╝██╔══██╗██║████╗  ██║████╗  ██║██╔════╝██╔══██╗██╔════╝╚══██╔══╝
███████╗██████╔╝██║██╔██╗ ██║██╔██╗ ██║█████╗  ██████╔╝█████╗     ██║
╚════██║██╔═══╝ ██║██║╚██╗██║██║╚██╗██║██╔══╝  ██╔══██╗██╔══╝     ██║
███████║██║     ██║██║ ╚████║██║ ╚████║███████╗██║  ██║███████╗   ██║
╚══════╝╚═╝     ╚═╝╚═╝  ╚═══╝╚═╝  ╚═══╝╚══════╝╚═╝  ╚═╝╚══════╝   ╚═╝"#;

pub fn print_banner() {
    println!("{}", BANNER.bright_cyan());
    println!(
        "        {} {}",
        "every link, exactly once".bright_white(),
        format!("v{}", env!("CARGO_PKG_VERSION")).cyan()
    );
    println!();
}
