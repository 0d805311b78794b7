use crate::report::{generate_json_report, generate_text_report};
use anyhow::Context;
use clap::ArgMatches;
use spinneret_scanner::{CrawlResult, Crawler};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use url::Url;

// Helper functions for the crawl handler

/// Load URLs from either a file or a single URL argument
pub fn load_urls_from_source(
    url: Option<&Url>,
    hosts_file: Option<&PathBuf>,
) -> Result<Vec<String>, String> {
    if let Some(hosts_file_path) = hosts_file {
        load_urls_from_file(hosts_file_path)
    } else if let Some(url) = url {
        Ok(vec![url.as_str().to_string()])
    } else {
        Err("Either --url or --hosts-file must be provided".to_string())
    }
}

/// Load and parse URLs from a file
pub fn load_urls_from_file(path: &PathBuf) -> Result<Vec<String>, String> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read hosts file {}: {}", path.display(), e))?;

    let urls: Vec<String> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| parse_url_line(line.trim()))
        .collect();

    if urls.is_empty() {
        return Err(format!("No valid URLs found in {}", path.display()));
    }

    Ok(urls)
}

/// Parse a single line as a URL, trying to add http:// if needed
pub fn parse_url_line(line: &str) -> Option<String> {
    // Try to parse as-is
    if Url::parse(line).is_ok() {
        return Some(line.to_string());
    }

    // Try adding http://
    let with_scheme = format!("http://{}", line);
    if Url::parse(&with_scheme).is_ok() {
        return Some(with_scheme);
    }

    eprintln!("⚠️  Skipping invalid URL '{}'", line);
    None
}

pub async fn handle_crawl(matches: &ArgMatches) {
    // Initialize tracing for logging, on stderr so stdout carries only the report
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let url = matches.get_one::<Url>("url");
    let hosts_file = matches.get_one::<PathBuf>("hosts-file");
    let timeout = *matches.get_one::<u64>("timeout").unwrap_or(&10);
    let max_connections = *matches.get_one::<usize>("max-connections").unwrap_or(&10);
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("text");
    let output = matches.get_one::<PathBuf>("output");
    let quiet = matches.get_flag("quiet");

    // Load URLs from source
    let seeds = match load_urls_from_source(url, hosts_file) {
        Ok(seeds) => seeds,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    let crawler = match Crawler::with_limits(Duration::from_secs(timeout), max_connections) {
        Ok(crawler) => crawler,
        Err(e) => {
            eprintln!("✗ {}", e);
            std::process::exit(1);
        }
    };

    if !quiet {
        println!("\n🕷️  Crawling {} host(s)", seeds.len());
        println!("Timeout: {}s", timeout);
        println!("Max connections per host: {}\n", max_connections);
    }

    let started = chrono::Local::now();
    let crawl_started = Instant::now();

    let mut results: Vec<CrawlResult> = Vec::new();
    let mut unresolved: Vec<Url> = Vec::new();
    for seed in &seeds {
        match crawler.crawl(seed).await {
            Ok(graph) => {
                results.extend(graph.results());
                unresolved.extend(graph.unresolved());
            }
            Err(e) => {
                eprintln!("✗ Crawl failed: {}", e);
                std::process::exit(1);
            }
        }
    }
    let duration = crawl_started.elapsed();

    if !quiet {
        println!("\n✓ Crawl complete!\n");
    }

    // Generate the report in the requested format
    let report = match format {
        "json" => match generate_json_report(&seeds, started, duration, &results) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("✗ Failed to serialize report: {}", e);
                std::process::exit(1);
            }
        },
        _ => generate_text_report(&seeds, started, duration, &results, &unresolved),
    };

    match output {
        Some(path) => {
            if let Err(e) = write_report(path, &report) {
                eprintln!("✗ {:#}", e);
                std::process::exit(1);
            }
            if !quiet {
                println!("Report written to {}", path.display());
            }
        }
        None => print!("{}", report),
    }
}

fn write_report(path: &Path, report: &str) -> anyhow::Result<()> {
    fs::write(path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
