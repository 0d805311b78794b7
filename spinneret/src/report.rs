use chrono::{DateTime, Local};
use colored::Colorize;
use serde_json::json;
use spinneret_scanner::{CrawlResult, CrawlStatus};
use std::fmt;
use std::time::Duration;
use url::Url;

/// Addresses longer than this are cut short in the text report so one
/// runaway query string cannot wrap the whole table.
const MAX_URL_DISPLAY_LENGTH: usize = 120;

/// Outcome counts for one crawl run, grouped by status.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CrawlTotals {
    pub total: usize,
    pub succeeded: usize,
    pub errored: usize,
    pub canceled: usize,
    pub failed: usize,
}

impl CrawlTotals {
    pub fn tally(results: &[CrawlResult]) -> Self {
        let mut totals = Self {
            total: results.len(),
            ..Self::default()
        };
        for result in results {
            match result.status {
                CrawlStatus::Success => totals.succeeded += 1,
                CrawlStatus::Error => totals.errored += 1,
                CrawlStatus::Canceled => totals.canceled += 1,
                CrawlStatus::Failure => totals.failed += 1,
            }
        }
        totals
    }
}

impl fmt::Display for CrawlTotals {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4} item(s) total.", self.total)?;
        writeln!(f, "{:>4} item(s) succeeded.", self.succeeded)?;
        writeln!(f, "{:>4} item(s) errored out.", self.errored)?;
        writeln!(f, "{:>4} item(s) were canceled.", self.canceled)?;
        write!(f, "{:>4} item(s) failed.", self.failed)
    }
}

/// Renders the human-readable report: a header, one row per outcome
/// sorted by status then address, any still-unresolved claims, and the
/// totals block.
pub fn generate_text_report(
    seeds: &[String],
    started: DateTime<Local>,
    duration: Duration,
    results: &[CrawlResult],
    unresolved: &[Url],
) -> String {
    let mut report = String::new();

    report.push_str(&format!("Crawl report for {}\n", seeds.join(", ")));
    report.push_str(&format!(
        "Started: {}\n",
        started.format("%Y-%m-%d %H:%M:%S")
    ));
    report.push_str(&format!("Duration: {:.2}s\n\n", duration.as_secs_f64()));

    let mut rows: Vec<&CrawlResult> = results.iter().collect();
    rows.sort_by(|a, b| {
        a.status
            .cmp(&b.status)
            .then_with(|| a.url.as_str().cmp(b.url.as_str()))
    });

    for result in rows {
        report.push_str(&format_result_row(result));
        report.push('\n');
    }

    for url in unresolved {
        report.push_str(&format!("{:>19} : {}\n", "<unresolved>", url));
    }

    report.push_str(&format!("\n{}\n", CrawlTotals::tally(results)));
    report
}

fn format_result_row(result: &CrawlResult) -> String {
    // Pad before coloring so the escape codes do not skew the columns.
    let status = format!("{:>8}", result.status.as_str());
    let status = match result.status {
        CrawlStatus::Success => status.green(),
        CrawlStatus::Error => status.yellow(),
        CrawlStatus::Canceled => status.cyan(),
        CrawlStatus::Failure => status.red(),
    };

    let mut row = format!(
        "{:>8} : {} : {}",
        result.method.as_str(),
        status,
        truncate_url(result.url.as_str())
    );
    if result.status != CrawlStatus::Success
        && let Some(error) = &result.error
    {
        row.push_str(&format!(" | {}", error));
    }
    row
}

fn truncate_url(url: &str) -> String {
    match url.char_indices().nth(MAX_URL_DISPLAY_LENGTH) {
        Some((idx, _)) => url[..idx].to_string(),
        None => url.to_string(),
    }
}

/// Renders the machine-readable report with the same summary counts as
/// the text report and one object per outcome.
pub fn generate_json_report(
    seeds: &[String],
    started: DateTime<Local>,
    duration: Duration,
    results: &[CrawlResult],
) -> Result<String, serde_json::Error> {
    let totals = CrawlTotals::tally(results);

    let document = json!({
        "seeds": seeds,
        "started": started.to_rfc3339(),
        "duration_seconds": duration.as_secs_f64(),
        "summary": {
            "total": totals.total,
            "succeeded": totals.succeeded,
            "errored": totals.errored,
            "canceled": totals.canceled,
            "failed": totals.failed,
        },
        "results": results
            .iter()
            .map(|result| {
                json!({
                    "url": result.url.as_str(),
                    "method": result.method.as_str(),
                    "status": result.status,
                    "status_code": result.status_code.as_u16(),
                    "error": result.error.as_deref(),
                })
            })
            .collect::<Vec<_>>(),
    });

    serde_json::to_string_pretty(&document)
}
