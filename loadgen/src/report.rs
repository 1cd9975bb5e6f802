use std::path::Path;

use colored::Colorize;

use crate::statistics::{Outcome, Status, SummarySnapshot};

pub fn print_outcome(sequence: u64, outcome: &Outcome) {
    let line = format!(
        "[{}] #{sequence:04} {:6} {:45} {:28} time: {:.3}s",
        outcome.timestamp.format("%H:%M:%S"),
        outcome.method.as_str(),
        outcome.path,
        status_cell(&outcome.status),
        outcome.elapsed.as_secs_f64(),
    );
    if outcome.status.is_success() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

fn status_cell(status: &Status) -> String {
    match status {
        Status::Http(code) => format!("status: {code}"),
        Status::Failed(reason) => format!("failed: {reason}"),
    }
}

pub fn print_summary(snapshot: &SummarySnapshot, results_path: &Path) {
    println!();
    println!("{}", "=== Test Summary ===".yellow().bold());
    println!(
        "Total requests:        {}",
        snapshot.total.to_string().green()
    );
    println!(
        "Successful requests:   {}",
        snapshot.succeeded.to_string().green()
    );
    println!(
        "Failed requests:       {}",
        snapshot.failed.to_string().red()
    );
    println!(
        "Error rate:            {}",
        format!("{:.2}%", snapshot.error_rate_percent()).red()
    );
    println!(
        "Average response time: {}",
        format!("{:.3}s", snapshot.mean_response_secs()).green()
    );
    println!(
        "Results saved to:      {}",
        results_path.display().to_string().green()
    );
}
