// Command output goes to stdout through println!; tracing is reserved for
// diagnostics on stderr.

use colored::Colorize as _;
use hikma_i18n::{CompletenessReport, Language};
use tracing_subscriber::EnvFilter;

/// Sends library logs to stderr, filtered by `RUST_LOG` (default `warn`).
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

pub fn print_check_header(reference: Language, languages: &[Language]) {
    let names: Vec<&str> = languages.iter().map(|language| language.code()).collect();
    println!(
        "{} {} against {}",
        "Checking".dimmed(),
        names.join(", ").bold(),
        reference.code().bold()
    );
}

pub fn print_report(report: &CompletenessReport) {
    for (language, keys) in &report.missing {
        for key in keys {
            println!("{} {}: missing {}", "error".red().bold(), language, key);
        }
    }

    for (language, keys) in &report.extra {
        for key in keys {
            println!(
                "{} {}: {} is not defined in {}",
                "warning".yellow().bold(),
                language,
                key,
                report.reference
            );
        }
    }
}

pub fn print_skipped_directory(code: &str) {
    println!(
        "{} {}: not a site language, its translations are not loaded",
        "warning".yellow().bold(),
        code
    );
}

pub fn print_check_success() {
    println!("{}", "All translations are complete".green());
}

pub fn print_language(language: Language, supported: bool) {
    let status = if supported {
        "loaded".green()
    } else {
        "no translations".red()
    };
    println!(
        "{}  {}  {}  {}",
        language.code().bold(),
        language.direction().as_attr(),
        language.native_name(),
        status
    );
}
