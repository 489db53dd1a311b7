//! Terminal output formatting.

use colored::Colorize;
use tokengate_core::VerificationResult;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green().bold(), msg.green());
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red().bold(), msg.red());
}

/// Print an info message.
#[allow(dead_code)]
pub fn info(msg: &str) {
    println!("{} {}", "→".cyan(), msg);
}

/// Print a warning message.
#[allow(dead_code)]
pub fn warn(msg: &str) {
    println!("{} {}", "!".yellow().bold(), msg.yellow());
}

/// Print a header.
pub fn header(msg: &str) {
    println!("\n{}", msg.white().bold());
    println!("{}", "─".repeat(msg.len()).dimmed());
}

/// Print a key-value pair.
pub fn kv(key: &str, value: &str) {
    println!("  {} {}", format!("{}:", key).dimmed(), value);
}

/// Print a helpful hint.
pub fn hint(msg: &str) {
    println!("{} {}", "💡".dimmed(), msg.dimmed());
}

/// Print a verification outcome.
pub fn verification_summary(result: &VerificationResult) {
    println!();
    if result.owns_asset {
        success(&format!("Ownership confirmed via {}", result.source));
        kv("Matched quantity", &result.match_count.to_string());
        for asset in &result.assets {
            kv(
                "Asset",
                &format!(
                    "{} x{}",
                    asset.asset_name.as_deref().unwrap_or(&asset.unit),
                    asset.quantity
                ),
            );
        }
    } else {
        error("Ownership not confirmed");
        if let Some(detail) = result.error.as_deref() {
            kv("Detail", detail);
            hint("Transient provider failures are not cached; it is safe to retry.");
        }
    }
    println!();
}
