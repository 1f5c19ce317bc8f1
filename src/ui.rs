//! Console status lines for the bootstrap steps.
//!
//! Everything goes to stdout except error detail, which goes to stderr.

use colored::*;

const RULE_WIDTH: usize = 60;

/// Framed title banner
pub fn banner(title: &str) {
    rule();
    println!("{}", format!("🚀 {title}").bold().blue());
    rule();
    println!();
}

/// Closing banner after a fully successful run
pub fn finished(message: &str) {
    rule();
    println!("{}", format!("✨ {message}").green().bold());
    rule();
}

pub fn rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

/// A step is starting
pub fn action(text: &str) {
    println!("🔧 {text}...");
}

pub fn success(text: &str) {
    println!("{}", format!("✅ {text}").green());
}

pub fn info(text: &str) {
    println!("ℹ️  {text}");
}

pub fn warn(text: &str) {
    println!("{}", format!("⚠️  {text}").yellow());
}

pub fn failure(text: &str) {
    println!("{}", format!("❌ {text}").red().bold());
}

/// Error detail, indented under a failure line
pub fn detail(text: &str) {
    eprintln!("   {} {text}", "Error:".red());
}

/// Item line under a step, e.g. a deleted path
pub fn item(text: &str) {
    println!("   {text}");
}
