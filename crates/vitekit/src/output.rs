//! Terminal output utilities

use console::style;

/// Print a success message
pub fn success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗ Error:").red().bold(), msg);
}

/// Print an info message
pub fn info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Print a header
pub fn header(msg: &str) {
    println!("\n{}", style(msg).bold().underlined());
}

/// Print a key-value pair
pub fn kv(key: &str, value: &str) {
    println!("  {}: {}", style(key).dim(), value);
}

/// Print a numbered list of steps under an info heading
pub fn steps<S: AsRef<str>>(title: &str, steps: &[S]) {
    info(title);
    for (i, step) in steps.iter().enumerate() {
        println!("   {}. {}", i + 1, step.as_ref());
    }
}
