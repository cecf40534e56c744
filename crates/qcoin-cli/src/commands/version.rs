//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    let version = env!("CARGO_PKG_VERSION");

    println!(
        "{} {} - classical coin vs quantum coin",
        style("qcoin").cyan().bold(),
        style(format!("v{version}")).yellow()
    );
    println!();
    println!("Components:");
    println!("  qcoin-core  Single-qubit state simulator");
    println!("  qcoin-cli   Terminal demo");
    println!();
    println!("License: {}", style("Apache-2.0").dim());
}
