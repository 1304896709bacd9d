//! List-checks command implementation.

use anyhow::Result;
use klint_checks::load_builtin_checks_into;
use klint_core::{CheckOrigin, CheckRegistry};

/// Runs the list-checks command.
///
/// # Errors
///
/// Fails only when the built-in library cannot be loaded.
pub fn run() -> Result<()> {
    let mut registry = CheckRegistry::new();
    load_builtin_checks_into(&mut registry)?;

    println!("Available checks:\n");
    println!("{:<28} {:<8} Description", "Name", "Default");
    println!("{}", "-".repeat(80));

    for check in registry.iter() {
        let default = matches!(check.origin, CheckOrigin::Builtin { default: true });
        println!(
            "{:<28} {:<8} {}",
            check.spec.name,
            if default { "yes" } else { "no" },
            check.spec.description
        );
    }

    println!("\nEnable non-default checks via configuration, e.g.:");
    println!("  checks:");
    println!("    include:");
    println!("      - latest-tag");
    println!("  or set checks.addAllBuiltIn: true");

    Ok(())
}
