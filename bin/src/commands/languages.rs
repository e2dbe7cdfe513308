//! Languages command implementation.

use crate::display::load_registry;
use anyhow::Result;
use std::path::Path;

/// List the default languages together with the terms each one is searched by.
pub(crate) fn list_languages(aliases: Option<&Path>) -> Result<()> {
    let registry = load_registry(aliases)?;

    println!("{:<15} {}", "LANGUAGE", "SEARCH TERMS");
    println!("{}", "-".repeat(50));

    for language in registry.languages() {
        println!(
            "{:<15} {}",
            language,
            registry.aliases_for(language).join(", ")
        );
    }

    println!("\nTotal: {} languages", registry.len());
    Ok(())
}
