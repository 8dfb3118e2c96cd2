use app_utils::{normalize_domain, Quirks};
use colored::*;

pub fn lookup(file_path: &str, domain: &str) -> anyhow::Result<()> {
    let quirks = Quirks::from_path(file_path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", file_path, e))?;

    let site = quirks
        .lookup(domain)
        .ok_or_else(|| anyhow::anyhow!("No password rules for '{}'", domain))?;

    if normalize_domain(domain).as_deref() != Some(site.domain.as_str()) {
        println!("{} {} (via {})", "Domain:".bold(), domain, site.domain.cyan());
    } else {
        println!("{} {}", "Domain:".bold(), site.domain.cyan());
    }
    println!("{} {}", "Rule:".bold(), site.rule);
    for diagnostic in &site.diagnostics {
        println!("  {} {}", "⚠".yellow(), diagnostic);
    }

    Ok(())
}

pub fn check(file_path: &str) -> anyhow::Result<()> {
    println!("{} {}", "Checking quirks:".bold(), file_path);

    let quirks = Quirks::from_path(file_path)
        .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", file_path, e))?;

    println!("  {} Sites: {}", "✓".green(), quirks.len());

    let mut warnings = 0;
    for site in quirks.iter() {
        for diagnostic in &site.diagnostics {
            println!("  {} {}: {}", "⚠".yellow(), site.domain, diagnostic);
            warnings += 1;
        }
        if site.rule.to_string().is_empty() {
            println!("  {} {}: rule constrains nothing", "⚠".yellow(), site.domain);
            warnings += 1;
        }
    }

    // Summary
    println!();
    if warnings == 0 {
        println!("{} Quirks file is clean!", "✓".green().bold());
    } else {
        println!(
            "{} Quirks file loaded with {} warning(s)",
            "⚠".yellow().bold(),
            warnings
        );
    }

    Ok(())
}
