use crate::Format;
use colored::*;
use core_rules::{tokenize, CharacterClass, Rule};

pub fn parse(raw: &str, format: Format) -> anyhow::Result<()> {
    let (rule, diagnostics) = Rule::parse_with_diagnostics(raw);

    match format {
        Format::Text => {
            println!("{} {}", "Rule:".bold(), rule);
            print_field("minlength", rule.min_length());
            print_field("maxlength", rule.max_length());
            print_field("max-consecutive", rule.max_consecutive());
            print_field("x-expires-after", rule.expires_after());
            match rule.required() {
                Some(classes) => {
                    for class in classes {
                        println!("  {} required: {} ({} characters)", "✓".green(), class, class.len());
                    }
                }
                None => println!("  {} required: -", "·".dimmed()),
            }
            for diagnostic in &diagnostics {
                println!("  {} {}", "⚠".yellow(), diagnostic);
            }
        }
        Format::Json => {
            let canonical = rule.to_string();
            let document = serde_json::json!({
                "rule": rule,
                "canonical": canonical,
                "diagnostics": diagnostics,
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Format::Toml => {
            print!("{}", toml::to_string(&rule)?);
            for diagnostic in &diagnostics {
                tracing::warn!("{}", diagnostic);
            }
        }
    }

    Ok(())
}

fn print_field(name: &str, value: Option<impl std::fmt::Display>) {
    match value {
        Some(value) => println!("  {} {}: {}", "✓".green(), name, value),
        None => println!("  {} {}: -", "·".dimmed(), name),
    }
}

pub fn tokens(raw: &str) {
    let map = tokenize(raw);
    if map.is_empty() {
        println!("{}", "No properties".dimmed());
        return;
    }

    for (name, values) in map.iter() {
        println!("{} {}", format!("{}:", name).bold(), values.join(" | "));
    }
}

pub fn class(spec: &str, limit: usize) -> anyhow::Result<()> {
    let class = CharacterClass::parse(spec)?;

    println!("{} {}", "Class:".bold(), class);
    println!("  {} Members: {}", "✓".green(), class.len());

    let shown: String = class
        .included()
        .take(limit)
        .map(|ch| ch.escape_debug().to_string())
        .collect();
    println!("  {} {}", "✓".green(), shown);
    if class.len() > limit {
        println!("  {} {} more not shown", "·".dimmed(), class.len() - limit);
    }

    Ok(())
}
