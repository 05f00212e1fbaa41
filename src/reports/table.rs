//! Plain-text tables
//!
//! Fixed-width renderings of the derived tables for terminal output.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::models::{NormalizedFood, SexCounts};
use crate::names::{NameShare, TopNames};

const IDENTIFIER_WIDTH: usize = 40;

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Render foods with the normalized columns; density shows as `-` when unset
pub fn format_food_table(foods: &[NormalizedFood], limit: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<w$}  {:>8}  {:>8}  {:>9}  {:>8}  {:>16}",
        "identifier",
        "kcal",
        "fat_g",
        "protein_g",
        "carbs_g",
        "protein_per_kcal",
        w = IDENTIFIER_WIDTH
    );

    for food in foods.iter().take(limit) {
        let density = food
            .protein_per_kcal
            .map(|d| format!("{:.4}", d))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<w$}  {:>8.1}  {:>8.2}  {:>9.2}  {:>8.2}  {:>16}",
            fit(&food.identifier, IDENTIFIER_WIDTH),
            food.kcal,
            food.fat_g,
            food.protein_g,
            food.carbs_g,
            density,
            w = IDENTIFIER_WIDTH
        );
    }

    if foods.len() > limit {
        let _ = writeln!(out, "... {} more", foods.len() - limit);
    }
    out
}

/// Year | F | M table
pub fn format_sex_counts_table(rows: &BTreeMap<u16, SexCounts>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6}  {:>10}  {:>10}", "year", "F", "M");
    for (year, counts) in rows {
        let _ = writeln!(out, "{:<6}  {:>10}  {:>10}", year, counts.female, counts.male);
    }
    out
}

/// Year | top female | top male table
pub fn format_top_names_table(rows: &BTreeMap<u16, TopNames>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6}  {:<15}  {:<15}", "year", "F", "M");
    for (year, top) in rows {
        let _ = writeln!(
            out,
            "{:<6}  {:<15}  {:<15}",
            year,
            top.female.as_deref().unwrap_or("-"),
            top.male.as_deref().unwrap_or("-")
        );
    }
    out
}

/// Year | unique names table
pub fn format_unique_names_table(rows: &BTreeMap<u16, usize>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<6}  {:>8}", "year", "names");
    for (year, n) in rows {
        let _ = writeln!(out, "{:<6}  {:>8}", year, n);
    }
    out
}

/// Name | years on top | % of years
pub fn format_name_shares_table(shares: &[NameShare]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<15}  {:>6}  {:>7}", "name", "years", "pct");
    for share in shares {
        let _ = writeln!(out, "{:<15}  {:>6}  {:>6.2}%", share.name, share.years, share.pct);
    }
    out
}
