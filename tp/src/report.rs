//! Printed output for the non-interactive commands

use colored::*;
use eyre::Result;
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::domain::catalog::{MAX_TRAVELER_CHOICE, SAMPLE_DESTINATIONS};
use crate::domain::{BudgetTier, GeneratedPlan, Interest};

/// Render a value as JSON or YAML
fn serialize<T: Serialize>(value: &T, format: OutputFormat) -> Result<Option<String>> {
    Ok(match format {
        OutputFormat::Json => Some(serde_json::to_string_pretty(value)?),
        OutputFormat::Yaml => Some(serde_yaml::to_string(value)?),
        OutputFormat::Text => None,
    })
}

/// Format a generated plan for the terminal
pub fn format_plan(plan: &GeneratedPlan, format: OutputFormat) -> Result<String> {
    if let Some(out) = serialize(plan, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", plan.headline().bold()));
    out.push_str(&format!(
        "Estimated budget: ${} total (${}/day)\n",
        plan.total_budget(),
        plan.daily_budget
    ));

    for day in &plan.itinerary {
        out.push('\n');
        out.push_str(&format!("{}\n", format!("Day {}: {}", day.day, day.title).cyan().bold()));
        for activity in &day.activities {
            out.push_str(&format!(
                "  {} {:>8}  {}\n",
                activity.kind.glyph(),
                activity.time.blue(),
                activity.description
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Hotels".bold()));
    for hotel in &plan.recommendations.hotels {
        out.push_str(&format!(
            "  {} ★ {:.1}  {}  {}\n",
            hotel.name,
            hotel.rating,
            hotel.nightly_price.green(),
            hotel.features.join(", ").dimmed()
        ));
    }

    out.push('\n');
    out.push_str(&format!("{}\n", "Restaurants".bold()));
    for restaurant in &plan.recommendations.restaurants {
        out.push_str(&format!(
            "  {} ★ {:.1}  {}  {}\n",
            restaurant.name,
            restaurant.rating,
            restaurant.cuisine.dimmed(),
            restaurant.price_tier.green()
        ));
    }

    Ok(out)
}

#[derive(Debug, Serialize)]
struct BudgetOption {
    tier: BudgetTier,
    label: &'static str,
    range: &'static str,
    daily_rate: u32,
}

#[derive(Debug, Serialize)]
struct InterestOption {
    id: &'static str,
    label: &'static str,
}

#[derive(Debug, Serialize)]
struct FormOptions {
    destinations: Vec<&'static str>,
    interests: Vec<InterestOption>,
    budgets: Vec<BudgetOption>,
    max_travelers: u32,
}

/// Format the option lists the form offers
pub fn format_options(format: OutputFormat) -> Result<String> {
    let options = FormOptions {
        destinations: SAMPLE_DESTINATIONS.to_vec(),
        interests: Interest::ALL
            .into_iter()
            .map(|i| InterestOption {
                id: i.id(),
                label: i.label(),
            })
            .collect(),
        budgets: BudgetTier::ALL
            .into_iter()
            .map(|tier| BudgetOption {
                tier,
                label: tier.label(),
                range: tier.range(),
                daily_rate: tier.daily_rate(),
            })
            .collect(),
        max_travelers: MAX_TRAVELER_CHOICE,
    };
    if let Some(out) = serialize(&options, format)? {
        return Ok(out);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", "Destinations".bold()));
    for dest in &options.destinations {
        out.push_str(&format!("  {}\n", dest));
    }
    out.push_str(&format!("\n{}\n", "Interests".bold()));
    for interest in &options.interests {
        out.push_str(&format!("  {:<10} {}\n", interest.id.cyan(), interest.label));
    }
    out.push_str(&format!("\n{}\n", "Budget tiers".bold()));
    for budget in &options.budgets {
        out.push_str(&format!(
            "  {:<8} {:<14} ${}/day\n",
            budget.tier.to_string().cyan(),
            budget.range,
            budget.daily_rate
        ));
    }
    out.push_str(&format!("\nTravelers: 1-{}\n", options.max_travelers));
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TripDraft;
    use crate::planner::generate_plan;

    fn rome() -> GeneratedPlan {
        let mut draft = TripDraft::default();
        draft.set_destination("Rome, Italy");
        draft.set_start_date("2024-06-01").unwrap();
        draft.set_end_date("2024-06-04").unwrap();
        generate_plan(&draft).unwrap()
    }

    #[test]
    fn test_text_plan() {
        colored::control::set_override(false);
        let out = format_plan(&rome(), OutputFormat::Text).unwrap();
        assert!(out.contains("Your 3-Day Trip to Rome, Italy"));
        assert!(out.contains("Estimated budget: $525 total ($175/day)"));
        assert!(out.contains("Day 3: Adventure Day"));
        assert!(out.contains("Boutique Central ★ 4.5"));
    }

    #[test]
    fn test_json_plan() {
        let out = format_plan(&rome(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["duration_days"], 3);
        assert_eq!(value["daily_budget"], 175);
        assert_eq!(value["itinerary"][0]["activities"][0]["kind"], "transport");
    }

    #[test]
    fn test_yaml_plan() {
        let out = format_plan(&rome(), OutputFormat::Yaml).unwrap();
        let plan: GeneratedPlan = serde_yaml::from_str(&out).unwrap();
        assert_eq!(plan, rome());
    }

    #[test]
    fn test_json_options() {
        let out = format_options(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["destinations"].as_array().unwrap().len(), 8);
        assert_eq!(value["budgets"][2]["tier"], "luxury");
        assert_eq!(value["budgets"][2]["daily_rate"], 350);
        assert_eq!(value["max_travelers"], 8);
    }
}
