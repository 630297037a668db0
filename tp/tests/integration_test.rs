//! Integration tests for the trip planner
//!
//! These tests drive the planner session end to end and run the `tp` binary.

use std::path::PathBuf;
use std::time::Duration;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;
use tripplanner::domain::{BudgetTier, Interest, TripDraft};
use tripplanner::planner::{MISSING_FIELDS_NOTICE, PlannerError, PlannerSession, Tab};

fn rome_draft() -> TripDraft {
    let mut draft = TripDraft::default();
    draft.set_destination("Rome, Italy");
    draft.set_start_date("2024-06-01").expect("valid start");
    draft.set_end_date("2024-06-04").expect("valid end");
    draft
}

// =============================================================================
// Session Tests
// =============================================================================

#[tokio::test]
async fn test_generate_switches_to_itinerary() {
    let mut session = PlannerSession::new(rome_draft(), Duration::ZERO);
    assert_eq!(session.active_tab(), Tab::Plan);

    let plan = session.generate().await.expect("plan generated").clone();
    assert_eq!(plan.duration_days, 3);
    assert_eq!(plan.daily_budget, 175);
    assert_eq!(plan.total_budget(), 525);
    assert_eq!(plan.itinerary.len(), 3);
    assert_eq!(session.active_tab(), Tab::Itinerary);
    assert!(!session.is_generating());
}

#[tokio::test]
async fn test_missing_fields_leave_session_untouched() {
    let mut draft = rome_draft();
    draft.set_end_date("").expect("clearing is allowed");
    let mut session = PlannerSession::new(draft, Duration::ZERO);

    let err = session.generate().await.expect_err("end date is missing");
    assert!(matches!(err, PlannerError::MissingRequiredFields(_)));
    assert_eq!(session.notice(), Some(MISSING_FIELDS_NOTICE));
    assert!(session.plan().is_none());
    assert_eq!(session.active_tab(), Tab::Plan);
    assert!(!session.is_generating());
}

#[tokio::test]
async fn test_regeneration_replaces_plan() {
    let mut session = PlannerSession::new(rome_draft(), Duration::ZERO);
    session.generate().await.expect("first plan");

    session.draft_mut().set_destination("Tokyo, Japan");
    session.draft_mut().set_budget(BudgetTier::Luxury);
    session.draft_mut().toggle_interest(Interest::Food);
    session.select_tab(Tab::Plan);

    let plan = session.generate().await.expect("second plan");
    assert_eq!(plan.destination, "Tokyo, Japan");
    assert_eq!(plan.total_budget(), 1050);
    assert_eq!(session.active_tab(), Tab::Itinerary);
}

#[tokio::test]
async fn test_second_generation_rejected_while_pending() {
    let mut session = PlannerSession::new(rome_draft(), Duration::from_millis(50));
    let ticket = session.begin_generation().expect("first generation starts");

    let err = session.begin_generation().expect_err("guard rejects re-entry");
    assert_eq!(err, PlannerError::GenerationInProgress);
    assert!(session.notice().is_none());

    // Edits after the start do not leak into the pending plan
    session.draft_mut().set_destination("Paris, France");
    tokio::time::sleep(session.generation_delay()).await;
    session.complete_generation(ticket.build());

    let plan = session.plan().expect("plan stored");
    assert_eq!(plan.destination, "Rome, Italy");
}

// =============================================================================
// CLI Tests
// =============================================================================

/// A `tp` command isolated from the user's config and log directories
fn tp(home: &TempDir) -> Command {
    let config: PathBuf = home.path().join("tripplanner.yml");
    std::fs::write(&config, "generation:\n  delay-ms: 0\n").expect("write config");

    let mut cmd = Command::cargo_bin("tp").expect("binary built");
    cmd.env("XDG_DATA_HOME", home.path())
        .env("HOME", home.path())
        .env("NO_COLOR", "1")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn test_cli_generate_text() {
    let home = TempDir::new().expect("Failed to create temp dir");
    tp(&home)
        .args(["generate", "-d", "Rome, Italy", "-s", "2024-06-01", "-e", "2024-06-04"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your 3-Day Trip to Rome, Italy"))
        .stdout(predicate::str::contains("$525 total"))
        .stdout(predicate::str::contains("Day 1: Arrival & City Exploration"));
}

#[test]
fn test_cli_generate_json_with_same_day_trip() {
    let home = TempDir::new().expect("Failed to create temp dir");
    let output = tp(&home)
        .args([
            "generate", "-d", "Bali", "-s", "2024-06-01", "-e", "2024-06-01", "-b", "budget", "--no-delay", "-f",
            "json",
        ])
        .output()
        .expect("run tp");
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(value["destination"], "Bali");
    assert_eq!(value["duration_days"], 1);
    assert_eq!(value["daily_budget"], 75);
}

#[test]
fn test_cli_generate_missing_destination() {
    let home = TempDir::new().expect("Failed to create temp dir");
    tp(&home)
        .args(["generate", "-s", "2024-06-01", "-e", "2024-06-04"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(MISSING_FIELDS_NOTICE));
}

#[test]
fn test_cli_generate_rejects_bad_date() {
    let home = TempDir::new().expect("Failed to create temp dir");
    tp(&home)
        .args(["generate", "-d", "Rome", "-s", "June 1st", "-e", "2024-06-04"])
        .assert()
        .failure();
}

#[test]
fn test_cli_options() {
    let home = TempDir::new().expect("Failed to create temp dir");
    tp(&home)
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris, France"))
        .stdout(predicate::str::contains("Culture & History"))
        .stdout(predicate::str::contains("$350/day"));
}
