// src/main.rs
use anyhow::Context;
use booking_form::booking::validators::DATE_INPUT_FORMAT;
use booking_form::replay::{load_scenario, run_scenario};
use booking_form::{BookingDocument, BookingForm, Clock, FixedClock, FormConfig, SystemClock};
use chrono::NaiveDate;
use dotenv::dotenv;
use std::env;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // CONFIGURATION
    // ========================================================================

    let scenario_path = env::args()
        .nth(1)
        .map(PathBuf::from)
        .context("usage: booking_form <scenario.json>")?;
    let config = FormConfig::from_env();

    // BOOKING_TODAY pins the calendar date, e.g. for reproducible replays
    match env::var("BOOKING_TODAY").ok().filter(|v| !v.trim().is_empty()) {
        Some(raw) => {
            let today = NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT)
                .with_context(|| format!("BOOKING_TODAY must be YYYY-MM-DD, got '{}'", raw))?;
            info!("Using pinned date {}", today);
            replay(scenario_path, FixedClock(today), config)
        }
        None => replay(scenario_path, SystemClock, config),
    }
}

fn replay<C: Clock>(path: PathBuf, clock: C, config: FormConfig) -> anyhow::Result<()> {
    let events = load_scenario(&path)
        .with_context(|| format!("loading scenario {}", path.display()))?;
    info!("Loaded {} events from {}", events.len(), path.display());

    let mut form = BookingForm::ready(BookingDocument::standard(), clock, config)?;
    let outcomes = run_scenario(&mut form, &events)?;

    for outcome in &outcomes {
        println!("{}", serde_json::to_string(outcome)?);
    }
    for alert in form.page().alerts() {
        info!("Confirmation shown: {}", alert);
    }

    Ok(())
}
