// In crates/engine/src/seed.rs

use app_config::DemoSettings;
use chrono::{Duration, NaiveDate};
use core_types::catalog::Catalog;
use core_types::{Reaction, TradeDraft};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

const DEMO_NOTES: &[&str] = &[
    "Followed the plan.",
    "Entered early, should have waited for the retest.",
    "Scaled out at first target.",
    "Stopped out on news spike.",
    "Trend continuation, clean entry.",
];

/// Builds a reproducible synthetic journal for demonstrations.
///
/// Trades land on random days within `days_back` of `today`, so they arrive
/// out of chronological order the same way hand-entered trades can.
pub fn demo_drafts(settings: &DemoSettings, catalog: &Catalog, today: NaiveDate) -> Vec<TradeDraft> {
    let mut rng = StdRng::seed_from_u64(settings.seed);

    (0..settings.record_count)
        .map(|_| {
            let days_ago = rng.gen_range(0..=settings.days_back);
            let profit_percent = Decimal::new(rng.gen_range(-500..=800), 2);
            let total_stake = Decimal::new(rng.gen_range(10_000..=500_000), 2);
            let profit_amount = (total_stake * profit_percent / Decimal::ONE_HUNDRED).round_dp(2);
            let reaction = if profit_amount > Decimal::ZERO {
                Reaction::Approve
            } else {
                Reaction::Disapprove
            };

            TradeDraft {
                date: today - Duration::days(i64::from(days_ago)),
                platform: pick(&mut rng, &catalog.platforms),
                instrument: pick(&mut rng, &catalog.instruments),
                trade_type: pick(&mut rng, &catalog.trade_types),
                profit_percent,
                profit_amount,
                total_stake,
                notes: pick_str(&mut rng, DEMO_NOTES),
                screenshot: None,
                reaction,
                reaction_comment: None,
            }
        })
        .collect()
}

fn pick(rng: &mut StdRng, values: &[String]) -> String {
    values.choose(rng).cloned().unwrap_or_else(|| "Unknown".into())
}

fn pick_str(rng: &mut StdRng, values: &[&str]) -> String {
    values.choose(rng).map(|v| v.to_string()).unwrap_or_default()
}
