//! Plain-text rendering of dashboard figures

use satsboard_core::{
    format_grouped_digits, format_grouped_integer, format_magnitude_word,
    pluralize_grouped_if_not_one, SupplySchedule,
};
use satsboard_economics::{
    ActivationCountdown, DashboardSnapshot, DifficultyAdjustmentCountdown, HalvingCountdown,
};

const LABEL_WIDTH: usize = 22;

const UNDEFINED: &str = "n/a";

/// Every figure of a snapshot, one per line
pub fn render_snapshot(snapshot: &DashboardSnapshot, currency_symbol: &str) -> String {
    let mut rows = vec![
        row("Block height", format_grouped_integer(snapshot.block_height)),
        row(
            "Mined supply",
            format!(
                "{} ({}% of 21 million)",
                snapshot.mined_supply, snapshot.percent_mined
            ),
        ),
        row("Max supply", snapshot.max_supply.to_string()),
        row("Coins left to mine", snapshot.coins_left_to_mine.to_string()),
        row("Block reward", snapshot.block_reward.to_string()),
        row(
            "Annual inflation",
            defined_or_na(snapshot.inflation_rate_percent.map(|rate| format!("{}%", rate))),
        ),
        row(
            "Stock to flow",
            defined_or_na(snapshot.stock_to_flow.map(|ratio| ratio.to_string())),
        ),
        row(
            "Gold parity",
            defined_or_na(
                snapshot
                    .gold_pounds_per_coin
                    .map(|pounds| format!("{} lb per coin", pounds)),
            ),
        ),
        row(
            "Sats per person",
            format!(
                "{} among {} people",
                pluralize_grouped_if_not_one(
                    snapshot.sats_per_person.to_sat().max(0) as u64,
                    "sat"
                ),
                format_magnitude_word(snapshot.population as f64)
            ),
        ),
        row("Next halving", halving_summary(&snapshot.halving)),
        row(
            "Difficulty adjustment",
            difficulty_summary(&snapshot.difficulty_adjustment),
        ),
        row("Taproot", activation_summary(&snapshot.taproot)),
    ];

    if let Some(market) = &snapshot.market {
        rows.push(row(
            "Price",
            format!("{}{}", currency_symbol, format_grouped_digits(market.price.value())),
        ));
        rows.push(row(
            "Market cap",
            format!("{}{}", currency_symbol, format_magnitude_word(market.market_cap)),
        ));
        rows.push(row(
            &format!("Sats per {}1", currency_symbol),
            pluralize_grouped_if_not_one(
                market.sats_per_unit_of_currency.max(0) as u64,
                "sat",
            ),
        ));
    }

    render_rows(&rows)
}

/// Epoch, current reward and the next halving for one height
pub fn render_halving(schedule: &SupplySchedule, block_height: u64) -> String {
    let countdown = HalvingCountdown::at(schedule, block_height);
    let rows = [
        row("Block height", format_grouped_integer(block_height)),
        row(
            "Halving epoch",
            schedule.halving_epoch(block_height).to_string(),
        ),
        row(
            "Block reward",
            schedule.block_reward_at_height(block_height).to_string(),
        ),
        row("Next halving", halving_summary(&countdown)),
    ];
    render_rows(&rows)
}

fn halving_summary(countdown: &HalvingCountdown) -> String {
    match countdown {
        HalvingCountdown::Pending {
            blocks_remaining,
            next,
            ..
        } => format!(
            "block {} in {} (~{}), reward {}",
            format_grouped_integer(next.block_height),
            pluralize_grouped_if_not_one(*blocks_remaining, "block"),
            countdown.duration_phrase().unwrap_or_default(),
            countdown.reward_phrase().unwrap_or_default()
        ),
        HalvingCountdown::Complete => "none, every reward has been paid".to_string(),
    }
}

fn difficulty_summary(countdown: &DifficultyAdjustmentCountdown) -> String {
    format!(
        "in {} (~{})",
        pluralize_grouped_if_not_one(countdown.blocks_remaining, "block"),
        countdown.duration_phrase()
    )
}

fn activation_summary(countdown: &ActivationCountdown) -> String {
    match countdown {
        ActivationCountdown::Pending {
            blocks_remaining, ..
        } => format!(
            "in {} (~{})",
            pluralize_grouped_if_not_one(*blocks_remaining, "block"),
            countdown.duration_phrase().unwrap_or_default()
        ),
        ActivationCountdown::Activated { target_height } => format!(
            "activated at block {}",
            format_grouped_integer(*target_height)
        ),
    }
}

fn defined_or_na(value: Option<String>) -> String {
    value.unwrap_or_else(|| UNDEFINED.to_string())
}

fn row(label: &str, value: String) -> (String, String) {
    (label.to_string(), value)
}

fn render_rows(rows: &[(String, String)]) -> String {
    rows.iter()
        .map(|(label, value)| format!("{:<width$}{}", label, value, width = LABEL_WIDTH))
        .collect::<Vec<_>>()
        .join("\n")
}
