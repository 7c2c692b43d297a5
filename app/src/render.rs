// In app/src/render.rs

use events::format::{format_amount, format_percent};
use events::{BreakdownRow, DashboardTiles, FeedEntry, WindowTable};
use std::fmt::Write;

const RULE: &str = "------------------------------------------------------------------------------";

fn row_line(out: &mut String, row: &BreakdownRow, currency: &str) {
    let _ = writeln!(
        out,
        "{:<16} {:>20} {:>9} {:>20} {:>7.1}% {:>6}",
        row.key,
        format_amount(row.total_profit, currency),
        format_percent(row.avg_profit_pct),
        format_amount(row.total_principal, currency),
        row.win_rate_pct,
        row.trade_count,
    );
}

fn header(out: &mut String, first: &str) {
    let _ = writeln!(
        out,
        "{:<16} {:>20} {:>9} {:>20} {:>8} {:>6}",
        first, "Profit", "Avg %", "Principal", "Win", "Trades"
    );
    let _ = writeln!(out, "{RULE}");
}

pub fn render_tiles(tiles: &DashboardTiles, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Trading Journal as of {}", tiles.reference_date);
    header(&mut out, "Window");
    for tile in &tiles.tiles {
        row_line(&mut out, tile, currency);
    }
    out
}

pub fn render_window(table: &WindowTable, currency: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n== {} ==", table.window);
    if table.totals.trade_count == 0 {
        let _ = writeln!(out, "No trades in this window.");
        return out;
    }

    header(&mut out, "Platform");
    for row in &table.platforms {
        row_line(&mut out, row, currency);
    }
    let _ = writeln!(out);
    header(&mut out, "Instrument");
    for row in &table.instruments {
        row_line(&mut out, row, currency);
    }
    out
}

pub fn render_feed(entries: &[FeedEntry]) -> String {
    let mut out = String::new();
    if entries.is_empty() {
        let _ = writeln!(out, "No updates yet. Add your first trading update!");
        return out;
    }

    for entry in entries {
        let _ = writeln!(out, "📅 {}  {} · {} · {}", entry.date, entry.platform, entry.instrument, entry.trade_type);
        let _ = writeln!(
            out,
            "   Profit {} ({})   Stake {}",
            entry.profit_amount, entry.profit_percent, entry.total_stake
        );
        if !entry.notes.is_empty() {
            let _ = writeln!(out, "   Notes: {}", entry.notes);
        }
        if entry.has_screenshot {
            let _ = writeln!(out, "   [screenshot attached]");
        }
        let _ = writeln!(
            out,
            "   {} {}",
            entry.reaction,
            entry.reaction_comment.as_deref().unwrap_or("")
        );
        let _ = writeln!(out, "{RULE}");
    }
    out
}
