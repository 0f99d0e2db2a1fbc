use std::io::{self, Write};

use colored::Colorize;
use piechart::{Chart, Color, Data};
use rust_decimal::prelude::*;
use rust_decimal::{dec, Decimal};

use super::money;
use crate::valuation::{ClassValuation, PortfolioValuation};

const RULE_WIDTH: usize = 52;

/// Writes the metric block: one row per asset class with its current value
/// and colored profit delta, a warning per class with missing prices, then
/// the portfolio total.
pub fn render_metrics(out: &mut impl Write, valuation: &PortfolioValuation) -> io::Result<()> {
    writeln!(out, "{:<8} {:>16} {:>16}", "Asset", "Value", "P/L")?;
    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;

    for class in valuation.classes() {
        write_class_row(out, class)?;
    }

    writeln!(out, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(
        out,
        "{:<8} {:>16} {:>16}",
        "Total",
        money::usd(valuation.total_value()),
        colorize_delta(valuation.total_profit())
    )?;

    Ok(())
}

fn write_class_row(out: &mut impl Write, class: &ClassValuation) -> io::Result<()> {
    writeln!(
        out,
        "{:<8} {:>16} {:>16}",
        class.label,
        money::usd(class.current_value),
        colorize_delta(class.profit())
    )?;
    if !class.unpriced.is_empty() {
        writeln!(
            out,
            "{}",
            format!(
                "  warning: no current price for {}",
                class.unpriced.join(", ")
            )
            .yellow()
        )?;
    }
    Ok(())
}

fn colorize_delta(profit: Decimal) -> String {
    let formatted = money::usd_delta(profit);
    if profit >= Decimal::ZERO {
        formatted.green().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Draws the allocation pie chart with percentage-of-total labels. A zero
/// total has nothing to allocate, so the chart is skipped.
pub fn render_allocation(valuation: &PortfolioValuation) {
    println!();
    println!("{}", "Portfolio Allocation".bold());

    let total = valuation.total_value();
    if total <= Decimal::ZERO {
        println!("Nothing to chart: portfolio value is zero.");
        return;
    }

    let colors = [Color::Yellow, Color::Cyan, Color::Green];
    let mut data = Vec::new();
    for (i, class) in valuation.classes().iter().enumerate() {
        let share = (class.current_value / total * dec!(100)).round_dp(1);
        data.push(Data {
            label: format!("{} {}%", class.label, share),
            value: class.current_value.to_f64().unwrap_or(0.0) as f32,
            color: Some(colors[i % colors.len()].into()),
            fill: '•',
        });
    }

    Chart::new()
        .legend(true)
        .radius(9)
        .aspect_ratio(3)
        .draw(&data);
}
