use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{
    catalog::ApplianceRecord,
    estimate::{CURVE_MONTHS, Comparison, CostEstimate, Side, Verdict},
    quantity::cost::Cost,
    tariff::TariffRecord,
};

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table
}

#[must_use]
pub fn build_comparison_table(comparison: &Comparison<'_>) -> Table {
    let winner = match comparison.verdict {
        Verdict::Winner { side, .. } => Some(side),
        Verdict::Identical | Verdict::Tie => None,
    };
    let end_month = *CURVE_MONTHS.end();

    let mut table = new_table();
    table.set_header(vec!["", "Appliance", "Price", "Energy/month", "After 3 years"]);
    for (side, estimate) in [(Side::A, comparison.a), (Side::B, comparison.b)] {
        let color = match winner {
            Some(winner) if winner == side => Color::Green,
            Some(_) => Color::Red,
            None => Color::Reset,
        };
        table.add_row(vec![
            Cell::new(side).add_attribute(Attribute::Bold),
            Cell::new(estimate),
            Cell::new(estimate.purchase_price).set_alignment(CellAlignment::Right),
            Cell::new(estimate.monthly_cost).set_alignment(CellAlignment::Right).fg(color),
            Cell::new(estimate.accumulated_cost(end_month))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
        ]);
    }
    table
}

/// Accumulated spending of both options, every `step` months.
#[must_use]
pub fn build_curve_table(a: &CostEstimate, b: &CostEstimate, step: usize) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Month", "A", "B"]);
    for ((month, cost_a), (_, cost_b)) in
        a.cumulative_costs().zip(b.cumulative_costs()).step_by(step.max(1))
    {
        let color = |cost: Cost, other: Cost| if cost <= other { Color::Green } else { Color::Reset };
        table.add_row(vec![
            Cell::new(month).add_attribute(Attribute::Dim),
            Cell::new(cost_a).set_alignment(CellAlignment::Right).fg(color(cost_a, cost_b)),
            Cell::new(cost_b).set_alignment(CellAlignment::Right).fg(color(cost_b, cost_a)),
        ]);
    }
    table
}

#[must_use]
pub fn build_tariffs_table(records: &[&TariffRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["State", "Utility", "Base rate"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.state).add_attribute(Attribute::Dim),
            Cell::new(&record.utility),
            Cell::new(record.base_rate).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

#[must_use]
pub fn build_models_table(records: &[&ApplianceRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Brand", "Model", "Capacity", "Consumption/year", "IDRS"]);
    for record in records {
        table.add_row(vec![
            Cell::new(&record.brand).add_attribute(Attribute::Dim),
            Cell::new(&record.model),
            Cell::new(record.btu.map_or_else(String::new, |btu| btu.to_string()))
                .set_alignment(CellAlignment::Right),
            Cell::new(
                record.annual_consumption.map_or_else(String::new, |consumption| {
                    consumption.to_string()
                }),
            )
            .set_alignment(CellAlignment::Right),
            Cell::new(&record.efficiency_label).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

/// Single-column listing, used for the brand and capacity drill-down.
#[must_use]
pub fn build_list_table<T: ToString>(header: &str, items: impl IntoIterator<Item = T>) -> Table {
    let mut table = new_table();
    table.set_header(vec![header]);
    for item in items {
        let text = item.to_string();
        table.add_row(vec![if text.is_empty() {
            Cell::new("(empty)").add_attribute(Attribute::Dim)
        } else {
            Cell::new(text)
        }]);
    }
    table
}
