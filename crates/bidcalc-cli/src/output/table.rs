use bidcalc_core::bid::{round_money, BidBreakdown};
use rust_decimal::Decimal;

const LABEL_WIDTH: usize = 20;

pub fn print(breakdown: &BidBreakdown, verbose: bool) {
    println!("=== Job Pricing Summary: {} ===\n", breakdown.job_type);

    row("Material Cost", breakdown.material_cost);
    if verbose {
        for line in &breakdown.material_lines {
            println!(
                "    {:<width$}{:>12}  ({})",
                line.label,
                money(line.amount),
                line.detail,
                width = LABEL_WIDTH - 2
            );
        }
    }
    row("Labor Hours", breakdown.labor_hours);
    row("Labor Cost", breakdown.labor_cost);

    row("Additional Costs", breakdown.total_additional_costs());
    for cost in &breakdown.additional_costs {
        println!(
            "    {:<width$}{:>12}",
            cost.label,
            money(cost.amount),
            width = LABEL_WIDTH - 2
        );
    }

    row("Travel Cost", breakdown.travel_cost);
    row("Lodging Cost", breakdown.lodging_cost);
    row("Total Cost", breakdown.total_cost);
    row("Net Profit", breakdown.net_profit);
    row("Bid Price", breakdown.bid_price);
    row("Profit Margin (%)", breakdown.profit_margin_pct);
    println!();
}

fn row(label: &str, value: Decimal) {
    println!("  {:<width$}{:>12}", label, money(value), width = LABEL_WIDTH);
}

/// Two-decimal rendering, e.g. 9085 -> "9085.00".
fn money(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(2);
    rounded.to_string()
}
