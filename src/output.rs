use analytics::FrontierReport;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Table};
use optimizer::WeightGrid;

/// Report numbers are shown with two decimals.
fn num(value: f64) -> String {
    format!("{value:.2}")
}

fn table_with_header<I, S>(header: I) -> Table
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(
        header
            .into_iter()
            .map(|h| Cell::new(h.into()).add_attribute(Attribute::Bold)),
    );
    table
}

/// Period returns next to their index labels; the oldest row has none.
pub fn returns_table(report: &FrontierReport) -> Table {
    let mut table = table_with_header([
        "Label".to_string(),
        format!("{} Return (%)", report.asset_a),
        format!("{} Return (%)", report.asset_b),
    ]);
    let cell = |values: &[f64], i: usize| values.get(i).map(|v| num(*v)).unwrap_or_default();
    for (i, label) in report.labels.iter().enumerate() {
        table.add_row(vec![
            label.clone(),
            cell(&report.returns_a.returns, i),
            cell(&report.returns_b.returns, i),
        ]);
    }
    table
}

pub fn summary_table(report: &FrontierReport) -> Table {
    let m = &report.moments;
    let mut table = table_with_header([
        String::new(),
        report.asset_a.clone(),
        report.asset_b.clone(),
    ]);
    table
        .add_row(vec!["Mean".to_string(), num(m.mean_a), num(m.mean_b)])
        .add_row(vec![
            "Standard Deviation".to_string(),
            num(m.std_a),
            num(m.std_b),
        ])
        .add_row(vec!["Covariance".to_string(), num(m.covariance), String::new()])
        .add_row(vec![
            "Risk Free Rate".to_string(),
            num(m.risk_free_rate),
            String::new(),
        ]);
    table
}

/// The weight sweep with the tangency portfolio marked by `*`.
pub fn frontier_table(report: &FrontierReport) -> Table {
    let mut table = table_with_header([
        format!("{} Weight (%)", report.asset_a),
        format!("{} Weight (%)", report.asset_b),
        "Portfolio Return".to_string(),
        "Portfolio Risk".to_string(),
        "Sharpe Ratio".to_string(),
        "Tangency".to_string(),
    ]);
    for (i, p) in report.frontier.iter().enumerate() {
        let marker = if i == report.tangency_index { "*" } else { "" };
        table.add_row(vec![
            num(p.weights.weight_a),
            num(p.weights.weight_b),
            num(p.expected_return),
            num(p.risk),
            num(p.sharpe_ratio),
            marker.to_string(),
        ]);
    }
    table
}

pub fn cal_table(report: &FrontierReport) -> Table {
    let mut table = table_with_header(["Weight", "STD", "Return"]);
    for p in &report.capital_allocation_line {
        table.add_row(vec![p.label.clone(), num(p.risk), num(p.expected_return)]);
    }
    table
}

pub fn grid_table(grid: &WeightGrid, asset_a: &str, asset_b: &str) -> Table {
    let mut table = table_with_header([
        "#".to_string(),
        format!("{asset_a} Weight (%)"),
        format!("{asset_b} Weight (%)"),
    ]);
    for (i, pair) in grid.iter().enumerate() {
        table.add_row(vec![i.to_string(), num(pair.weight_a), num(pair.weight_b)]);
    }
    table
}

/// All report tables, each under a title line.
pub fn render_report(report: &FrontierReport) -> String {
    let sections = [
        ("Daily Returns", returns_table(report)),
        ("Summary Statistics", summary_table(report)),
        ("Portfolio Frontier", frontier_table(report)),
        ("Capital Allocation Line", cal_table(report)),
    ];
    sections
        .iter()
        .map(|(title, table)| format!("{title}\n{table}"))
        .collect::<Vec<_>>()
        .join("\n\n")
}
