use crate::error::DataError;
use analytics::FrontierReport;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::{info, info_span};

pub const RETURNS_FILE: &str = "returns.csv";
pub const SUMMARY_FILE: &str = "summary.csv";
pub const FRONTIER_FILE: &str = "frontier.csv";
pub const CAL_FILE: &str = "cal.csv";
pub const JSON_FILE: &str = "report.json";

/// Writes every table of `report` into `dir`, creating it if needed.
///
/// Returns the paths written, in the order above.
pub fn write_report(dir: &Path, report: &FrontierReport) -> Result<Vec<PathBuf>, DataError> {
    let _span = info_span!("write_report", dir = %dir.display()).entered();
    info!("Writing report files.");

    fs::create_dir_all(dir).map_err(|source| DataError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let written = vec![
        write_table(dir.join(RETURNS_FILE), returns_rows(report))?,
        write_table(dir.join(SUMMARY_FILE), summary_rows(report))?,
        write_table(dir.join(FRONTIER_FILE), frontier_rows(report))?,
        write_table(dir.join(CAL_FILE), cal_rows(report))?,
        write_json(dir.join(JSON_FILE), report)?,
    ];

    info!(files = written.len(), "Report files written.");
    Ok(written)
}

fn write_table(path: PathBuf, rows: Vec<Vec<String>>) -> Result<PathBuf, DataError> {
    let mut writer = csv::Writer::from_path(&path)?;
    for row in rows {
        writer.write_record(&row)?;
    }
    writer.flush().map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(path)
}

fn write_json(path: PathBuf, report: &FrontierReport) -> Result<PathBuf, DataError> {
    let file = File::create(&path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(path)
}

/// One row per price observation. The oldest observation has no return, so
/// its cells are left empty.
fn returns_rows(report: &FrontierReport) -> Vec<Vec<String>> {
    let header = vec![
        "Label".to_string(),
        format!("{} Return (%)", report.asset_a),
        format!("{} Return (%)", report.asset_b),
    ];
    let cell = |values: &[f64], i: usize| values.get(i).map(f64::to_string).unwrap_or_default();

    std::iter::once(header)
        .chain(report.labels.iter().enumerate().map(|(i, label)| {
            vec![
                label.clone(),
                cell(&report.returns_a.returns, i),
                cell(&report.returns_b.returns, i),
            ]
        }))
        .collect()
}

fn summary_rows(report: &FrontierReport) -> Vec<Vec<String>> {
    let m = &report.moments;
    vec![
        vec![
            String::new(),
            report.asset_a.clone(),
            report.asset_b.clone(),
        ],
        vec!["Mean".into(), m.mean_a.to_string(), m.mean_b.to_string()],
        vec![
            "Standard Deviation".into(),
            m.std_a.to_string(),
            m.std_b.to_string(),
        ],
        vec!["Covariance".into(), m.covariance.to_string(), String::new()],
        vec![
            "Risk Free Rate".into(),
            m.risk_free_rate.to_string(),
            String::new(),
        ],
    ]
}

fn frontier_rows(report: &FrontierReport) -> Vec<Vec<String>> {
    let header = vec![
        format!("{} Weight (%)", report.asset_a),
        format!("{} Weight (%)", report.asset_b),
        "Portfolio Return".to_string(),
        "Portfolio Risk".to_string(),
        "Sharpe Ratio".to_string(),
        "Tangency".to_string(),
    ];
    std::iter::once(header)
        .chain(report.frontier.iter().enumerate().map(|(i, p)| {
            vec![
                p.weights.weight_a.to_string(),
                p.weights.weight_b.to_string(),
                p.expected_return.to_string(),
                p.risk.to_string(),
                p.sharpe_ratio.to_string(),
                (i == report.tangency_index).to_string(),
            ]
        }))
        .collect()
}

fn cal_rows(report: &FrontierReport) -> Vec<Vec<String>> {
    let header = vec!["Weight".to_string(), "STD".to_string(), "Return".to_string()];
    std::iter::once(header)
        .chain(report.capital_allocation_line.iter().map(|p| {
            vec![
                p.label.clone(),
                p.risk.to_string(),
                p.expected_return.to_string(),
            ]
        }))
        .collect()
}
