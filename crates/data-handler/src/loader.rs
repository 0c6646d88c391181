use crate::error::DataError;
use configuration::InputSettings;
use core_types::{PriceSeries, PriceTable};
use csv::StringRecord;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{info, info_span};

/// Loads a two-asset `PriceTable` from a CSV file.
///
/// Rows are kept in file order, which must be newest first.
pub fn load_price_table(path: &Path, input: &InputSettings) -> Result<PriceTable, DataError> {
    let _span = info_span!("load_prices", path = %path.display()).entered();
    info!("Reading price data.");

    let file = File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let table = read_price_table(file, input)?;

    info!(observations = table.len(), "Price data read.");
    Ok(table)
}

/// Parses a `PriceTable` from any CSV source.
pub fn read_price_table<R: Read>(reader: R, input: &InputSettings) -> Result<PriceTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = build_header_map(reader.headers()?);
    let column = |name: &str| {
        headers
            .get(name.trim())
            .copied()
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    };
    let label_idx = column(&input.label_column)?;
    let a_idx = column(&input.asset_a_column)?;
    let b_idx = column(&input.asset_b_column)?;

    let mut labels = Vec::new();
    let mut prices_a = Vec::new();
    let mut prices_b = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // records() starts after the header, and lines are 1-based.
        let line = idx + 2;
        let record = result?;

        labels.push(record.get(label_idx).unwrap_or_default().to_string());
        prices_a.push(parse_price(&record, a_idx, line, &input.asset_a_column)?);
        prices_b.push(parse_price(&record, b_idx, line, &input.asset_b_column)?);
    }

    if labels.is_empty() {
        return Err(DataError::Empty);
    }

    Ok(PriceTable::new(
        labels,
        PriceSeries::new(input.asset_a_column.trim(), prices_a),
        PriceSeries::new(input.asset_b_column.trim(), prices_b),
    )?)
}

fn build_header_map(headers: &StringRecord) -> HashMap<String, usize> {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| (normalize_header_name(name), idx))
        .collect()
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports often prefix the first header with a UTF-8 BOM.
    name.trim_start_matches('\u{feff}').trim().to_string()
}

fn parse_price(
    record: &StringRecord,
    idx: usize,
    line: usize,
    column: &str,
) -> Result<f64, DataError> {
    let raw = record.get(idx).unwrap_or_default();
    raw.parse::<f64>().map_err(|_| DataError::InvalidValue {
        line,
        column: column.to_string(),
        value: raw.to_string(),
    })
}
