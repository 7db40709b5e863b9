use thiserror::Error;

use crate::engine::payoff::leg_breakeven;
use crate::engine::types::Strategy;

#[derive(Debug, Error)]
pub enum CsvExportError {
    #[error("failed to write csv: {0}")]
    Write(#[from] ::csv::Error),
    #[error("failed to flush csv: {0}")]
    Flush(#[from] std::io::Error),
    #[error("csv output was not valid utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Tabular export: one header row, one row per leg. Quoting (e.g. a
/// strategy name containing commas) is handled by the csv writer.
pub fn export_csv(strategy: &Strategy) -> Result<String, CsvExportError> {
    let mut writer = ::csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "strategy",
        "type",
        "side",
        "strike",
        "premium",
        "quantity",
        "breakeven",
    ])?;
    for leg in &strategy.legs {
        let row = vec![
            strategy.name.clone(),
            leg.option_type.to_string(),
            leg.side.to_string(),
            leg.strike.to_string(),
            leg.premium.to_string(),
            leg.quantity.to_string(),
            leg_breakeven(leg).to_string(),
        ];
        writer.write_record(&row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(::csv::IntoInnerError::into_error)?;
    Ok(String::from_utf8(bytes)?)
}

/// Download filename derived from the strategy name: whitespace collapses
/// to underscores, blank names fall back to `strategy.csv`.
pub fn csv_filename(name: &str) -> String {
    let stem = name.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        "strategy.csv".to_string()
    } else {
        format!("{stem}.csv")
    }
}
