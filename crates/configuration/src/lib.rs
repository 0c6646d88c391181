use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{
    CapitalAllocation, Config, Execution, InputSettings, LoggingSettings, OutputFormat,
    PairSettings, ReportSettings, RiskFreeRate, WeightGridSettings,
};

/// Prefix of environment variables that override file settings,
/// e.g. `FRONTIER_RISK_FREE__ANNUAL_RATE_PCT=3.5`.
pub const ENV_PREFIX: &str = "FRONTIER";

/// Loads the application configuration.
///
/// Sources are layered: built-in defaults, then the TOML file (`path` if given,
/// otherwise an optional `config.toml` in the working directory), then
/// `FRONTIER_*` environment variables. The result is validated before it is
/// returned.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file_source = match path {
        Some(path) => config::File::from(path),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file_source)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "Configuration loaded.");
    Ok(config)
}

/// Checks the cross-field rules that serde cannot express.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let invalid = |msg: &str| -> Result<(), ConfigError> {
        Err(ConfigError::ValidationError(msg.to_string()))
    };

    if config.risk_free.periods_per_year == 0 {
        return invalid("risk_free.periods_per_year must be greater than 0");
    }
    if !config.risk_free.annual_rate_pct.is_finite() {
        return invalid("risk_free.annual_rate_pct must be a finite number");
    }

    let grid = &config.weight_grid;
    if grid.count == 0 {
        return invalid("weight_grid.count must be greater than 0");
    }
    let bounds = [
        grid.start.asset_a,
        grid.start.asset_b,
        grid.step.asset_a,
        grid.step.asset_b,
    ];
    if bounds.iter().any(|v| !v.is_finite()) {
        return invalid("weight_grid start and step must be finite numbers");
    }

    let leverages = &config.capital_allocation.leverages;
    if leverages.is_empty() {
        return invalid("capital_allocation.leverages must not be empty");
    }
    if leverages.iter().any(|l| !l.is_finite()) {
        return invalid("capital_allocation.leverages must be finite numbers");
    }

    let input = &config.input;
    let columns = [
        &input.label_column,
        &input.asset_a_column,
        &input.asset_b_column,
    ];
    if columns.iter().any(|c| c.trim().is_empty()) {
        return invalid("input column names must not be empty");
    }
    if input.asset_a_column == input.asset_b_column {
        return invalid("input.asset_a_column and input.asset_b_column must differ");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_match_reference_analysis() {
        let config = Config::default();
        assert_eq!(config.risk_free_rate(), 2.0 / 252.0);
        assert_eq!(config.weight_grid.count, 21);
        assert_eq!(config.weight_grid.start.asset_a, 150.0);
        assert_eq!(config.weight_grid.start.asset_b, -50.0);
        assert_eq!(config.weight_grid.step.asset_a, -10.0);
        assert_eq!(config.weight_grid.step.asset_b, 10.0);
        assert_eq!(config.capital_allocation.leverages, vec![0.0, 1.0, 2.0]);
        assert!(!config.execution.parallel);
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn empty_file_yields_defaults() {
        let file = write_toml("");
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn file_overrides_selected_sections() {
        let file = write_toml(
            r#"
            [risk_free]
            annual_rate_pct = 5.0
            periods_per_year = 250

            [weight_grid]
            count = 3
            start = { asset_a = 100.0, asset_b = 0.0 }
            step = { asset_a = -50.0, asset_b = 50.0 }

            [capital_allocation]
            leverages = [0.0, 0.5, 1.0, 1.5]

            [report]
            format = "json"
            "#,
        );
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.risk_free_rate(), 5.0 / 250.0);
        assert_eq!(config.weight_grid.count, 3);
        assert_eq!(config.weight_grid.step.asset_b, 50.0);
        assert_eq!(config.capital_allocation.leverages.len(), 4);
        assert_eq!(config.report.format, OutputFormat::Json);
        // Untouched sections keep their defaults.
        assert_eq!(config.input, InputSettings::default());
    }

    #[test]
    fn rejects_zero_periods_per_year() {
        let file = write_toml("[risk_free]\nperiods_per_year = 0\n");
        let err = load_config(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn rejects_empty_grid_and_leverages() {
        let mut config = Config::default();
        config.weight_grid.count = 0;
        assert!(validate(&config).is_err());

        let mut config = Config::default();
        config.capital_allocation.leverages.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_identical_asset_columns() {
        let mut config = Config::default();
        config.input.asset_b_column = config.input.asset_a_column.clone();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn missing_explicit_file_is_a_load_error() {
        let err = load_config(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::LoadError(_)));
    }
}
