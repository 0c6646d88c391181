use thiserror::Error;

#[derive(Error, Debug)]
pub enum OptimizerError {
    #[error("Configuration error: {0}")]
    Config(#[from] configuration::error::ConfigError),

    #[error("Analytics error: {0}")]
    Analytics(#[from] analytics::AnalyticsError),

    #[error("The weight grid produced no portfolios to evaluate.")]
    EmptyGrid,
}
