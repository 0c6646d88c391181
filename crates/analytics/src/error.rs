use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error(
        "Numeric domain error: portfolio variance {radicand} is negative for weights ({weight_a}%, {weight_b}%)"
    )]
    NumericDomainError {
        weight_a: f64,
        weight_b: f64,
        radicand: f64,
    },
}
