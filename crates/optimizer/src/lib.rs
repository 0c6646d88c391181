use analytics::{AnalyticsEngine, FrontierReport};
use chrono::Utc;
use configuration::Config;
use core_types::{FrontierPoint, MomentSet, PriceTable, WeightPair};
use rayon::prelude::*;
use tracing::{info, info_span};
use uuid::Uuid;

pub mod error;
pub mod generator;
pub mod tangency;

pub use error::OptimizerError;
pub use generator::{WeightGrid, WeightGridIter};
pub use tangency::select_tangency;

/// Drives one frontier analysis: returns, moments, the weight sweep, the
/// tangency portfolio and the Capital Allocation Line.
pub struct Optimizer {
    run_id: Uuid,
    grid: WeightGrid,
    leverages: Vec<f64>,
    parallel: bool,
    engine: AnalyticsEngine,
}

impl Optimizer {
    pub fn new(config: &Config) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            grid: WeightGrid::from(&config.weight_grid),
            leverages: config.capital_allocation.leverages.clone(),
            parallel: config.execution.parallel,
            engine: AnalyticsEngine::new(config.risk_free_rate()),
        }
    }

    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    pub fn grid(&self) -> &WeightGrid {
        &self.grid
    }

    /// Runs the full pipeline over `prices`.
    pub fn run(&self, prices: &PriceTable) -> Result<FrontierReport, OptimizerError> {
        let _span = info_span!("frontier_analysis", run_id = %self.run_id).entered();
        info!(
            asset_a = %prices.asset_a.name,
            asset_b = %prices.asset_b.name,
            observations = prices.len(),
            "Portfolio analysis started."
        );

        let (returns_a, returns_b) = self.engine.calculate_returns(prices)?;
        let moments = self.engine.estimate_moments(&returns_a, &returns_b)?;
        let frontier = self.sweep(&moments)?;

        let (tangency_index, tangency) =
            select_tangency(&frontier).ok_or(OptimizerError::EmptyGrid)?;
        let tangency = *tangency;
        info!(
            weight_a = tangency.weights.weight_a,
            weight_b = tangency.weights.weight_b,
            sharpe_ratio = tangency.sharpe_ratio,
            "Tangency portfolio selected."
        );

        let capital_allocation_line = self
            .engine
            .capital_allocation_line(&tangency, &self.leverages);

        info!("Portfolio analysis completed.");
        Ok(FrontierReport {
            generated_at: Utc::now(),
            asset_a: prices.asset_a.name.clone(),
            asset_b: prices.asset_b.name.clone(),
            labels: prices.labels.clone(),
            returns_a,
            returns_b,
            moments,
            frontier,
            tangency,
            tangency_index,
            capital_allocation_line,
        })
    }

    /// Evaluates every pair of the grid, in grid order.
    ///
    /// The parallel path collects into an indexed vector, so its output is
    /// identical to the sequential one.
    pub fn sweep(&self, moments: &MomentSet) -> Result<Vec<FrontierPoint>, OptimizerError> {
        let _span = info_span!("frontier_sweep", points = self.grid.len(), parallel = self.parallel)
            .entered();
        info!("Evaluating weight grid.");

        if self.grid.is_empty() {
            return Err(OptimizerError::EmptyGrid);
        }

        let frontier = if self.parallel {
            // Worker threads do not inherit the caller's scoped subscriber.
            let dispatch = tracing::dispatcher::get_default(|d| d.clone());
            let pairs: Vec<WeightPair> = self.grid.iter().collect();
            pairs
                .par_iter()
                .map(|weights| {
                    tracing::dispatcher::with_default(&dispatch, || {
                        self.engine.evaluate_portfolio(*weights, moments)
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            self.grid
                .iter()
                .map(|weights| self.engine.evaluate_portfolio(weights, moments))
                .collect::<Result<Vec<_>, _>>()?
        };

        info!(points = frontier.len(), "Weight grid evaluated.");
        Ok(frontier)
    }
}
