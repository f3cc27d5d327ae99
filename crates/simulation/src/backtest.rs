//! Illustrative backtest of a blended APY.
//!
//! This is not a historical replay. Each period earns the blended APY's
//! monthly share scaled by a multiplier from a [`ReturnPathGenerator`],
//! giving the dashboard a plausible-looking return series.

use crate::error::SimulationError;
use crate::return_path::{JitteredReturnPath, ReturnPathGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rust_decimal::Decimal;
use tracing::debug;
use yield_opt_domain::math::{HUNDRED, round_to, safe_div};
use yield_opt_domain::value_objects::{BacktestPeriod, BacktestResults};

/// Configuration for a backtest run.
#[derive(Debug, Clone)]
pub struct BacktestConfig {
    /// Labels of the simulated monthly periods.
    pub periods: Vec<String>,
    /// Lower bound of the per-period return multiplier.
    pub jitter_low: f64,
    /// Upper bound (exclusive) of the per-period return multiplier.
    pub jitter_high: f64,
    /// Largest drawdown the simulation may report, in percent.
    pub max_drawdown_ceiling: Decimal,
}

impl Default for BacktestConfig {
    fn default() -> Self {
        Self {
            periods: ["Sep", "Oct", "Nov", "Dec", "Jan"]
                .into_iter()
                .map(String::from)
                .collect(),
            jitter_low: 0.8,
            jitter_high: 1.2,
            max_drawdown_ceiling: Decimal::from(8),
        }
    }
}

impl BacktestConfig {
    /// Factor that extrapolates the simulated months to a year (2.4 for five months).
    #[must_use]
    pub fn annualization_factor(&self) -> Decimal {
        safe_div(Decimal::from(12), Decimal::from(self.periods.len()))
    }
}

/// Runs the illustrative backtest.
#[derive(Debug, Clone, Default)]
pub struct BacktestSimulator {
    pub config: BacktestConfig,
}

impl BacktestSimulator {
    #[must_use]
    pub fn new(config: BacktestConfig) -> Self {
        Self { config }
    }

    /// Jittered path using the configured bounds, seeded from `seed` or OS entropy.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidJitter`] when the configured bounds are inverted.
    pub fn jittered_path(
        &self,
        seed: Option<u64>,
    ) -> Result<JitteredReturnPath<StdRng>, SimulationError> {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        JitteredReturnPath::new(rng, self.config.jitter_low, self.config.jitter_high)
    }

    /// Simulates the configured periods for a portfolio earning `total_apy` percent per year.
    pub fn run<G: ReturnPathGenerator + ?Sized>(
        &self,
        total_apy: Decimal,
        path: &mut G,
    ) -> BacktestResults {
        let monthly_base = total_apy / Decimal::from(12);
        let multipliers = path.generate(self.config.periods.len());

        let mut cumulative = Decimal::ZERO;
        let mut results = Vec::with_capacity(self.config.periods.len());

        for (label, multiplier) in self.config.periods.iter().zip(multipliers) {
            let monthly_return = monthly_base * multiplier;
            cumulative += monthly_return;

            results.push(BacktestPeriod {
                period: label.clone(),
                monthly_return: round_to(monthly_return, 2),
                cumulative_return: round_to(cumulative, 2),
                portfolio_value: round_to(HUNDRED * (Decimal::ONE + cumulative / HUNDRED), 4),
            });
        }

        let periods = Decimal::from(self.config.periods.len());
        let max_drawdown = path.max_drawdown(self.config.max_drawdown_ceiling);

        debug!(
            total_apy = %total_apy,
            cumulative = %cumulative,
            periods = self.config.periods.len(),
            "Backtest simulated"
        );

        BacktestResults {
            total_return: round_to(cumulative, 2),
            annualized_return: round_to(cumulative * self.config.annualization_factor(), 2),
            max_drawdown: round_to(max_drawdown, 2),
            sharpe_ratio: round_to(safe_div(cumulative, periods), 2),
            results,
        }
    }
}
