use crate::error::SimulationError;
use rand::Rng;
use rand_distr::{Distribution, Uniform};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;

/// Source of per-period return multipliers and drawdown draws.
pub trait ReturnPathGenerator {
    /// Multipliers applied to the base periodic return, one per step.
    fn generate(&mut self, steps: usize) -> Vec<Decimal>;

    /// A drawdown figure, in percent, no larger than `ceiling`.
    fn max_drawdown(&mut self, ceiling: Decimal) -> Decimal;
}

/// Multiplies each period's return by a uniform draw from `[low, high)`.
pub struct JitteredReturnPath<R: Rng> {
    rng: R,
    jitter: Uniform<f64>,
}

impl<R: Rng> JitteredReturnPath<R> {
    /// Creates a generator drawing multipliers from `[low, high)`.
    ///
    /// # Errors
    /// Returns [`SimulationError::InvalidJitter`] when the bounds do not form a range.
    pub fn new(rng: R, low: f64, high: f64) -> Result<Self, SimulationError> {
        let jitter =
            Uniform::new(low, high).map_err(|_| SimulationError::InvalidJitter { low, high })?;
        Ok(Self { rng, jitter })
    }
}

impl<R: Rng> ReturnPathGenerator for JitteredReturnPath<R> {
    fn generate(&mut self, steps: usize) -> Vec<Decimal> {
        (0..steps)
            .map(|_| {
                let m = self.jitter.sample(&mut self.rng);
                Decimal::from_f64(m).unwrap_or(Decimal::ONE)
            })
            .collect()
    }

    fn max_drawdown(&mut self, ceiling: Decimal) -> Decimal {
        let ceiling = ceiling.to_f64().unwrap_or(0.0).max(0.0);
        let draw = self.rng.random::<f64>() * ceiling;
        Decimal::from_f64(draw).unwrap_or(Decimal::ZERO)
    }
}

/// Replays fixed multipliers; used where exact output matters.
#[derive(Debug, Clone)]
pub struct DeterministicReturnPath {
    pub multipliers: Vec<Decimal>,
    pub drawdown: Decimal,
}

impl ReturnPathGenerator for DeterministicReturnPath {
    fn generate(&mut self, steps: usize) -> Vec<Decimal> {
        self.multipliers
            .iter()
            .copied()
            .chain(std::iter::repeat(Decimal::ONE))
            .take(steps)
            .collect()
    }

    fn max_drawdown(&mut self, ceiling: Decimal) -> Decimal {
        self.drawdown.min(ceiling)
    }
}
