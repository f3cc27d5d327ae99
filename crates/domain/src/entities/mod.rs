pub mod opportunity;

// Re-export for easier access
pub use opportunity::{
    ApyRange, ExitBucket, FeeSchedule, HistoricalPerformance, LiquidityMetrics, MINUTES_PER_DAY,
    MINUTES_PER_HOUR, MINUTES_PER_WEEK, YieldOpportunity,
};
