//! Human-readable rendering of optimizer output.

use prettytable::{Table, row};
use yield_opt_domain::{OptimizationReport, YieldOpportunity};

/// Allocation table, one row per position in rank order.
pub fn allocation_table(report: &OptimizationReport) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "#", "Protocol", "Strategy", "Chain", "APY %", "Risk", "Score", "Allocation $", "%",
        "Yield $/yr"
    ]);

    for (rank, a) in report.portfolio.allocations.iter().enumerate() {
        let opp = &a.opportunity;
        table.add_row(row![
            rank + 1,
            opp.protocol,
            opp.strategy,
            opp.chain,
            opp.apy,
            opp.risk_score,
            opp.optimization_score,
            a.allocation,
            a.percentage,
            a.expected_yield
        ]);
    }
    table
}

/// Catalog listing table.
pub fn catalog_table(opportunities: &[YieldOpportunity]) -> Table {
    let mut table = Table::new();
    table.set_titles(row![
        "ID", "Protocol", "Chain", "Category", "APY %", "TVL $", "Risk", "Min $", "Lockup (d)",
        "Exit"
    ]);
    for opp in opportunities {
        table.add_row(row![
            opp.id,
            opp.protocol,
            opp.chain,
            opp.category,
            opp.apy,
            opp.tvl,
            opp.risk_score,
            opp.minimum_deposit,
            opp.lockup_period,
            opp.liquidity_metrics.exit_time
        ]);
    }
    table
}

/// Summary lines printed under the allocation table.
pub fn summary_lines(report: &OptimizationReport) -> Vec<String> {
    let p = &report.portfolio;
    let mut lines = vec![
        format!("Total APY:          {}%", p.total_apy),
        format!("Risk Score:         {}", p.risk_score),
        format!("Diversification:    {} / 10", p.diversification_score),
        format!("Unallocated Cash:   ${}", p.unallocated_cash),
        format!("Expected Yield:     ${}/yr", report.metrics.expected_annual_yield),
        format!("Rebalance:          {}", p.rebalance_frequency),
        format!("Monitoring:         {}", report.monitoring_plan.frequency),
        format!("Exit Strategy:      {}", p.exit_strategy),
        format!(
            "Backtest:           {}% over {} months (illustrative)",
            report.backtest_results.total_return,
            report.backtest_results.results.len()
        ),
    ];

    for rec in &report.recommendations {
        lines.push(format!("[{:?}] {}: {}", rec.priority, rec.title, rec.message));
    }
    for alt in &report.alternative_strategies {
        lines.push(format!(
            "Alternative: {} ({}% APY, risk {})",
            alt.name, alt.estimated_apy, alt.risk_score
        ));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use yield_opt_domain::testkit::{OpportunityBuilder, request};
    use yield_opt_optimization::Optimizer;

    fn report() -> OptimizationReport {
        let optimizer = Optimizer::default();
        let mut path = optimizer.backtest().jittered_path(Some(1)).unwrap();
        optimizer
            .optimize(
                &request(dec!(10000)),
                vec![
                    OpportunityBuilder::new("aave").protocol("Aave V3").build(),
                    OpportunityBuilder::new("lido").protocol("Lido").chain("Base").build(),
                ],
                &mut path,
            )
            .unwrap()
    }

    #[test]
    fn test_allocation_table_has_row_per_position() {
        let report = report();
        let table = allocation_table(&report);
        assert_eq!(table.len(), report.portfolio.allocations.len());
        assert!(table.to_string().contains("Aave V3"));
    }

    #[test]
    fn test_summary_mentions_key_figures() {
        let lines = summary_lines(&report());
        assert!(lines[0].starts_with("Total APY:"));
        assert!(lines.iter().any(|l| l.contains("Unallocated Cash")));
    }

    #[test]
    fn test_catalog_table() {
        let opps = vec![OpportunityBuilder::new("a").build()];
        let table = catalog_table(&opps);
        assert_eq!(table.len(), 1);
        assert!(table.to_string().contains("lending"));
    }
}
