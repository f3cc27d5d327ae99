//! End-to-end pipeline tests over fixture and bundled catalogs.

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicUsize, Ordering};
use yield_opt_data::providers::{JsonFileCatalog, StaticCatalog};
use yield_opt_data::{OpportunityProvider, ProviderError};
use yield_opt_domain::enums::{Category, RiskTolerance};
use yield_opt_domain::testkit::{OpportunityBuilder, request};
use yield_opt_domain::{OptimizationReport, OptimizationRequest, YieldOpportunity};
use yield_opt_optimization::diversification::diversity_score;
use yield_opt_optimization::prelude::*;
use yield_opt_simulation::prelude::DeterministicReturnPath;

fn flat() -> DeterministicReturnPath {
    DeterministicReturnPath {
        multipliers: vec![],
        drawdown: dec!(1.5),
    }
}

fn run(request: &OptimizationRequest, opportunities: Vec<YieldOpportunity>) -> OptimizationReport {
    Optimizer::default()
        .optimize(request, opportunities, &mut flat())
        .unwrap()
}

fn assert_invariants(report: &OptimizationReport, request: &OptimizationRequest) {
    let portfolio = &report.portfolio;
    let cap = request.position_cap();

    assert!(portfolio.allocated_percentage() <= dec!(100));
    let allocated: Decimal = portfolio.allocations.iter().map(|a| a.allocation).sum();
    assert_eq!(allocated + portfolio.unallocated_cash, request.portfolio_size);
    assert!(portfolio.unallocated_cash >= Decimal::ZERO);

    for a in &portfolio.allocations {
        assert!(a.percentage >= Decimal::ZERO);
        assert!(a.allocation <= cap, "{} exceeds cap", a.opportunity.id);
        assert!(a.allocation >= a.opportunity.minimum_deposit);
    }
    assert!(
        portfolio
            .allocations
            .windows(2)
            .all(|w| w[0].opportunity.optimization_score >= w[1].opportunity.optimization_score)
    );
    assert!(portfolio.diversification_score >= Decimal::ZERO);
    assert!(portfolio.diversification_score <= dec!(10));
}

#[test]
fn conservative_lending_book_front_loads_best_pick() {
    let mut req = request(dec!(10000));
    req.risk_tolerance = RiskTolerance::Conservative;
    let opps = vec![
        OpportunityBuilder::new("steady").risk_score(dec!(2)).apy(dec!(5)).build(),
        OpportunityBuilder::new("mid").risk_score(dec!(3)).apy(dec!(8)).build(),
        OpportunityBuilder::new("upper").risk_score(dec!(3)).apy(dec!(9)).build(),
    ];

    let report = run(&req, opps);
    let top = &report.portfolio.allocations[0];
    assert_eq!(top.opportunity.id, "steady");
    assert_eq!(top.percentage, dec!(35));
    assert!(report.portfolio.risk_score <= dec!(4));
    assert_invariants(&report, &req);
}

#[test]
fn unreachable_minimum_deposit_is_skipped() {
    let mut req = request(dec!(10000));
    req.constraints.max_single_position = dec!(30);
    let opps = vec![
        OpportunityBuilder::new("whale")
            .minimum_deposit(dec!(5000))
            .build(),
    ];

    let report = run(&req, opps);
    assert!(report.portfolio.is_empty());
    assert_eq!(report.portfolio.unallocated_cash, dec!(10000));
    assert_eq!(report.recommendations[0].title, "No Eligible Opportunities");
}

#[test]
fn audit_requirement_removes_top_ranked_risky_pick() {
    let mut req = request(dec!(10000));
    let opps = vec![
        OpportunityBuilder::new("degen")
            .risk_score(dec!(7.5))
            .apy(dec!(80))
            .sharpe(dec!(5))
            .build(),
        OpportunityBuilder::new("blue-chip").risk_score(dec!(3)).build(),
    ];

    let open = run(&req, opps.clone());
    assert_eq!(open.portfolio.allocations[0].opportunity.id, "degen");

    req.constraints.require_audited = true;
    let audited = run(&req, opps);
    assert!(
        audited
            .portfolio
            .allocations
            .iter()
            .all(|a| a.opportunity.risk_score <= dec!(7))
    );
    assert_eq!(audited.portfolio.allocations[0].opportunity.id, "blue-chip");
}

#[test]
fn second_chain_raises_diversity() {
    let req = request(dec!(10000));
    let single_chain = vec![
        OpportunityBuilder::new("a").protocol("Aave V3").build(),
        OpportunityBuilder::new("b").protocol("Aave V3").build(),
    ];
    let two_chains = vec![
        OpportunityBuilder::new("a").protocol("Aave V3").build(),
        OpportunityBuilder::new("b").protocol("Aave V3").chain("Base").build(),
    ];

    let single = run(&req, single_chain);
    let multi = run(&req, two_chains);
    assert_eq!(single.portfolio.allocations.len(), 2);
    assert_eq!(multi.portfolio.allocations.len(), 2);
    assert!(
        diversity_score(&multi.portfolio.allocations)
            > diversity_score(&single.portfolio.allocations)
    );
}

#[test]
fn empty_catalog_produces_empty_portfolio() {
    let req = request(dec!(2500));
    let report = run(&req, vec![]);

    assert!(report.portfolio.is_empty());
    assert_eq!(report.portfolio.total_apy, Decimal::ZERO);
    assert_eq!(report.portfolio.risk_score, Decimal::ZERO);
    assert_eq!(report.metrics.risk_adjusted_return, Decimal::ZERO);
    assert_eq!(report.risk_analysis.overall_risk, Decimal::ZERO);
    assert!(report.alternative_strategies.is_empty());
    assert!(report.monitoring_plan.high_risk_protocols.is_empty());
    assert_eq!(report.backtest_results.total_return, Decimal::ZERO);
    assert_invariants(&report, &req);
}

#[test]
fn optimization_is_idempotent_for_a_fixed_path() {
    let req = request(dec!(50000));
    let opps: Vec<YieldOpportunity> = (0..10)
        .map(|i| {
            OpportunityBuilder::new(&format!("opp-{i}"))
                .apy(Decimal::from(4 + i * 3))
                .risk_score(Decimal::from(1 + i % 8))
                .category(if i % 2 == 0 { Category::Lending } else { Category::Dex })
                .build()
        })
        .collect();

    let mut first = run(&req, opps.clone());
    let second = run(&req, opps);
    first.timestamp = second.timestamp;
    assert_eq!(first, second);
    assert_invariants(&first, &req);
}

#[test]
fn equal_seeds_give_equal_backtests() {
    let optimizer = Optimizer::default();
    let req = request(dec!(10000));
    let opps = vec![OpportunityBuilder::new("a").apy(dec!(12)).build()];

    let mut a = optimizer.backtest().jittered_path(Some(2024)).unwrap();
    let mut b = optimizer.backtest().jittered_path(Some(2024)).unwrap();
    let ra = optimizer.optimize(&req, opps.clone(), &mut a).unwrap();
    let rb = optimizer.optimize(&req, opps, &mut b).unwrap();

    assert_eq!(ra.backtest_results, rb.backtest_results);
    assert_eq!(ra.portfolio, rb.portfolio);
}

#[tokio::test]
async fn bundled_catalog_satisfies_invariants() {
    let catalog = StaticCatalog::bundled().unwrap();
    let optimizer = Optimizer::default();

    for tolerance in [
        RiskTolerance::Conservative,
        RiskTolerance::Moderate,
        RiskTolerance::Aggressive,
    ] {
        let mut req = request(dec!(25000));
        req.risk_tolerance = tolerance;
        req.constraints.max_single_position = dec!(25);
        req.constraints.min_liquidity = dec!(10000000);

        let report = optimizer
            .optimize_from(&catalog, &req, &mut flat())
            .await
            .unwrap();
        assert!(!report.portfolio.is_empty());
        assert_invariants(&report, &req);
    }
}

#[tokio::test]
async fn preferred_chains_restrict_the_bundled_catalog() {
    let catalog = StaticCatalog::bundled().unwrap();
    let mut req = request(dec!(10000));
    req.preferred_chains = vec!["Optimism".to_string()];

    let report = Optimizer::default()
        .optimize_from(&catalog, &req, &mut flat())
        .await
        .unwrap();
    assert!(
        report
            .portfolio
            .allocations
            .iter()
            .all(|a| a.opportunity.chain == "Optimism")
    );
}

struct CountingProvider {
    calls: AtomicUsize,
}

#[async_trait]
impl OpportunityProvider for CountingProvider {
    async fn get_opportunities(
        &self,
        _chains: &[String],
    ) -> Result<Vec<YieldOpportunity>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }

    fn name(&self) -> &'static str {
        "counting"
    }
}

#[tokio::test]
async fn invalid_request_never_reaches_the_provider() {
    let provider = CountingProvider {
        calls: AtomicUsize::new(0),
    };
    let mut req = request(dec!(1000));
    req.constraints.max_single_position = dec!(150);

    let err = Optimizer::default()
        .optimize_from(&provider, &req, &mut flat())
        .await
        .unwrap_err();
    assert!(err.is_client_error());
    assert_eq!(provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn provider_failure_is_a_server_error() {
    let provider = JsonFileCatalog::new("/nonexistent/catalog.json");
    let err = Optimizer::default()
        .optimize_from(&provider, &request(dec!(1000)), &mut flat())
        .await
        .unwrap_err();

    assert!(matches!(err, OptimizerError::Provider(_)));
    assert!(!err.is_client_error());
}

#[test]
fn oversized_portfolio_is_a_validation_error() {
    let mut req = request(Decimal::from_scientific("1e27").unwrap());
    req.constraints.max_single_position = dec!(100);
    let opps = vec![OpportunityBuilder::new("a").build()];

    let err = Optimizer::default()
        .optimize(&req, opps, &mut flat())
        .unwrap_err();
    assert!(matches!(err, OptimizerError::Validation(_)));
    assert!(err.is_client_error());
}

#[test]
fn largest_accepted_portfolio_allocates_without_overflow() {
    let mut req = request(yield_opt_domain::value_objects::MAX_AMOUNT);
    req.constraints.max_single_position = dec!(100);
    let opps = vec![
        OpportunityBuilder::new("a").apy(dec!(12)).build(),
        OpportunityBuilder::new("b").apy(dec!(8)).chain("Base").build(),
    ];

    let report = run(&req, opps);
    assert_invariants(&report, &req);
}
