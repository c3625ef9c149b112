//! Ranking candidate families on seeded samples

mod common;

use common::{init_tracing, sample};
use distfit_gof::{DistType, KolmogorovSmirnov, ModelFamily, ScoreTableConfig};

fn position(table: &[distfit_gof::KolmogorovScore], family: ModelFamily) -> Option<usize> {
    table.iter().position(|s| s.family == family)
}

#[test]
fn test_exponential_data_ranks_exponential_near_top() -> anyhow::Result<()> {
    init_tracing();
    // rand_distr parameterizes by rate; scale 2
    let data = sample(rand_distr::Exp::new(0.5)?, 600, 42);
    let table = KolmogorovSmirnov::score_table(&data)?;

    assert!(table.windows(2).all(|w| w[0].score >= w[1].score));
    assert!(table.iter().all(|s| s.score.is_finite()));
    assert!(table.iter().all(|s| s.family.dist_type() == DistType::Continuous));

    // Beta's domain is [0, 1]
    assert!(position(&table, ModelFamily::Beta).is_none());

    let exponential = position(&table, ModelFamily::Exponential).expect("exponential scored");
    assert!(exponential < 5, "exponential ranked {exponential}: {table:?}");
    if let Some(normal) = position(&table, ModelFamily::Normal) {
        assert!(normal > exponential);
    }
    Ok(())
}

#[test]
fn test_poisson_data_with_discrete_battery() -> anyhow::Result<()> {
    let data = sample(rand_distr::Poisson::new(3.0)?, 400, 5);
    let table = KolmogorovSmirnov::score_table_with(&data, &ScoreTableConfig::discrete())?;

    assert!(table.iter().all(|s| s.family.dist_type() == DistType::Discrete));
    // Counts above 1 rule out Bernoulli
    assert!(position(&table, ModelFamily::Bernoulli).is_none());
    let poisson = position(&table, ModelFamily::Poisson).expect("poisson scored");
    assert!(poisson < 3, "poisson ranked {poisson}: {table:?}");
    Ok(())
}

#[test]
fn test_every_family_inapplicable_gives_empty_table() -> anyhow::Result<()> {
    // Negative, non-integral data: none of these can be fitted
    let data = [-3.5, -1.25, -0.5, 2.75];
    let config = ScoreTableConfig::discrete()
        .with_family(ModelFamily::Exponential)
        .with_family(ModelFamily::Beta);
    let table = KolmogorovSmirnov::score_table_with(&data, &config)?;
    assert!(table.is_empty());
    Ok(())
}

#[test]
fn test_invalid_input_is_an_error() {
    assert!(KolmogorovSmirnov::score_table(&[]).is_err());
    assert!(KolmogorovSmirnov::score_table(&[1.0, f64::NAN]).is_err());
}

#[test]
fn test_default_table_matches_explicit_battery() -> anyhow::Result<()> {
    let data = sample(rand_distr::Normal::new(10.0, 2.0)?, 250, 3);
    let default = KolmogorovSmirnov::score_table(&data)?;
    let explicit = KolmogorovSmirnov::score_table_with(
        &data,
        &ScoreTableConfig::default().with_families(ModelFamily::all()),
    )?;
    assert_eq!(default, explicit);
    Ok(())
}
