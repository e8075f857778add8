use crate::core::kinetics::conditions::ReactionConditions;
use crate::core::kinetics::params::KineticParameters;
use crate::core::kinetics::rate::reaction_rate;
use crate::engine::config::OptimizeConfig;
use crate::engine::error::EngineError;
use crate::engine::evolution::{self, Point};
use crate::engine::progress::ProgressReporter;
use tracing::{info, instrument};

/// The rate-maximizing operating point found by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OptimizationOutcome {
    /// Conditions inside the search box that achieved `max_rate`. Carries the
    /// ambient inhibitor level when one was configured.
    pub best_conditions: ReactionConditions,
    pub max_rate: f64,
    pub generations: usize,
    pub converged: bool,
}

/// Searches the configured (substrate, pH, temperature) box for the
/// conditions that maximize the enzyme's reaction rate.
///
/// Internally minimizes the negated rate with differential evolution.
/// Conditions whose rate cannot be evaluated score as unreachable rather than
/// aborting the search; parameter errors are surfaced before the search
/// begins.
#[instrument(skip_all, name = "optimize_workflow")]
pub fn run(
    params: &KineticParameters,
    config: &OptimizeConfig,
    reporter: &ProgressReporter,
) -> Result<OptimizationOutcome, EngineError> {
    config.validate()?;

    // Probe the box midpoint so an invalid parameter set fails loudly here
    // instead of surfacing as a uniformly unreachable objective.
    reaction_rate(params, &conditions_at(config, &config.search_space.midpoint()))?;

    info!(
        substrate = ?config.search_space.substrate,
        ph = ?config.search_space.ph,
        temp = ?config.search_space.temp,
        "Starting condition optimization"
    );

    let objective = |point: &Point| match reaction_rate(params, &conditions_at(config, point)) {
        Ok(rate) => -rate,
        Err(_) => f64::INFINITY,
    };

    let minimum = evolution::minimize(objective, config, reporter)?;

    let outcome = OptimizationOutcome {
        best_conditions: conditions_at(config, &minimum.point),
        max_rate: -minimum.value,
        generations: minimum.generations,
        converged: minimum.converged,
    };

    info!(
        max_rate = outcome.max_rate,
        generations = outcome.generations,
        converged = outcome.converged,
        "Condition optimization finished"
    );
    Ok(outcome)
}

fn conditions_at(config: &OptimizeConfig, point: &Point) -> ReactionConditions {
    let conditions = ReactionConditions::new(point[0], point[1], point[2]);
    match config.inhibitor_conc {
        Some(inhibitor) => conditions.with_inhibitor(inhibitor),
        None => conditions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::OptimizeConfig;

    fn reference_params() -> KineticParameters {
        KineticParameters {
            vmax: 100.0,
            km: 0.5,
            optimal_ph: 7.0,
            optimal_temp: 37.0,
            ph_sigma: 1.0,
            temp_sigma: 5.0,
            ki: None,
        }
    }

    fn seeded_config() -> OptimizeConfig {
        OptimizeConfig::builder().seed(42).build().unwrap()
    }

    #[test]
    fn best_conditions_sit_near_the_enzyme_optima() {
        let config = seeded_config();
        let outcome = run(&reference_params(), &config, &ProgressReporter::new()).unwrap();

        assert!(outcome.max_rate >= 0.0);
        assert!((outcome.best_conditions.ph - 7.0).abs() < 0.2);
        assert!((outcome.best_conditions.temp - 37.0).abs() < 1.0);
        // The rate grows with substrate, so the search should push [S]
        // against its upper bound.
        assert!((outcome.best_conditions.substrate_conc - 10.0).abs() < 0.5);
    }

    #[test]
    fn best_conditions_stay_inside_the_search_box() {
        let config = seeded_config();
        let outcome = run(&reference_params(), &config, &ProgressReporter::new()).unwrap();

        let point = [
            outcome.best_conditions.substrate_conc,
            outcome.best_conditions.ph,
            outcome.best_conditions.temp,
        ];
        assert!(config.search_space.contains(&point));
    }

    #[test]
    fn achieved_rate_never_exceeds_the_unpenalized_ceiling() {
        let params = reference_params();
        let outcome = run(&params, &seeded_config(), &ProgressReporter::new()).unwrap();

        // vmax * 10 / (km + 10) is the best possible value inside the box.
        let ceiling = params.vmax * 10.0 / (params.km + 10.0);
        assert!(outcome.max_rate <= ceiling + 1e-9);
        assert!(outcome.max_rate > 0.9 * ceiling);
    }

    #[test]
    fn fixed_seed_reproduces_the_outcome() {
        let config = seeded_config();
        let first = run(&reference_params(), &config, &ProgressReporter::new()).unwrap();
        let second = run(&reference_params(), &config, &ProgressReporter::new()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ambient_inhibitor_lowers_the_achievable_rate() {
        let mut params = reference_params();
        params.ki = Some(0.1);

        let clean = run(&params, &seeded_config(), &ProgressReporter::new()).unwrap();

        let inhibited_config = OptimizeConfig::builder()
            .seed(42)
            .inhibitor_conc(0.5)
            .build()
            .unwrap();
        let inhibited = run(&params, &inhibited_config, &ProgressReporter::new()).unwrap();

        assert_eq!(inhibited.best_conditions.inhibitor_conc, Some(0.5));
        assert!(inhibited.max_rate < clean.max_rate);
    }

    #[test]
    fn invalid_parameters_fail_before_the_search() {
        let mut params = reference_params();
        params.ph_sigma = 0.0;

        let result = run(&params, &seeded_config(), &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Evaluation { .. })));
    }

    #[test]
    fn malformed_bounds_fail_before_the_search() {
        let config = OptimizeConfig {
            search_space: crate::engine::config::SearchSpace {
                ph: crate::engine::config::Interval::new(9.0, 4.0),
                ..Default::default()
            },
            ..OptimizeConfig::default()
        };
        let result = run(&reference_params(), &config, &ProgressReporter::new());
        assert!(matches!(result, Err(EngineError::Config { .. })));
    }
}
