use super::config::{Interval, OptimizeConfig, SearchSpace};
use super::error::EngineError;
use super::progress::{Progress, ProgressReporter};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

pub type Point = [f64; SearchSpace::DIMENSIONS];

/// Mutation factor is dithered per trial within this range, which keeps the
/// search vigorous early and lets it contract once the population clusters.
const MUTATION_FACTOR_RANGE: (f64, f64) = (0.5, 1.0);
const CONVERGENCE_FLOOR: f64 = 1e-12;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Minimum {
    pub point: Point,
    pub value: f64,
    pub generations: usize,
    pub converged: bool,
}

/// Minimizes `objective` over the configured search box with a
/// differential-evolution search (rand/1/bin scheme).
///
/// All random draws happen sequentially on the calling thread; the candidate
/// evaluations of each generation are farmed out in parallel. With a fixed
/// seed the run is therefore fully deterministic. Candidates that score to a
/// non-finite cost lose every selection; a population that never produces a
/// finite cost is an error.
#[instrument(
    skip_all,
    fields(population = config.population_size, budget = config.max_generations)
)]
pub fn minimize<F>(
    objective: F,
    config: &OptimizeConfig,
    reporter: &ProgressReporter,
) -> Result<Minimum, EngineError>
where
    F: Fn(&Point) -> f64 + Sync,
{
    config.validate()?;

    let axes = config.search_space.axes();
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut population: Vec<Point> = (0..config.population_size)
        .map(|_| random_point(&axes, &mut rng))
        .collect();
    let mut costs: Vec<f64> = population.par_iter().map(&objective).collect();

    let mut best = best_index(&costs).ok_or(EngineError::NonFiniteObjective)?;

    reporter.report(Progress::SearchStart {
        max_generations: config.max_generations as u64,
    });

    let mut converged = false;
    let mut generations_run = 0;

    for generation in 1..=config.max_generations {
        generations_run = generation;

        let trials: Vec<Point> = (0..population.len())
            .map(|target| {
                build_trial(
                    target,
                    &population,
                    &axes,
                    config.crossover_probability,
                    &mut rng,
                )
            })
            .collect();
        let trial_costs: Vec<f64> = trials.par_iter().map(&objective).collect();

        for i in 0..population.len() {
            if trial_costs[i] <= costs[i] {
                population[i] = trials[i];
                costs[i] = trial_costs[i];
                if costs[i] < costs[best] {
                    best = i;
                }
            }
        }

        reporter.report(Progress::Generation {
            index: generation as u64,
            best_cost: costs[best],
        });
        trace!(generation, best_cost = costs[best], "generation complete");

        if population_converged(&costs, config.tolerance) {
            converged = true;
            break;
        }
    }

    reporter.report(Progress::SearchFinish { converged });
    debug!(
        generations = generations_run,
        converged,
        best_cost = costs[best],
        "search finished"
    );

    Ok(Minimum {
        point: population[best],
        value: costs[best],
        generations: generations_run,
        converged,
    })
}

fn random_point(axes: &[Interval; SearchSpace::DIMENSIONS], rng: &mut StdRng) -> Point {
    std::array::from_fn(|d| rng.gen_range(axes[d].lower..=axes[d].upper))
}

/// rand/1/bin: mutate a random base with one scaled difference vector, then
/// binomially cross with the target. One component is always taken from the
/// mutant so the trial never degenerates into a copy of the target.
fn build_trial(
    target: usize,
    population: &[Point],
    axes: &[Interval; SearchSpace::DIMENSIONS],
    crossover_probability: f64,
    rng: &mut StdRng,
) -> Point {
    let [a, b, c] = distinct_partners(target, population.len(), rng);
    let factor = rng.gen_range(MUTATION_FACTOR_RANGE.0..MUTATION_FACTOR_RANGE.1);

    let mut trial = population[target];
    let forced = rng.gen_range(0..trial.len());
    for d in 0..trial.len() {
        if d == forced || rng.gen_range(0.0..1.0) < crossover_probability {
            let mutant = population[a][d] + factor * (population[b][d] - population[c][d]);
            trial[d] = axes[d].clamp(mutant);
        }
    }
    trial
}

fn distinct_partners(target: usize, population_size: usize, rng: &mut StdRng) -> [usize; 3] {
    debug_assert!(population_size >= 4);
    let mut picked = [target; 3];
    for slot in 0..3 {
        loop {
            let candidate = rng.gen_range(0..population_size);
            if candidate != target && !picked[..slot].contains(&candidate) {
                picked[slot] = candidate;
                break;
            }
        }
    }
    picked
}

fn best_index(costs: &[f64]) -> Option<usize> {
    costs
        .iter()
        .enumerate()
        .filter(|(_, c)| c.is_finite())
        .min_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
}

/// The population has converged when its cost spread is small relative to the
/// mean cost, mirroring the usual differential-evolution stopping rule.
fn population_converged(costs: &[f64], tolerance: f64) -> bool {
    if costs.iter().any(|c| !c.is_finite()) {
        return false;
    }
    let mean = costs.iter().sum::<f64>() / costs.len() as f64;
    let variance = costs.iter().map(|c| (c - mean) * (c - mean)).sum::<f64>() / costs.len() as f64;
    variance.sqrt() <= CONVERGENCE_FLOOR + tolerance * mean.abs()
}
