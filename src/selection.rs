//! Tournament selection over fitness discrepancy.
//!
//! One mechanism serves both ends of the steady-state loop: parents are
//! tournament-*best* picks, replacement slots are tournament-*worst*
//! picks. Tournament entrants are sampled **without replacement**, so a
//! tournament of size `k` always compares `k` distinct slots.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::seq::index;
use rand::Rng;

use crate::chromosome::Gene;
use crate::individual::Individual;

/// Which end of the discrepancy ordering a tournament selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extreme {
    /// Lowest discrepancy in the sample (fittest).
    Best,
    /// Highest discrepancy in the sample (least fit).
    Worst,
}

/// Selects a population index by tournament.
///
/// Samples `tournament_size` distinct indices uniformly at random and
/// returns the one whose individual is extreme by discrepancy to
/// `fitness_target`. Ties are broken by sample order, which is itself
/// random; callers must not rely on which of several equal individuals
/// wins.
///
/// `tournament_size` is clamped to the population size, so a
/// full-population tournament degenerates to a global argmin/argmax.
///
/// # Panics
/// Panics if `population` is empty.
pub fn select_index<G: Gene, R: Rng>(
    population: &[Individual<G>],
    extreme: Extreme,
    tournament_size: usize,
    fitness_target: f64,
    rng: &mut R,
) -> usize {
    assert!(
        !population.is_empty(),
        "cannot select from empty population"
    );
    let k = tournament_size.clamp(1, population.len());
    let entrants = index::sample(rng, population.len(), k);
    pick_extreme(population, entrants.into_iter(), extreme, fitness_target)
}

/// Tournament with one slot barred from entry.
///
/// Used when the engine needs two *distinct* outcomes: the second worst
/// slot of a breeding event, or the second parent when self-mating is
/// disabled. Samples from the population minus `exclude` and never
/// returns it.
///
/// # Panics
/// Panics if the population has fewer than two individuals.
pub(crate) fn select_index_excluding<G: Gene, R: Rng>(
    population: &[Individual<G>],
    extreme: Extreme,
    tournament_size: usize,
    fitness_target: f64,
    exclude: usize,
    rng: &mut R,
) -> usize {
    let n = population.len();
    assert!(n >= 2, "exclusion needs at least two individuals");
    let k = tournament_size.clamp(1, n - 1);
    // Sample over n-1 virtual slots, shifting past the excluded one.
    let entrants = index::sample(rng, n - 1, k)
        .into_iter()
        .map(|i| if i >= exclude { i + 1 } else { i });
    pick_extreme(population, entrants, extreme, fitness_target)
}

fn pick_extreme<G: Gene>(
    population: &[Individual<G>],
    entrants: impl Iterator<Item = usize>,
    extreme: Extreme,
    fitness_target: f64,
) -> usize {
    let mut entrants = entrants;
    let mut chosen = entrants.next().expect("tournament size is at least 1");
    let mut chosen_disc = population[chosen].discrepancy(fitness_target);

    for idx in entrants {
        let disc = population[idx].discrepancy(fitness_target);
        let wins = match extreme {
            Extreme::Best => disc < chosen_disc,
            Extreme::Worst => disc > chosen_disc,
        };
        if wins {
            chosen = idx;
            chosen_disc = disc;
        }
    }
    chosen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chromosome::Chromosome;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn make_population(fitnesses: &[f64]) -> Vec<Individual<u8>> {
        fitnesses
            .iter()
            .map(|&f| Individual::new(Chromosome::new(vec![0u8]), f))
            .collect()
    }

    #[test]
    fn test_full_tournament_is_global_extreme() {
        // Target 0: discrepancy == fitness. With k == pop size the
        // tournament sees everyone, so the pick is population-global.
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            assert_eq!(select_index(&pop, Extreme::Best, 4, 0.0, &mut rng), 2);
            assert_eq!(select_index(&pop, Extreme::Worst, 4, 0.0, &mut rng), 0);
        }
    }

    #[test]
    fn test_winner_is_sample_extreme() {
        // Whatever subset was drawn, the winner's discrepancy can never
        // exceed (Best) every other individual that could have won: with
        // k = 3 out of 4, the worst individual can only win a Best
        // tournament if all three entrants tie, which cannot happen here.
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let idx = select_index(&pop, Extreme::Best, 3, 0.0, &mut rng);
            assert_ne!(idx, 0, "global worst cannot win a best-of-3 from 4");
        }
    }

    #[test]
    fn test_discrepancy_not_raw_fitness() {
        // Target 8: fitness 10 (disc 2) beats fitness 1 (disc 7).
        let pop = make_population(&[10.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(select_index(&pop, Extreme::Best, 2, 8.0, &mut rng), 0);
        assert_eq!(select_index(&pop, Extreme::Worst, 2, 8.0, &mut rng), 1);
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[select_index(&pop, Extreme::Best, 2, 0.0, &mut rng)] += 1;
        }
        // Index 2 (discrepancy 1.0) wins every tournament it enters:
        // it enters with probability 1/2, so expect ~5000 wins.
        assert!(
            counts[2] > 4000,
            "expected best to dominate, got {counts:?}"
        );
        // The global worst never wins a best tournament of size 2.
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = make_population(&[10.0, 5.0, 1.0, 8.0]);
        let mut rng = StdRng::seed_from_u64(42);

        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[select_index(&pop, Extreme::Best, 1, 0.0, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_oversized_tournament_clamps() {
        let pop = make_population(&[3.0, 2.0]);
        let mut rng = StdRng::seed_from_u64(42);
        // k = 10 > pop size: clamped to a full-population tournament.
        assert_eq!(select_index(&pop, Extreme::Best, 10, 0.0, &mut rng), 1);
    }

    #[test]
    fn test_single_individual() {
        let pop = make_population(&[5.0]);
        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(select_index(&pop, Extreme::Best, 3, 0.0, &mut rng), 0);
        assert_eq!(select_index(&pop, Extreme::Worst, 3, 0.0, &mut rng), 0);
    }

    #[test]
    fn test_excluding_never_returns_excluded() {
        let pop = make_population(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(42);

        for exclude in 0..4 {
            for _ in 0..500 {
                let idx = select_index_excluding(
                    &pop,
                    Extreme::Worst,
                    4,
                    0.0,
                    exclude,
                    &mut rng,
                );
                assert_ne!(idx, exclude);
            }
        }
    }

    #[test]
    fn test_excluding_still_selects_extreme() {
        let pop = make_population(&[1.0, 2.0, 3.0, 9.0]);
        let mut rng = StdRng::seed_from_u64(42);
        // Excluding the global worst, a full tournament picks the runner-up.
        for _ in 0..50 {
            let idx = select_index_excluding(&pop, Extreme::Worst, 4, 0.0, 3, &mut rng);
            assert_eq!(idx, 2);
        }
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Individual<u8>> = vec![];
        let mut rng = StdRng::seed_from_u64(42);
        select_index(&pop, Extreme::Best, 3, 0.0, &mut rng);
    }
}
