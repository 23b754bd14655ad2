//! Built-in benchmark problems.
//!
//! Small, self-contained [`GaProblem`] implementations used by the test
//! suite and the criterion bench, and handy as starting points for real
//! problems. [`BitSum`] exercises the position-independent operator
//! family, [`Tsp`] the all-different (permutation) family.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chromosome::Chromosome;
use crate::operators::{cx_all_diff, cx_uniform, reverse_subseq};
use crate::types::GaProblem;

/// Bit-counting problem: fitness is the number of ones.
///
/// With `fitness_target` equal to the chromosome length this is the
/// classic OneMax; any other target in `0..=len` asks the engine to hit
/// an exact intermediate count, which exercises discrepancy-based
/// ranking in both directions.
#[derive(Debug, Clone)]
pub struct BitSum {
    len: usize,
    mutation_rate: f64,
}

impl BitSum {
    /// A bit-sum problem over chromosomes of `len` bits.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            mutation_rate: 0.5,
        }
    }

    /// Sets the per-offspring probability of flipping one random bit.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Chromosome length.
    pub fn len(&self) -> usize {
        self.len
    }
}

impl GaProblem for BitSum {
    type Gene = u8;

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<u8> {
        (0..self.len).map(|_| rng.random_range(0..2)).collect()
    }

    fn fitness(&self, chromosome: &Chromosome<u8>) -> f64 {
        chromosome.iter().map(|&bit| bit as f64).sum()
    }

    fn mate<R: Rng>(
        &self,
        parent1: &Chromosome<u8>,
        parent2: &Chromosome<u8>,
        rng: &mut R,
    ) -> (Chromosome<u8>, Chromosome<u8>) {
        cx_uniform(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, chromosome: Chromosome<u8>, rng: &mut R) -> Chromosome<u8> {
        if self.len == 0 || !rng.random_bool(self.mutation_rate) {
            return chromosome;
        }
        let idx = rng.random_range(0..self.len);
        let mut genes = chromosome.to_vec();
        genes[idx] ^= 1;
        Chromosome::new(genes)
    }
}

/// Traveling-salesman problem over a symmetric distance matrix.
///
/// Chromosomes are permutations of the city indices `0..n`; fitness is
/// the closed-tour length. Crossover is [`cx_all_diff`], mutation a
/// random segment reversal (2-opt), so every chromosome the engine ever
/// holds is a valid tour.
///
/// Tour length has no natural zero, so runs are normally driven with
/// `fitness_target = 0.0` and bounded by `max_generations` rather than
/// convergence.
#[derive(Debug, Clone)]
pub struct Tsp {
    distances: Vec<Vec<f64>>,
}

impl Tsp {
    /// A TSP instance over an explicit distance matrix.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    pub fn new(distances: Vec<Vec<f64>>) -> Self {
        let n = distances.len();
        assert!(
            distances.iter().all(|row| row.len() == n),
            "distance matrix must be square"
        );
        Self { distances }
    }

    /// A random instance: `cities` points placed uniformly in a square
    /// of side `extent`, with Euclidean distances.
    pub fn random<R: Rng>(cities: usize, extent: f64, rng: &mut R) -> Self {
        let points: Vec<(f64, f64)> = (0..cities)
            .map(|_| {
                (
                    rng.random_range(0.0..extent),
                    rng.random_range(0.0..extent),
                )
            })
            .collect();
        let distances = points
            .iter()
            .map(|&(x1, y1)| {
                points
                    .iter()
                    .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                    .collect()
            })
            .collect();
        Self { distances }
    }

    /// Number of cities.
    pub fn cities(&self) -> usize {
        self.distances.len()
    }

    /// Length of the closed tour visiting the cities in `tour` order.
    pub fn tour_length(&self, tour: &Chromosome<usize>) -> f64 {
        let n = tour.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.distances[tour[i]][tour[(i + 1) % n]])
            .sum()
    }
}

impl GaProblem for Tsp {
    type Gene = usize;

    fn random_chromosome<R: Rng>(&self, rng: &mut R) -> Chromosome<usize> {
        let mut tour: Vec<usize> = (0..self.cities()).collect();
        tour.shuffle(rng);
        Chromosome::new(tour)
    }

    fn fitness(&self, chromosome: &Chromosome<usize>) -> f64 {
        self.tour_length(chromosome)
    }

    fn mate<R: Rng>(
        &self,
        parent1: &Chromosome<usize>,
        parent2: &Chromosome<usize>,
        rng: &mut R,
    ) -> (Chromosome<usize>, Chromosome<usize>) {
        cx_all_diff(parent1, parent2, rng)
    }

    fn mutate<R: Rng>(&self, chromosome: Chromosome<usize>, rng: &mut R) -> Chromosome<usize> {
        reverse_subseq(&chromosome, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    // ---- BitSum ----

    #[test]
    fn test_bit_sum_fitness() {
        let problem = BitSum::new(5);
        assert_eq!(problem.fitness(&vec![1, 0, 1, 1, 0].into()), 3.0);
        assert_eq!(problem.fitness(&vec![0, 0, 0, 0, 0].into()), 0.0);
        assert_eq!(problem.fitness(&vec![1, 1, 1, 1, 1].into()), 5.0);
    }

    #[test]
    fn test_bit_sum_random_chromosome_shape() {
        let problem = BitSum::new(16);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let c = problem.random_chromosome(&mut rng);
            assert_eq!(c.len(), 16);
            assert!(c.iter().all(|&bit| bit <= 1));
        }
    }

    #[test]
    fn test_bit_sum_mutation_flips_at_most_one_bit() {
        let problem = BitSum::new(8).with_mutation_rate(1.0);
        let mut rng = StdRng::seed_from_u64(42);
        let original: Chromosome<u8> = vec![0; 8].into();
        for _ in 0..50 {
            let mutated = problem.mutate(original.clone(), &mut rng);
            let flipped: u32 = mutated.iter().map(|&bit| bit as u32).sum();
            assert_eq!(flipped, 1, "exactly one bit should flip at rate 1.0");
        }
    }

    #[test]
    fn test_bit_sum_zero_mutation_rate_is_identity() {
        let problem = BitSum::new(8).with_mutation_rate(0.0);
        let mut rng = StdRng::seed_from_u64(42);
        let original: Chromosome<u8> = vec![1, 0, 1, 0, 1, 0, 1, 0].into();
        for _ in 0..20 {
            assert_eq!(problem.mutate(original.clone(), &mut rng), original);
        }
    }

    // ---- Tsp ----

    fn square_instance() -> Tsp {
        // Four corners of a unit square: optimal closed tour length 4.
        Tsp::new(vec![
            vec![0.0, 1.0, 2.0_f64.sqrt(), 1.0],
            vec![1.0, 0.0, 1.0, 2.0_f64.sqrt()],
            vec![2.0_f64.sqrt(), 1.0, 0.0, 1.0],
            vec![1.0, 2.0_f64.sqrt(), 1.0, 0.0],
        ])
    }

    #[test]
    fn test_tsp_tour_length() {
        let tsp = square_instance();
        let perimeter: Chromosome<usize> = vec![0, 1, 2, 3].into();
        assert!((tsp.tour_length(&perimeter) - 4.0).abs() < 1e-12);

        let crossing: Chromosome<usize> = vec![0, 2, 1, 3].into();
        assert!(tsp.tour_length(&crossing) > 4.0);
    }

    #[test]
    fn test_tsp_random_chromosome_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        let tsp = Tsp::random(12, 100.0, &mut rng);
        for _ in 0..20 {
            let tour = tsp.random_chromosome(&mut rng);
            let unique: HashSet<usize> = tour.iter().copied().collect();
            assert_eq!(unique.len(), 12);
            assert!(tour.iter().all(|&city| city < 12));
        }
    }

    #[test]
    fn test_tsp_operators_preserve_tours() {
        let mut rng = StdRng::seed_from_u64(42);
        let tsp = Tsp::random(10, 100.0, &mut rng);
        let p1 = tsp.random_chromosome(&mut rng);
        let p2 = tsp.random_chromosome(&mut rng);

        for _ in 0..50 {
            let (c1, c2) = tsp.mate(&p1, &p2, &mut rng);
            for child in [tsp.mutate(c1, &mut rng), tsp.mutate(c2, &mut rng)] {
                let unique: HashSet<usize> = child.iter().copied().collect();
                assert_eq!(unique.len(), 10, "offspring lost tour validity");
            }
        }
    }

    #[test]
    fn test_tsp_random_instance_is_metric_like() {
        let mut rng = StdRng::seed_from_u64(42);
        let tsp = Tsp::random(8, 50.0, &mut rng);
        for i in 0..8 {
            assert_eq!(tsp.distances[i][i], 0.0);
            for j in 0..8 {
                assert!((tsp.distances[i][j] - tsp.distances[j][i]).abs() < 1e-12);
            }
        }
    }

    #[test]
    #[should_panic(expected = "distance matrix must be square")]
    fn test_tsp_rejects_ragged_matrix() {
        Tsp::new(vec![vec![0.0, 1.0], vec![1.0]]);
    }
}
