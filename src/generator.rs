use std::time::Instant;

use log::debug;
use rand::{seq::SliceRandom, SeedableRng};

use crate::error::Error;
use crate::grid::{Grid, CELLS};
use crate::level::{GeneratorConfig, Level};
use crate::puzzle::Puzzle;
use crate::rating;
use crate::solver;

/// Difficulty-calibrated puzzle generator. Each call to [`generate`] builds a
/// fresh random solution, carves blanks out of it, and retries until the
/// board's possibility rating lands in the level's band or the attempt/time
/// budget runs out, at which point the closest candidate seen is returned.
///
/// [`generate`]: Generator::generate
pub struct Generator {
    rng: rand::rngs::StdRng,
    config: GeneratorConfig,
}

impl Generator {
    pub fn new(seed: Option<u64>) -> Self {
        Self::with_config(GeneratorConfig::default(), seed)
    }

    pub fn with_config(config: GeneratorConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => rand::rngs::StdRng::seed_from_u64(s),
            None => rand::rngs::StdRng::from_entropy(),
        };
        Self { rng, config }
    }

    /// Generates a puzzle for level selector 1 (easy), 2 (medium), or
    /// 3 (difficult); any other selector is rejected. Consecutive calls are
    /// independent and draw fresh randomness.
    pub fn generate(&mut self, level: i32) -> Result<Puzzle, Error> {
        let level = Level::from_selector(level)?;
        let band = self.config.band(level);
        let attempts = self.config.max_attempts.max(1);
        let started = Instant::now();

        let mut best: Option<Puzzle> = None;
        let mut best_distance = u32::MAX;
        for attempt in 1..=attempts {
            let candidate = self.attempt(level)?;
            let score = candidate.possibility() as u32;
            if band.contains(score) {
                debug!("{level:?}: attempt {attempt} scored {score}, in band");
                return Ok(candidate);
            }
            let distance = band.distance(score);
            debug!("{level:?}: attempt {attempt} scored {score}, off band by {distance}");
            if distance < best_distance {
                best_distance = distance;
                best = Some(candidate);
            }
            if started.elapsed() >= self.config.time_budget {
                debug!("{level:?}: time budget spent after attempt {attempt}");
                break;
            }
        }

        match best {
            Some(candidate) => {
                debug!(
                    "{level:?}: band unreachable, falling back to candidate off by {best_distance}"
                );
                Ok(candidate)
            }
            None => self.attempt(level),
        }
    }

    /// One full generation pass: solution, carve, score.
    fn attempt(&mut self, level: Level) -> Result<Puzzle, Error> {
        let solution = self.fresh_solution();
        let board = self.carve(&solution, self.config.carve_target(level));
        let possibility = rating::possibility(&board)?;
        Puzzle::new(solution.to_vec(), board.to_vec(), possibility)
    }

    /// Fills an empty grid by backtracking with the candidate digits tried in
    /// random order, so every call yields a different complete solution while
    /// the solver proper stays deterministic.
    fn fresh_solution(&mut self) -> [u8; CELLS] {
        let mut g = Grid::empty();
        while !self.fill(&mut g) {
            g = Grid::empty();
        }
        *g.cells()
    }

    fn fill(&mut self, g: &mut Grid) -> bool {
        let Some(idx) = g.first_empty() else { return true };
        let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
        digits.shuffle(&mut self.rng);
        for d in digits {
            if g.candidates(idx) & (1 << d) == 0 {
                continue;
            }
            let mut child = g.clone();
            if !child.place(idx, d) {
                continue;
            }
            if self.fill(&mut child) {
                *g = child;
                return true;
            }
        }
        false
    }

    /// Clears up to `target` cells from a solved board, visiting each cell at
    /// most once in random order and keeping a removal only while the board
    /// still has exactly one completion. The first removal always survives
    /// the probe, so the board always retains at least one blank.
    fn carve(&mut self, solution: &[u8; CELLS], target: usize) -> [u8; CELLS] {
        let mut board = *solution;
        let mut order: Vec<usize> = (0..CELLS).collect();
        order.shuffle(&mut self.rng);

        let mut removed = 0usize;
        for idx in order {
            if removed >= target.max(1) {
                break;
            }
            let old = board[idx];
            board[idx] = 0;
            let unique = Grid::from_cells(&board)
                .map_or(false, |g| solver::count_completions(&g, 2) == 1);
            if unique {
                removed += 1;
            } else {
                board[idx] = old;
            }
        }
        debug_assert!(removed > 0);
        board
    }
}
