use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::grid::check_board;

/// Outcome of a solve pass: whether a completion was found, the (possibly
/// solved) board, and the input's possibility rating. Field-validated on
/// construction; equality is structural for test assertions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SolveReport {
    solved: bool,
    grid: Vec<u8>,
    possibility: u8,
}

impl SolveReport {
    pub fn new(solved: bool, grid: Vec<u8>, possibility: u8) -> Result<Self, Error> {
        check_board(&grid)?;
        if possibility > 100 {
            return Err(Error::Percentage { value: possibility });
        }
        Ok(Self { solved, grid, possibility })
    }

    pub fn solved(&self) -> bool { self.solved }
    pub fn grid(&self) -> &[u8] { &self.grid }
    pub fn possibility(&self) -> u8 { self.possibility }
}

/// A generated puzzle: the full solution, the board handed to the player
/// (zeros for blanks), and the possibility rating of that board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Puzzle {
    solution: Vec<u8>,
    board: Vec<u8>,
    possibility: u8,
}

impl Puzzle {
    pub fn new(solution: Vec<u8>, board: Vec<u8>, possibility: u8) -> Result<Self, Error> {
        check_board(&solution)?;
        check_board(&board)?;
        if possibility > 100 {
            return Err(Error::Percentage { value: possibility });
        }
        Ok(Self { solution, board, possibility })
    }

    pub fn solution(&self) -> &[u8] { &self.solution }
    pub fn board(&self) -> &[u8] { &self.board }
    pub fn possibility(&self) -> u8 { self.possibility }

    /// The three parallel sequences callers consume: solved grid, puzzle
    /// grid, and the single-element possibility score.
    pub fn parts(&self) -> (&[u8], &[u8], [u8; 1]) {
        (&self.solution, &self.board, [self.possibility])
    }
}
