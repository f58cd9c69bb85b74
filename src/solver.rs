use crate::error::Error;
use crate::grid::{check_board, Grid};
use crate::puzzle::SolveReport;
use crate::rating;

/// Status returned by [`solve`] on success: solved cleanly, ambiguity slot 0.
pub const SOLVED: [i32; 2] = [0, 0];
/// Status returned by [`solve`] when no completion exists.
pub const UNSOLVED: [i32; 2] = [-1, 0];

/// Fills every blank of `cells` in place so each row, column, and box holds
/// 1..=9 exactly once.
///
/// Depth-first backtracking over the first blank in row-major order, digits
/// tried in ascending order; fully deterministic for a given input. On
/// success the board is mutated to the completed solution and the status is
/// `[0, 0]`; when no completion exists the board is left as passed in and the
/// status is `[-1, 0]`. The second status slot is reserved for an ambiguity
/// counter and is always 0 today. Only structural violations (wrong length,
/// out-of-range cell value) are errors; an unsolvable board is a normal
/// outcome.
pub fn solve(cells: &mut [u8]) -> Result<[i32; 2], Error> {
    check_board(cells)?;
    let Some(mut g) = Grid::from_cells(cells) else {
        return Ok(UNSOLVED);
    };
    if search(&mut g) {
        cells.copy_from_slice(g.cells());
        Ok(SOLVED)
    } else {
        Ok(UNSOLVED)
    }
}

/// Solves a copy of `cells` and wraps the outcome together with the input's
/// possibility rating. The input board itself is not mutated.
pub fn solve_report(cells: &[u8]) -> Result<SolveReport, Error> {
    check_board(cells)?;
    let possibility = rating::possibility(cells)?;
    let mut work = cells.to_vec();
    let status = solve(&mut work)?;
    SolveReport::new(status == SOLVED, work, possibility)
}

/// Counts completions of `cells`, stopping early once `limit` is reached.
/// The generator probes with `limit = 2` to distinguish unique puzzles from
/// ambiguous ones.
pub fn count_solutions(cells: &[u8], limit: u32) -> Result<u32, Error> {
    check_board(cells)?;
    let Some(g) = Grid::from_cells(cells) else {
        return Ok(0);
    };
    Ok(count_completions(&g, limit))
}

fn search(g: &mut Grid) -> bool {
    let Some(idx) = g.first_empty() else { return true };
    let cands = g.candidates(idx);
    for d in 1..=9u8 {
        if cands & (1 << d) == 0 {
            continue;
        }
        let mut child = g.clone();
        if !child.place(idx, d) {
            continue;
        }
        if search(&mut child) {
            *g = child;
            return true;
        }
    }
    false
}

pub(crate) fn count_completions(g: &Grid, limit: u32) -> u32 {
    fn rec(g: &Grid, limit: u32) -> u32 {
        if limit == 0 {
            return 0;
        }
        let Some(idx) = g.first_empty() else { return 1 };
        let cands = g.candidates(idx);
        let mut count = 0;
        for d in 1..=9u8 {
            if cands & (1 << d) == 0 {
                continue;
            }
            let mut child = g.clone();
            if !child.place(idx, d) {
                continue;
            }
            count += rec(&child, limit - count);
            if count >= limit {
                break;
            }
        }
        count
    }
    rec(g, limit)
}
