use itertools::Itertools;
use log::trace;

use crate::error::Error;
use crate::grid::{check_board, Grid};

/// Rates how far direct elimination carries a board, as a percentage in
/// 0..=100 of its blanks: repeatedly place naked singles (a cell with one
/// remaining candidate) and hidden singles (a digit with one remaining home
/// in a unit) until neither applies, then report resolved / initial blanks,
/// rounded. A board with no blanks rates 100; a board whose givens already
/// contradict rates 0. High values mean the puzzle falls to bookkeeping,
/// low values mean search is needed early.
pub fn possibility(cells: &[u8]) -> Result<u8, Error> {
    check_board(cells)?;
    let blanks = cells.iter().filter(|&&d| d == 0).count();
    if blanks == 0 {
        return Ok(100);
    }
    let Some(mut g) = Grid::from_cells(cells) else {
        return Ok(0);
    };

    let mut resolved = 0usize;
    loop {
        let Some((idx, d)) = naked_single(&g).or_else(|| hidden_single(&g)) else {
            break;
        };
        if !g.place(idx, d) {
            break;
        }
        resolved += 1;
    }
    let pct = ((resolved * 100 + blanks / 2) / blanks) as u8;
    trace!("rated board: {resolved}/{blanks} blanks by singles -> {pct}%");
    Ok(pct)
}

fn naked_single(g: &Grid) -> Option<(usize, u8)> {
    for idx in 0..81 {
        if g.get(idx) == 0 {
            let m = g.candidates(idx);
            if m.count_ones() == 1 {
                return Some((idx, m.trailing_zeros() as u8));
            }
        }
    }
    None
}

fn hidden_single(g: &Grid) -> Option<(usize, u8)> {
    let scan = |unit: [usize; 9]| -> Option<(usize, u8)> {
        for d in 1..=9u8 {
            let mut home = None;
            let mut n = 0;
            for &idx in &unit {
                if g.get(idx) == 0 && g.candidates(idx) & (1 << d) != 0 {
                    n += 1;
                    home = Some(idx);
                }
            }
            if n == 1 {
                return home.map(|idx| (idx, d));
            }
        }
        None
    };
    for r in 0..9 {
        if let Some(hit) = scan(std::array::from_fn(|c| r * 9 + c)) {
            return Some(hit);
        }
    }
    for c in 0..9 {
        if let Some(hit) = scan(std::array::from_fn(|r| r * 9 + c)) {
            return Some(hit);
        }
    }
    for (br, bc) in (0..3usize).cartesian_product(0..3usize) {
        if let Some(hit) = scan(std::array::from_fn(|k| (br * 3 + k / 3) * 9 + bc * 3 + k % 3)) {
            return Some(hit);
        }
    }
    None
}
