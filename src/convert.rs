use crate::error::Error;
use crate::grid::{check_board, CELLS};

/// Serializes a board as 81 comma-separated decimal digits, `0` for blank.
pub fn board_to_csv(cells: &[u8]) -> Result<String, Error> {
    check_board(cells)?;
    Ok(cells.iter().map(u8::to_string).collect::<Vec<_>>().join(","))
}

/// Parses the CSV grid format back into an 81-cell board. Every field must
/// be a single digit 0..=9.
pub fn csv_to_board(text: &str) -> Result<Vec<u8>, Error> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != CELLS {
        return Err(Error::CellCount { len: fields.len() });
    }
    let mut cells = Vec::with_capacity(CELLS);
    for (idx, field) in fields.iter().enumerate() {
        let field = field.trim();
        match field.as_bytes() {
            &[d @ b'0'..=b'9'] => cells.push(d - b'0'),
            _ => return Err(Error::CellDigits { idx, text: field.to_string() }),
        }
    }
    Ok(cells)
}

/// Serializes a list of UI cell strings as CSV. A cell may hold several
/// pencil-mark digits; a blank or absent cell normalizes to `"0"`. A cell
/// with a non-digit character or the same digit twice is rejected.
pub fn cells_to_csv(cells: &[Option<String>]) -> Result<String, Error> {
    if cells.len() != CELLS {
        return Err(Error::CellCount { len: cells.len() });
    }
    let mut out = Vec::with_capacity(CELLS);
    for (idx, cell) in cells.iter().enumerate() {
        let text = cell.as_deref().map_or("", str::trim);
        if text.is_empty() {
            out.push("0".to_string());
            continue;
        }
        let mut seen = [false; 10];
        for ch in text.chars() {
            match ch.to_digit(10) {
                Some(d) if !seen[d as usize] => seen[d as usize] = true,
                _ => return Err(Error::CellDigits { idx, text: text.to_string() }),
            }
        }
        out.push(text.to_string());
    }
    Ok(out.join(","))
}

/// Parses the default grid format: an 81-character digit string with no
/// separators. Blank input yields an empty sequence rather than an error.
pub fn default_grid_to_board(text: &str) -> Result<Vec<u8>, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }
    if text.chars().count() != CELLS {
        return Err(Error::CellCount { len: text.chars().count() });
    }
    let mut cells = Vec::with_capacity(CELLS);
    for (idx, ch) in text.chars().enumerate() {
        match ch.to_digit(10) {
            Some(d) => cells.push(d as u8),
            None => return Err(Error::CellDigits { idx, text: ch.to_string() }),
        }
    }
    Ok(cells)
}

/// Formats a board as the 81-character default grid string.
pub fn board_to_default_grid(cells: &[u8]) -> Result<String, Error> {
    check_board(cells)?;
    Ok(cells.iter().map(|&d| char::from(b'0' + d)).collect())
}
