use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("grid must contain exactly 81 cells, got {len}")]
    GridLength { len: usize },
    #[error("cell {idx} holds {value}, expected a digit in 0..=9")]
    CellValue { idx: usize, value: u8 },
    #[error("level {level} is invalid: must be between 1 and 3")]
    Level { level: i32 },
    #[error("invalid or repeated digits in cell {idx}: {text:?}")]
    CellDigits { idx: usize, text: String },
    #[error("cell list must contain exactly 81 values, got {len}")]
    CellCount { len: usize },
    #[error("possibility percentage {value} is out of range 0..=100")]
    Percentage { value: u8 },
}
