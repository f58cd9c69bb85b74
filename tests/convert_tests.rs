use pretty_assertions::assert_eq;
use sudogen::convert::{
    board_to_csv, board_to_default_grid, cells_to_csv, csv_to_board, default_grid_to_board,
};

const PUZZLE: &str =
    "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

#[test]
fn default_grid_round_trips() {
    let cells = default_grid_to_board(PUZZLE).unwrap();
    assert_eq!(cells.len(), 81);
    assert_eq!(board_to_default_grid(&cells).unwrap(), PUZZLE);
}

#[test]
fn blank_default_grid_is_an_empty_sequence() {
    assert!(default_grid_to_board("").unwrap().is_empty());
    assert!(default_grid_to_board("  \n").unwrap().is_empty());
}

#[test]
fn default_grid_rejects_wrong_length() {
    let err = default_grid_to_board(&"5".repeat(80)).unwrap_err();
    assert!(err.to_string().contains("must contain exactly 81 values"), "message: {err}");
    assert!(err.to_string().contains("80"), "message: {err}");
}

#[test]
fn csv_round_trips_with_blanks_as_zero() {
    let cells = default_grid_to_board(PUZZLE).unwrap();
    let csv = board_to_csv(&cells).unwrap();
    assert_eq!(csv.split(',').count(), 81);
    assert!(csv.split(',').all(|f| f.len() == 1));
    assert_eq!(csv_to_board(&csv).unwrap(), cells);
}

#[test]
fn csv_rejects_wrong_count_and_bad_fields() {
    let err = csv_to_board("1,2,3").unwrap_err();
    assert!(err.to_string().contains("must contain exactly 81 values"), "message: {err}");

    let mut fields = vec!["0"; 81];
    fields[5] = "x";
    let err = csv_to_board(&fields.join(",")).unwrap_err();
    assert!(err.to_string().contains("invalid or repeated digits"), "message: {err}");
}

#[test]
fn cell_lists_normalize_blanks_and_keep_pencil_marks() {
    let mut cells: Vec<Option<String>> = vec![None; 81];
    cells[0] = Some("5".into());
    cells[1] = Some(String::new());
    cells[2] = Some("139".into());

    let csv = cells_to_csv(&cells).unwrap();
    let fields: Vec<&str> = csv.split(',').collect();
    assert_eq!(fields.len(), 81);
    assert_eq!(fields[0], "5");
    assert_eq!(fields[1], "0");
    assert_eq!(fields[2], "139");
    assert!(fields[3..].iter().all(|f| *f == "0"));
}

#[test]
fn cell_lists_reject_repeated_digits() {
    let mut cells: Vec<Option<String>> = vec![None; 81];
    cells[4] = Some("11".into());
    let err = cells_to_csv(&cells).unwrap_err();
    assert!(err.to_string().contains("repeated digits in cell"), "message: {err}");
}

#[test]
fn cell_lists_reject_wrong_count() {
    let err = cells_to_csv(&vec![None; 80]).unwrap_err();
    assert!(err.to_string().contains("must contain exactly 81 values"), "message: {err}");
}
