use sudogen::{grid, solve, Band, Generator, GeneratorConfig, Level, Puzzle, SolveReport, SOLVED};

#[test]
fn generates_structurally_sound_puzzles_for_each_level() {
    let mut generator = Generator::new(Some(7));
    for level in 1..=3 {
        let puzzle = generator.generate(level).unwrap();
        let (solution, board, possibility) = puzzle.parts();

        assert_eq!(solution.len(), 81);
        assert!(solution.iter().all(|&d| (1..=9).contains(&d)));
        assert!(grid::consistent(solution));

        assert_eq!(board.len(), 81);
        assert!(board.iter().any(|&d| d == 0), "level {level} puzzle has no blanks");
        for (b, s) in board.iter().zip(solution) {
            assert!(*b == 0 || b == s, "board disagrees with its solution");
        }

        assert!(possibility[0] <= 100);

        let mut work = board.to_vec();
        assert_eq!(solve(&mut work).unwrap(), SOLVED);
        assert_eq!(work, solution.to_vec());
    }
}

#[test]
fn level_selectors_round_trip() {
    for n in 1..=3 {
        assert_eq!(Level::from_selector(n).unwrap().selector(), n);
    }
    assert!(Level::from_selector(5).is_err());
}

#[test]
fn rejects_out_of_range_levels() {
    let mut generator = Generator::new(None);
    for level in [-1, 0, 4, 300] {
        let err = generator.generate(level).unwrap_err();
        assert!(
            err.to_string().contains("must be between 1 and 3"),
            "level {level}: {err}"
        );
    }
}

#[test]
fn easy_puzzles_stay_above_the_floor() {
    let floor = GeneratorConfig::default().band(Level::Easy).min.unwrap();
    let mut generator = Generator::new(Some(42));
    for round in 0..50 {
        let puzzle = generator.generate(1).unwrap();
        assert!(
            puzzle.possibility() as u32 >= floor,
            "round {round}: score {} below floor {floor}",
            puzzle.possibility()
        );
    }
}

#[test]
fn unreachable_band_still_returns_a_sound_puzzle() {
    let config = GeneratorConfig {
        max_attempts: 4,
        bands: [Band::at_least(50000); 3],
        ..GeneratorConfig::default()
    };
    let mut generator = Generator::with_config(config, Some(3));
    let puzzle = generator.generate(2).unwrap();

    assert_eq!(puzzle.solution().len(), 81);
    assert!(puzzle.solution().iter().all(|&d| d != 0));
    assert_eq!(puzzle.board().len(), 81);
    assert!(puzzle.board().iter().any(|&d| d == 0));
    assert!(puzzle.possibility() <= 100);
}

#[test]
fn consecutive_calls_are_independent() {
    let mut generator = Generator::new(Some(11));
    let first = generator.generate(1).unwrap();
    let second = generator.generate(1).unwrap();
    assert_ne!(first.board(), second.board());
}

#[test]
fn value_records_validate_their_fields() {
    let err = Puzzle::new(vec![1; 80], vec![0; 81], 10).unwrap_err();
    assert!(err.to_string().contains("80"), "message: {err}");

    let err = Puzzle::new(vec![1; 81], vec![0; 81], 101).unwrap_err();
    assert!(err.to_string().contains("101"), "message: {err}");

    let err = SolveReport::new(true, vec![0; 9], 10).unwrap_err();
    assert!(err.to_string().contains("9"), "message: {err}");
}

#[test]
fn value_records_compare_structurally() {
    let solution = vec![1; 81];
    let mut board = solution.clone();
    board[17] = 0;
    let a = Puzzle::new(solution.clone(), board.clone(), 50).unwrap();
    let b = Puzzle::new(solution, board, 50).unwrap();
    assert_eq!(a, b);
}
