//! Day 1 through the plugin registry, the way the CLI runs it

use aoc_2020::my_solutions::year_2020::day_1;
use aoc_solver::{InputError, RegistryBuilder, SolverError, SolverRegistry, input};
use std::fs;
use tempfile::TempDir;

/// (input, part 1, part 2)
const CASES: &[(&str, &str, &str)] = &[
    ("1721\n979\n366\n299\n675\n1456\n", "514579", "241861950"),
    ("1010\n1010\n0\n", "1020100", "0"),
    ("2000 20 1000 1000 20", "40000", "20000000"),
];

fn registry() -> SolverRegistry {
    RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"pair-sum"))
        .unwrap()
        .build()
}

#[test]
fn test_day_1_registered() {
    let registry = registry();
    let info = registry.get_info(2020, 1).expect("day 1 registered");
    assert_eq!(info.parts, 2);
    assert_eq!(day_1::TARGET, 2020);
}

#[test]
fn test_day_1_answers() {
    let registry = registry();
    for &(input, part1, part2) in CASES {
        let mut solver = registry.create_solver(2020, 1, input).unwrap();
        assert_eq!(solver.solve(1).unwrap().answer, part1, "part 1 of {:?}", input);
        assert_eq!(solver.solve(2).unwrap().answer, part2, "part 2 of {:?}", input);
    }
}

#[test]
fn test_day_1_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("day01.txt");
    fs::write(&path, CASES[0].0).unwrap();

    let text = input::read_source(&path).unwrap();
    let mut solver = registry().create_solver(2020, 1, &text).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "514579");
}

#[test]
fn test_day_1_missing_file() {
    let temp = TempDir::new().unwrap();
    assert!(matches!(
        input::read_source(temp.path().join("day01.txt")),
        Err(InputError::SourceNotFound { .. })
    ));
}

#[test]
fn test_day_1_bad_input() {
    assert!(matches!(
        registry().create_solver(2020, 1, "1721\nabc\n"),
        Err(SolverError::ParseError(_))
    ));
}
