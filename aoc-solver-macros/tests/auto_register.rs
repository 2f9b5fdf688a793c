use aoc_solver::{AocParser, ParseError, PartSolver, RegistryBuilder, SolveError, SolverError, input};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2019, day = 7, tags = ["macro-test", "sums"])]
struct Tagged;

impl AocParser for Tagged {
    type SharedData<'a> = Vec<i64>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input::parse_numbers(input)
    }
}

impl PartSolver<1> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i64>().to_string())
    }
}

impl PartSolver<2> for Tagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2019, day = 8)]
struct Untagged;

impl AocParser for Untagged {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.trim())
    }
}

impl PartSolver<1> for Untagged {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_uppercase())
    }
}

#[test]
fn test_all_plugins_registered() {
    let registry = RegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut tagged = registry.create_solver(2019, 7, "1 2 3").unwrap();
    assert_eq!(tagged.parts(), 2);
    assert_eq!(tagged.solve(1).unwrap().answer, "6");
    assert_eq!(tagged.solve(2).unwrap().answer, "3");

    let mut untagged = registry.create_solver(2019, 8, " abc\n").unwrap();
    assert_eq!(untagged.solve(1).unwrap().answer, "ABC");
}

#[test]
fn test_filter_by_tag() {
    let registry = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"macro-test"))
        .unwrap()
        .build();

    assert!(registry.get_info(2019, 7).is_some());
    assert!(matches!(
        registry.create_solver(2019, 8, "abc"),
        Err(SolverError::NotFound(2019, 8))
    ));
}

#[test]
fn test_plugin_metadata() {
    let plugin = aoc_solver::inventory::iter::<aoc_solver::SolverPlugin>()
        .find(|p| p.year == 2019 && p.day == 7)
        .expect("Tagged plugin submitted");
    assert_eq!(plugin.tags, &["macro-test", "sums"]);
}
