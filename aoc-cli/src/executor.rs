//! Runs the selected solvers one after another

use crate::config::Config;
use crate::error::{ArcRunError, RunError};
use crate::inputs::InputStore;
use aoc_solver::SolverRegistry;
use chrono::TimeDelta;
use std::ops::RangeInclusive;
use tracing::{debug, info, warn};

/// Result from a single part
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, ArcRunError>,
    /// Set on the first part of each puzzle, since parsing happens once per puzzle
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

impl SolverResult {
    fn failed(year: u16, day: u8, part: u8, error: ArcRunError) -> Self {
        SolverResult {
            year,
            day,
            part,
            answer: Err(error),
            parse_duration: None,
            solve_duration: TimeDelta::zero(),
        }
    }
}

/// A puzzle to run and which of its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Sequential executor over the registry
pub struct Executor {
    registry: SolverRegistry,
    store: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, store: InputStore, config: &Config) -> Self {
        Self {
            registry,
            store,
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn store(&self) -> &InputStore {
        &self.store
    }

    /// Collect work items by filtering registry metadata, in (year, day) order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        self.registry
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Filter parts based on the part filter and the solver's part count
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Run every work item, handing each part's result to `on_result` as it completes
    pub fn execute<F>(&self, mut on_result: F)
    where
        F: FnMut(SolverResult),
    {
        for work in self.collect_work_items() {
            self.run_work_item(&work, &mut on_result);
        }
    }

    fn run_work_item<F>(&self, work: &WorkItem, on_result: &mut F)
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let fail_all = |error: RunError, on_result: &mut F| {
            warn!(year, day, %error, "skipping puzzle");
            let error = ArcRunError::from(error);
            for part in work.parts.clone() {
                on_result(SolverResult::failed(year, day, part, error.clone()));
            }
        };

        let input = match self.store.load(year, day) {
            Ok(input) => input,
            Err(e) => return fail_all(RunError::from(e), on_result),
        };
        info!(year, day, path = %self.store.input_path(year, day).display(), "loaded input");

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => return fail_all(RunError::from(e), on_result),
        };
        let mut parse_duration = Some(solver.parse_duration());

        for part in work.parts.clone() {
            let result = match solver.solve(part) {
                Ok(solved) => SolverResult {
                    year,
                    day,
                    part,
                    solve_duration: solved.duration(),
                    answer: Ok(solved.answer),
                    parse_duration: parse_duration.take(),
                },
                Err(e) => {
                    let error = RunError::from(aoc_solver::SolverError::from(e));
                    SolverResult::failed(year, day, part, ArcRunError::from(error))
                }
            };
            debug!(year, day, part, ok = result.answer.is_ok(), "part finished");
            on_result(result);
        }
    }
}
