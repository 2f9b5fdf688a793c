//! Solver registry for managing and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::instance::{DynSolver, SolverInstance};
use crate::solver::Solver;
use std::collections::BTreeMap;
use tracing::debug;

/// First Advent of Code year
pub const BASE_YEAR: u16 = 2015;
/// Number of supported years (2015-2034)
pub const MAX_YEARS: u16 = 20;
/// Days per Advent of Code year
pub const DAYS_PER_YEAR: u8 = 25;

fn check_year_day(year: u16, day: u8) -> Result<(), RegistrationError> {
    let year_ok = (BASE_YEAR..BASE_YEAR + MAX_YEARS).contains(&year);
    let day_ok = (1..=DAYS_PER_YEAR).contains(&day);
    if year_ok && day_ok {
        Ok(())
    } else {
        Err(RegistrationError::InvalidYearDay(year, day))
    }
}

/// Factory turning raw input into a parsed, type-erased solver
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    pub year: u16,
    pub day: u8,
    /// Number of parts this solver supports
    pub parts: u8,
}

struct SolverEntry {
    factory: SolverFactory,
    parts: u8,
}

/// Builder for an immutable [`SolverRegistry`].
///
/// Rejects duplicate and out-of-range registrations as they happen.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError, RegistryBuilder, SolveError, Solver, input};
///
/// struct Sum;
///
/// impl AocParser for Sum {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         input::parse_numbers(input)
///     }
/// }
///
/// impl Solver for Sum {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Sum>(2020, 1)
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(2020, 1, "1\n2\n3").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, "6");
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a factory for `year`/`day` with an explicit part count
    ///
    /// # Returns
    /// * `Err(RegistrationError::InvalidYearDay)` - year outside 2015-2034 or day outside 1-25
    /// * `Err(RegistrationError::DuplicateSolver)` - something is already registered there
    pub fn register<F>(
        mut self,
        year: u16,
        day: u8,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + 'static,
    {
        check_year_day(year, day)?;
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        debug!(year, day, parts, "registered solver");
        self.solvers.insert(
            (year, day),
            SolverEntry {
                factory: Box::new(factory),
                parts,
            },
        );
        Ok(self)
    }

    /// Register a [`Solver`] type, wrapping it in a [`SolverInstance`]
    pub fn register_solver<S>(self, year: u16, day: u8) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.register(year, day, S::PARTS, move |input: &str| {
            let instance = SolverInstance::<S>::new(year, day, input)?;
            let solver: Box<dyn DynSolver + '_> = Box::new(instance);
            Ok(solver)
        })
    }

    /// Register every plugin submitted through `inventory::submit!`
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register only the plugins accepted by `filter`
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2020 && plugin.tags.contains(&"pair-sum"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = plugin.solver.register_with(self, plugin.year, plugin.day)?;
            }
        }
        Ok(self)
    }

    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable lookup from year/day to solver factories
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverEntry>,
}

impl SolverRegistry {
    /// Parse `input` with the solver registered for `year`/`day`
    ///
    /// # Returns
    /// * `Err(SolverError::NotFound)` - nothing registered for that year/day
    /// * `Err(SolverError::ParseError)` - the solver rejected the input
    pub fn create_solver<'a>(
        &self,
        year: u16,
        day: u8,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        let entry = self
            .solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))?;

        (entry.factory)(input).map_err(SolverError::ParseError)
    }

    pub fn get_info(&self, year: u16, day: u8) -> Option<FactoryInfo> {
        self.solvers.get(&(year, day)).map(|e| FactoryInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    /// Registered solvers in (year, day) order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        self.solvers.iter().map(|(&(year, day), e)| FactoryInfo {
            year,
            day,
            parts: e.parts,
        })
    }

    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Object-safe registration hook, so plugins of different solver types can
/// live in one `inventory` collection.
///
/// Every `Solver + Sync + 'static` type gets this through the blanket impl.
pub trait RegisterableSolver: Sync {
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        year: u16,
        day: u8,
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(year, day)
    }
}

/// A solver submitted for automatic registration.
///
/// Usually produced by `#[derive(AutoRegisterSolver)]`; submitting one by
/// hand looks like this:
///
/// ```no_run
/// use aoc_solver::{AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1;
///
/// impl AocParser for Day1 {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Day1 {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<String, SolveError> {
///         Ok(shared.len().to_string())
///     }
/// }
///
/// aoc_solver::inventory::submit! {
///     SolverPlugin { year: 2020, day: 1, solver: &Day1, tags: &["2020"] }
/// }
/// ```
pub struct SolverPlugin {
    pub year: u16,
    pub day: u8,
    pub solver: &'static dyn RegisterableSolver,
    /// Free-form labels used to filter which plugins get registered
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);
