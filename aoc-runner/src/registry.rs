//! Solver registry for looking up days and creating solver instances

use crate::day::{DAYS_PER_EVENT, Day};
use crate::error::{ParseError, RegistrationError, SelfTestError, SolverError};
use crate::instance::{DynSolver, ParseAttempt, ParsedDay, Timing};
use crate::self_test::{SelfTestOutcome, run_self_test};
use crate::solver::Solver;

/// Factory function type for creating solver instances from input
pub type SolverFactory =
    Box<dyn for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError> + Send + Sync>;

/// Function running a day's self-test
pub type SelfTestFn = fn() -> Result<SelfTestOutcome, SelfTestError>;

/// Metadata about a registered solver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactoryInfo {
    /// The puzzle day
    pub day: Day,
    /// Number of parts this solver supports
    pub parts: u8,
    /// Whether the day has a self-test
    pub has_self_test: bool,
    /// Tags attached at registration
    pub tags: &'static [&'static str],
}

/// Factory entry with metadata
struct SolverEntry {
    factory: SolverFactory,
    self_test: Option<SelfTestFn>,
    parts: u8,
    tags: &'static [&'static str],
}

impl SolverEntry {
    fn info(&self, day: Day) -> FactoryInfo {
        FactoryInfo {
            day,
            parts: self.parts,
            has_self_test: self.self_test.is_some(),
            tags: self.tags,
        }
    }
}

/// Builder for constructing a [`SolverRegistry`] with a fluent API
///
/// Registration rejects a second solver for the same day. The registry built from it is
/// immutable.
///
/// # Example
///
/// ```
/// use aoc_runner::{Answer, AocParser, Day, ParseError, RegistryBuilder, SolveError, Solver};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<&str, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl Solver for Lines {
///     const PARTS: u8 = 1;
///
///     fn solve_part(shared: &mut Self::SharedData<'_>, _part: u8) -> Result<Answer, SolveError> {
///         Ok(shared.lines().count() as Answer)
///     }
/// }
///
/// let day = Day::new(1).unwrap();
/// let registry = RegistryBuilder::new()
///     .register_solver::<Lines>(day, &[])
///     .unwrap()
///     .build();
///
/// let mut solver = registry.create_solver(day, "a\nb\nc").unwrap();
/// assert_eq!(solver.solve(1).unwrap().answer, 3);
/// ```
pub struct RegistryBuilder {
    entries: Vec<Option<SolverEntry>>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder with one slot per day
    pub fn new() -> Self {
        Self {
            entries: (0..DAYS_PER_EVENT).map(|_| None).collect(),
        }
    }

    fn insert<F>(
        mut self,
        day: Day,
        parts: u8,
        tags: &'static [&'static str],
        self_test: Option<SelfTestFn>,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        let slot = &mut self.entries[day.index()];
        if slot.is_some() {
            return Err(RegistrationError::DuplicateSolver(day));
        }
        tracing::trace!(%day, parts, "registered solver");
        *slot = Some(SolverEntry {
            factory: Box::new(factory),
            self_test,
            parts,
            tags,
        });
        Ok(self)
    }

    /// Register a solver type for a day, including its self-test
    pub fn register_solver<S>(
        self,
        day: Day,
        tags: &'static [&'static str],
    ) -> Result<Self, RegistrationError>
    where
        S: Solver + 'static,
    {
        self.insert(
            day,
            S::PARTS,
            tags,
            Some(run_self_test::<S>),
            move |input: &str| Ok(Box::new(ParsedDay::<S>::parse(day, input)?)),
        )
    }

    /// Register a bare factory function for a day, without a self-test
    pub fn register_factory<F>(
        self,
        day: Day,
        parts: u8,
        factory: F,
    ) -> Result<Self, RegistrationError>
    where
        F: for<'a> Fn(&'a str) -> Result<Box<dyn DynSolver + 'a>, ParseError>
            + Send
            + Sync
            + 'static,
    {
        self.insert(day, parts, &[], None, factory)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`, usually by
    /// `#[derive(AutoRegisterSolver)]`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use aoc_runner::RegistryBuilder;
    /// // Register only solvers tagged as "grid"
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.tags.contains(&"grid"))
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                let day = Day::new(plugin.day).ok_or(RegistrationError::InvalidDay(plugin.day))?;
                self = plugin.solver.register_with(self, day, plugin.tags)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            entries: self.entries,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping days to their solvers
pub struct SolverRegistry {
    entries: Vec<Option<SolverEntry>>,
}

impl SolverRegistry {
    fn entry(&self, day: Day) -> Option<&SolverEntry> {
        self.entries.get(day.index()).and_then(Option::as_ref)
    }

    /// Iterate over metadata for all registered days, in day order
    pub fn iter_info(&self) -> impl Iterator<Item = FactoryInfo> + '_ {
        Day::all()
            .zip(&self.entries)
            .filter_map(|(day, entry)| entry.as_ref().map(|e| e.info(day)))
    }

    /// Get metadata for one day
    pub fn get_info(&self, day: Day) -> Option<FactoryInfo> {
        self.entry(day).map(|e| e.info(day))
    }

    /// Check if a solver is registered for the day
    pub fn contains(&self, day: Day) -> bool {
        self.entry(day).is_some()
    }

    /// Number of registered days
    pub fn len(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(Option::is_none)
    }

    /// Parse `input` for a day and time the parse.
    ///
    /// Only a day with no solver is an error. A parse failure is kept in the returned
    /// [`ParseAttempt`] alongside how long the parser ran before giving up.
    pub fn parse<'a>(&self, day: Day, input: &'a str) -> Result<ParseAttempt<'a>, SolverError> {
        let entry = self.entry(day).ok_or(SolverError::NotFound(day))?;
        let (solver, timing) = Timing::measure(|| (entry.factory)(input));
        tracing::debug!(%day, duration = ?timing.duration(), ok = solver.is_ok(), "parsed input");
        Ok(ParseAttempt {
            day,
            timing,
            solver,
        })
    }

    /// Parse `input` for a day, treating a parse failure as an error
    pub fn create_solver<'a>(
        &self,
        day: Day,
        input: &'a str,
    ) -> Result<Box<dyn DynSolver + 'a>, SolverError> {
        self.parse(day, input)?
            .solver
            .map_err(SolverError::ParseError)
    }

    /// Run the self-test registered for a day
    ///
    /// A day registered without a self-test yields [`SelfTestOutcome::NotImplemented`].
    pub fn self_test(&self, day: Day) -> Result<SelfTestOutcome, SelfTestError> {
        let entry = self.entry(day).ok_or(SelfTestError::NotFound(day))?;
        match entry.self_test {
            Some(run) => run(),
            None => Ok(SelfTestOutcome::NotImplemented),
        }
    }
}

/// Trait for solvers that can register themselves with a registry builder
///
/// Unlike [`Solver`], this trait has no associated types, so different solver types can be
/// collected behind `&'static dyn RegisterableSolver` in a [`SolverPlugin`].
pub trait RegisterableSolver: Sync {
    /// Register this solver type with the builder for a day
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: Day,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError>;
}

impl<S> RegisterableSolver for S
where
    S: Solver + Sync + 'static,
{
    fn register_with(
        &self,
        builder: RegistryBuilder,
        day: Day,
        tags: &'static [&'static str],
    ) -> Result<RegistryBuilder, RegistrationError> {
        builder.register_solver::<S>(day, tags)
    }
}

/// Plugin information for automatic solver registration
///
/// `day` is a raw number so the plugin can be built in a `static`; it is validated when the
/// plugin is registered.
///
/// # Example
///
/// ```no_run
/// use aoc_runner::{Answer, AocParser, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl AocParser for Day1Solver {
///     type SharedData<'a> = ();
///
///     fn parse(_: &str) -> Result<(), ParseError> {
///         Ok(())
///     }
/// }
///
/// impl Solver for Day1Solver {
///     const PARTS: u8 = 1;
///
///     fn solve_part(_: &mut (), part: u8) -> Result<Answer, SolveError> {
///         Err(SolveError::PartNotImplemented(part))
///     }
/// }
///
/// aoc_runner::inventory::submit! {
///     SolverPlugin {
///         day: 1,
///         solver: &Day1Solver,
///         tags: &["easy"],
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The puzzle day (1-25)
    pub day: u8,
    /// The solver instance (type-erased)
    pub solver: &'static dyn RegisterableSolver,
    /// Optional tags for filtering (e.g., "parsing", "grid")
    pub tags: &'static [&'static str],
}

inventory::collect!(SolverPlugin);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolveError;
    use crate::solver::{Answer, AocParser, Example};

    struct Counter;

    impl AocParser for Counter {
        type SharedData<'a> = Vec<&'a str>;

        fn parse(input: &str) -> Result<Vec<&str>, ParseError> {
            if input.is_empty() {
                return Err(ParseError::MissingData("empty input".into()));
            }
            Ok(input.lines().collect())
        }
    }

    impl Solver for Counter {
        const PARTS: u8 = 2;
        const EXAMPLES: &'static [Example] = &[Example::new(1, "a\nbb", 2)];

        fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<Answer, SolveError> {
            match part {
                1 => Ok(shared.len() as Answer),
                2 => Ok(shared.iter().map(|l| l.len() as Answer).sum()),
                _ => Err(SolveError::PartNotImplemented(part)),
            }
        }
    }

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    #[test]
    fn test_create_and_solve() {
        let registry = RegistryBuilder::new()
            .register_solver::<Counter>(day(4), &["count"])
            .unwrap()
            .build();

        let mut solver = registry.create_solver(day(4), "a\nbb\nccc").unwrap();
        assert_eq!(solver.day(), day(4));
        assert_eq!(solver.parts(), 2);
        assert_eq!(solver.solve(1).unwrap().answer, 3);
        assert_eq!(solver.solve(2).unwrap().answer, 6);
        assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let result = RegistryBuilder::new()
            .register_solver::<Counter>(day(2), &[])
            .unwrap()
            .register_solver::<Counter>(day(2), &[]);
        assert!(matches!(
            result,
            Err(RegistrationError::DuplicateSolver(d)) if d == day(2)
        ));
    }

    #[test]
    fn test_missing_day_is_not_found() {
        let registry = RegistryBuilder::new().build();
        assert!(registry.is_empty());
        assert!(matches!(
            registry.create_solver(day(9), "x"),
            Err(SolverError::NotFound(d)) if d == day(9)
        ));
        assert!(matches!(
            registry.self_test(day(9)),
            Err(SelfTestError::NotFound(_))
        ));
    }

    #[test]
    fn test_parse_error_is_distinct_from_not_found() {
        let registry = RegistryBuilder::new()
            .register_solver::<Counter>(day(1), &[])
            .unwrap()
            .build();
        assert!(matches!(
            registry.create_solver(day(1), ""),
            Err(SolverError::ParseError(ParseError::MissingData(_)))
        ));
    }

    #[test]
    fn test_parse_attempt_is_timed_even_when_it_fails() {
        let registry = RegistryBuilder::new()
            .register_solver::<Counter>(day(5), &[])
            .unwrap()
            .build();

        let failed = registry.parse(day(5), "").unwrap();
        assert_eq!(failed.day, day(5));
        assert!(failed.duration() >= chrono::TimeDelta::zero());
        assert!(matches!(failed.solver, Err(ParseError::MissingData(_))));

        let parsed = registry.parse(day(5), "x\nyy").unwrap();
        assert!(parsed.timing.end >= parsed.timing.start);
        assert_eq!(parsed.solver.unwrap().solve(2).unwrap().answer, 3);

        assert!(matches!(
            registry.parse(day(6), "x"),
            Err(SolverError::NotFound(_))
        ));
    }

    #[test]
    fn test_self_test_slots() {
        let registry = RegistryBuilder::new()
            .register_solver::<Counter>(day(1), &[])
            .unwrap()
            .register_factory(day(2), 1, |input: &str| {
                Ok(Box::new(ParsedDay::<Counter>::parse(day(2), input)?))
            })
            .unwrap()
            .build();

        assert!(matches!(
            registry.self_test(day(1)),
            Ok(SelfTestOutcome::Passed(checks)) if checks.len() == 1
        ));
        assert_eq!(
            registry.self_test(day(2)).unwrap(),
            SelfTestOutcome::NotImplemented
        );
    }

    #[test]
    fn test_iter_info_in_day_order() {
        let registry = RegistryBuilder::new()
            .register_solver::<Counter>(day(12), &["b"])
            .unwrap()
            .register_solver::<Counter>(day(3), &["a"])
            .unwrap()
            .build();

        let infos: Vec<FactoryInfo> = registry.iter_info().collect();
        assert_eq!(registry.len(), 2);
        assert_eq!(infos[0].day, day(3));
        assert_eq!(infos[0].tags, &["a"]);
        assert!(infos[0].has_self_test);
        assert_eq!(infos[1].day, day(12));
        assert_eq!(registry.get_info(day(12)), Some(infos[1]));
        assert!(registry.contains(day(3)));
        assert!(!registry.contains(day(4)));
    }
}
