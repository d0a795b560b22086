//! Test utilities for technique implementations.
//!
//! This module provides [`TechniqueTester`], a testing harness for verifying
//! that deduction techniques build the bridges they are expected to.

use bridges_core::{IslandId, Position, Puzzle, PuzzleStatus};

use crate::Technique;

/// A test harness for verifying technique implementations.
///
/// `TechniqueTester` tracks the initial and current state of a puzzle,
/// allowing you to apply techniques and assert that they produce the expected
/// bridges. Islands are addressed by position.
///
/// # Method Chaining
///
/// All methods return `self`, enabling fluent method chaining for readable tests.
///
/// # Panics
///
/// All assertion methods panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub struct TechniqueTester {
    initial: Puzzle,
    current: Puzzle,
}

impl TechniqueTester {
    /// Creates a new tester from an initial puzzle state.
    pub fn new(initial: Puzzle) -> Self {
        let current = initial.clone();
        Self { initial, current }
    }

    /// Creates a new tester from the text form of a puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the string cannot be parsed as a valid puzzle.
    #[track_caller]
    pub fn from_str(s: &str) -> Self {
        Self::new(s.parse().unwrap())
    }

    /// Builds a bridge as part of the initial state.
    ///
    /// # Panics
    ///
    /// Panics if either position is not an island or the bridge is rejected.
    #[track_caller]
    pub fn build(mut self, a: Position, b: Position, is_double: bool) -> Self {
        let (a, b) = (self.id(a), self.id(b));
        self.current.build_bridge(a, b, is_double).unwrap();
        self.initial = self.current.clone();
        self
    }

    /// Applies the technique once and returns self for chaining.
    ///
    /// Also asserts that `apply` made exactly the move `find_step` reported.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_once<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        self.apply_checked(technique);
        self
    }

    /// Applies the technique repeatedly until it makes no more progress.
    ///
    /// # Panics
    ///
    /// Panics if the technique returns an error.
    #[track_caller]
    pub fn apply_until_stuck<T>(mut self, technique: &T) -> Self
    where
        T: Technique,
    {
        while self.apply_checked(technique) {}
        self
    }

    #[track_caller]
    fn apply_checked<T>(&mut self, technique: &T) -> bool
    where
        T: Technique,
    {
        let name = technique.name();
        let step = technique.find_step(&self.current);
        let mut expected = self.current.clone();
        if let Some(step) = &step {
            assert_eq!(step.technique_name(), name);
            step.application().apply(&mut expected).unwrap();
        }
        let changed = technique.apply(&mut self.current).unwrap();
        assert_eq!(
            changed,
            step.is_some(),
            "{name}: apply returned {changed} but find_step returned {step:?}"
        );
        assert_eq!(
            self.current, expected,
            "{name}: apply and find_step disagree"
        );
        changed
    }

    /// Asserts that the technique's next step leaves `total` bridges between
    /// the islands at `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if there is no step or it names a different move.
    #[track_caller]
    pub fn assert_step<T>(self, technique: &T, from: Position, to: Position, total: u8) -> Self
    where
        T: Technique,
    {
        let step = technique
            .find_step(&self.current)
            .unwrap_or_else(|| panic!("{}: expected a step, found none", technique.name()));
        let (a, b) = step.application().islands();
        let actual = (
            self.current.island(a).position(),
            self.current.island(b).position(),
            step.application().total(),
        );
        assert_eq!(
            actual,
            (from, to, total),
            "{}: unexpected step {}",
            technique.name(),
            step.application()
        );
        self
    }

    /// Asserts that the technique has no step for the current state.
    ///
    /// # Panics
    ///
    /// Panics if the technique reports a step.
    #[track_caller]
    pub fn assert_no_step<T>(self, technique: &T) -> Self
    where
        T: Technique,
    {
        let step = technique.find_step(&self.current);
        assert!(
            step.is_none(),
            "{}: expected no step, found {step:?}",
            technique.name()
        );
        self
    }

    /// Asserts the number of bridges between the islands at `a` and `b`.
    ///
    /// # Panics
    ///
    /// Panics if either position is not an island or the count differs.
    #[track_caller]
    pub fn assert_bridge(self, a: Position, b: Position, count: u8) -> Self {
        let (ia, ib) = (self.id(a), self.id(b));
        let actual = self
            .current
            .bridge_between(ia, ib)
            .map_or(0, |bridge| bridge.count());
        assert_eq!(actual, count, "bridges between {a} and {b}");
        self
    }

    /// Asserts the status of the current puzzle.
    ///
    /// # Panics
    ///
    /// Panics if the status differs.
    #[track_caller]
    pub fn assert_status(self, status: PuzzleStatus) -> Self {
        assert_eq!(self.current.status(), status, "\n{}", self.current);
        self
    }

    /// Asserts that nothing changed since the initial state.
    ///
    /// # Panics
    ///
    /// Panics if any bridge was built or removed.
    #[track_caller]
    pub fn assert_no_change(self) -> Self {
        assert_eq!(
            self.current, self.initial,
            "expected no change:\n{}\n---\n{}",
            self.initial, self.current
        );
        self
    }

    #[track_caller]
    fn id(&self, position: Position) -> IslandId {
        self.current
            .island_at(position)
            .unwrap_or_else(|| panic!("no island at {position}"))
    }
}
