//! Property and stress tests for puzzle generation.

use bridges_generator::{GeneratorConfig, PuzzleGenerator, PuzzleSeed, island_count_bounds};
use bridges_solver::BacktrackSolver;
use proptest::prelude::*;
use rayon::prelude::*;

fn island_count_strategy(columns: u8, rows: u8) -> impl Strategy<Value = Option<usize>> {
    let bounds = island_count_bounds(columns, rows);
    prop_oneof![
        Just(None),
        Just(Some(*bounds.start())),
        Just(Some(*bounds.end())),
        bounds.prop_map(Some),
    ]
}

fn config_strategy() -> impl Strategy<Value = GeneratorConfig> {
    (4u8..=25, 4u8..=25)
        .prop_flat_map(|(columns, rows)| {
            (
                Just(columns),
                Just(rows),
                island_count_strategy(columns, rows),
                0.0..=1.0f64,
                0.0..=0.5f64,
            )
        })
        .prop_map(|(columns, rows, island_count, double, extra)| {
            let config = GeneratorConfig::new(columns, rows)
                .with_double_probability(double)
                .with_extra_bridge_probability(extra);
            match island_count {
                Some(count) => config.with_island_count(count),
                None => config,
            }
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn generated_puzzles_satisfy_config(config in config_strategy(), bytes in any::<[u8; 32]>()) {
        let solver = BacktrackSolver::with_all_techniques();
        let generator = PuzzleGenerator::new(&solver);
        let seed = PuzzleSeed::new(bytes);

        let puzzle = generator.generate_with_seed(&config, seed).unwrap();
        let problem = &puzzle.problem;
        prop_assert_eq!(problem.columns(), config.columns());
        prop_assert_eq!(problem.rows(), config.rows());
        prop_assert!(island_count_bounds(config.columns(), config.rows())
            .contains(&problem.island_count()));
        if let Some(count) = config.island_count() {
            prop_assert_eq!(problem.island_count(), count);
        }
        prop_assert!(problem.has_no_bridges());
        prop_assert!(problem.status().is_unsolved());
        prop_assert!(puzzle.solution.status().is_solved());
        prop_assert_eq!(&puzzle.solution.to_unsolved(), problem);

        let mut resolved = problem.clone();
        let outcome = solver.solve(&mut resolved).unwrap();
        prop_assert!(outcome.status().is_solved());
    }
}

#[test]
fn parallel_generation_and_solving() {
    let solver = BacktrackSolver::with_all_techniques();
    let generator = PuzzleGenerator::new(&solver);
    let config = GeneratorConfig::new(10, 10);

    let solved = (0..64u8)
        .into_par_iter()
        .map(|i| {
            let puzzle = generator
                .generate_with_seed(&config, PuzzleSeed::new([i; 32]))
                .unwrap();
            let mut work = puzzle.problem.clone();
            solver.solve(&mut work).unwrap().status().is_solved()
        })
        .filter(|&solved| solved)
        .count();
    assert_eq!(solved, 64);
}

#[test]
fn generation_reaches_largest_island_count() {
    let solver = BacktrackSolver::with_all_techniques();
    let generator = PuzzleGenerator::new(&solver);
    let cases = [(25, 25), (4, 25), (25, 4), (6, 25), (15, 15)]
        .into_iter()
        .flat_map(|size| (0..3u8).map(move |i| (size, i)))
        .collect::<Vec<_>>();

    cases.into_par_iter().for_each(|((columns, rows), i)| {
        let count = *island_count_bounds(columns, rows).end();
        let config = GeneratorConfig::new(columns, rows).with_island_count(count);
        let puzzle = generator
            .generate_with_seed(&config, PuzzleSeed::new([i; 32]))
            .unwrap_or_else(|err| panic!("{columns}x{rows} with {count} islands: {err}"));
        assert_eq!(puzzle.problem.island_count(), count);
        assert!(puzzle.solution.status().is_solved());
    });
}

#[test]
fn parallel_generation_is_deterministic() {
    let solver = BacktrackSolver::with_all_techniques();
    let generator = PuzzleGenerator::new(&solver);
    let config = GeneratorConfig::new(8, 8);
    let seeds = (0..16u8).map(|i| PuzzleSeed::new([i; 32])).collect::<Vec<_>>();

    let sequential = seeds
        .iter()
        .map(|&seed| generator.generate_with_seed(&config, seed).unwrap().problem)
        .collect::<Vec<_>>();
    let parallel = seeds
        .par_iter()
        .map(|&seed| generator.generate_with_seed(&config, seed).unwrap().problem)
        .collect::<Vec<_>>();
    assert_eq!(sequential, parallel);
}
