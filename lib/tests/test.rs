use conlife_lib::{
    nbhd, AnyGrid, Automaton, Boundary, Cell, Config, DenseGrid, Dimension, Grid, Life,
    Representation, SparseGrid, Strategy, Torus,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::BTreeSet, error::Error};

const STRATEGIES: [Strategy; 3] = [Strategy::Scan, Strategy::Sparse, Strategy::ParallelScan];

const GLIDER: [(i32, i32); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

const GOSPER_GLIDER_GUN: [(i32, i32); 36] = [
    (1, 8), (1, 9), (2, 8), (2, 9), (11, 8), (11, 9), (11, 10), (12, 7), (12, 11),
    (13, 6), (13, 12), (14, 6), (14, 12), (15, 9), (16, 7), (16, 11), (17, 8), (17, 9),
    (17, 10), (18, 9), (21, 6), (21, 7), (21, 8), (22, 6), (22, 7), (22, 8), (23, 5),
    (23, 9), (25, 4), (25, 5), (25, 9), (25, 10), (35, 6), (35, 7), (36, 6), (36, 7),
];

fn cells(list: &[(i32, i32)]) -> Vec<Cell> {
    list.iter().map(|&c| Cell::from(c)).collect()
}

fn set(list: &[(i32, i32)]) -> BTreeSet<Cell> {
    list.iter().map(|&c| Cell::from(c)).collect()
}

fn automata() -> impl Iterator<Item = Automaton> {
    STRATEGIES
        .iter()
        .map(|&strategy| Automaton::new(Life::default(), strategy))
}

#[test]
fn glider_translates() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(10, 10)?;
    let grid = SparseGrid::new(dim, Boundary::Bounded, cells(&GLIDER))?;
    let moved: BTreeSet<_> = GLIDER.iter().map(|&(x, y)| Cell::new(x + 1, y + 1)).collect();
    for automaton in automata() {
        let next = automaton.step_n(&grid, 4);
        assert_eq!(next.live_set(), &moved);
        let next = automaton.step_n(&next, 4);
        assert_eq!(next.population(), 5);
        assert!(next.is_alive(Cell::new(4, 4)));
    }
    Ok(())
}

#[test]
fn glider_wraps_around_torus() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(10, 10)?;
    for automaton in automata() {
        let grid = DenseGrid::new(dim, Boundary::Torus, cells(&GLIDER))?;
        // 4 generations per cell, 10 cells to get back.
        assert_eq!(automaton.step_n(&grid, 40), grid);
        assert_ne!(automaton.step_n(&grid, 20), grid);
    }
    Ok(())
}

#[test]
fn blinker_on_huge_torus() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(2_000_000_000, 5)?;
    let automaton = Automaton::new(Life::default(), Strategy::Sparse);
    for &x in &[1_000_000_000, 0] {
        let grid = SparseGrid::new(
            dim,
            Boundary::Torus,
            cells(&[(x - 1, 2), (x, 2), (x + 1, 2)]),
        )?;
        let next = automaton.step(&grid);
        assert_eq!(next.live_set(), &set(&[(x, 1), (x, 2), (x, 3)]));
        assert_eq!(automaton.step(&next), grid);
    }
    Ok(())
}

#[test]
fn full_block_bounded() -> Result<(), Box<dyn Error>> {
    // In a 3x3 universe there is no room for births.
    let dim = Dimension::new(3, 3)?;
    let full: Vec<_> = dim.iter().collect();
    for automaton in automata() {
        let grid = SparseGrid::new(dim, Boundary::Bounded, full.clone())?;
        let next = automaton.step(&grid);
        assert_eq!(next.live_set(), &set(&[(0, 0), (2, 0), (0, 2), (2, 2)]));
    }

    // In a larger universe only the corners survive,
    // and four cells are born next to the middle of each side.
    let dim = Dimension::new(5, 5)?;
    let block: Vec<_> = cells(&[
        (1, 1), (2, 1), (3, 1),
        (1, 2), (2, 2), (3, 2),
        (1, 3), (2, 3), (3, 3),
    ]);
    for automaton in automata() {
        let grid = DenseGrid::new(dim, Boundary::Bounded, block.clone())?;
        let next = automaton.step(&grid);
        let survivors: BTreeSet<_> = block.iter().copied().filter(|&c| next.is_alive(c)).collect();
        assert_eq!(survivors, set(&[(1, 1), (3, 1), (1, 3), (3, 3)]));
        assert_eq!(
            next.live_cells().collect::<BTreeSet<_>>(),
            set(&[(1, 1), (3, 1), (1, 3), (3, 3), (2, 0), (0, 2), (4, 2), (2, 4)])
        );
    }
    Ok(())
}

#[test]
fn block_is_still() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(6, 6)?;
    let block = cells(&[(2, 2), (3, 2), (2, 3), (3, 3)]);
    for &boundary in &[Boundary::Bounded, Boundary::Torus] {
        for automaton in automata() {
            let grid = SparseGrid::new(dim, boundary, block.clone())?;
            let mut next = grid.clone();
            for _ in 0..10 {
                next = automaton.step(&next);
                assert_eq!(next, grid);
            }
        }
    }
    Ok(())
}

#[test]
fn empty_stays_empty() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(7, 4)?;
    for automaton in automata() {
        let sparse = SparseGrid::empty(dim, Boundary::Torus)?;
        assert_eq!(automaton.step(&sparse).population(), 0);
        let dense = DenseGrid::empty(dim, Boundary::Bounded)?;
        assert_eq!(automaton.step(&dense).population(), 0);
    }
    Ok(())
}

#[test]
fn crowded_cell_is_not_born() -> Result<(), Box<dyn Error>> {
    // (2, 2) is dead and touches 4, then 5 living cells.
    let dim = Dimension::new(5, 5)?;
    for before in [
        cells(&[(1, 1), (3, 1), (1, 3), (3, 3)]),
        cells(&[(1, 1), (2, 1), (3, 1), (1, 3), (3, 3)]),
    ] {
        for automaton in automata() {
            let grid = SparseGrid::new(dim, Boundary::Bounded, before.clone())?;
            assert_eq!(grid.alive_neighbors(Cell::new(2, 2)) as usize, before.len());
            assert!(!automaton.step(&grid).is_alive(Cell::new(2, 2)));
        }
    }
    Ok(())
}

#[test]
fn torus_corner_has_eight_neighbors() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(8, 6)?;
    let positions = nbhd::distinct_positions(Cell::new(0, 0), dim, Torus);
    assert_eq!(positions.len(), 8);
    assert_eq!(
        positions,
        set(&[(7, 5), (0, 5), (1, 5), (7, 0), (1, 0), (7, 1), (0, 1), (1, 1)])
    );

    let grid = SparseGrid::new(dim, Boundary::Torus, vec![Cell::new(0, 0)])?;
    let neighbors = grid.neighbors(Cell::new(0, 0));
    assert!(neighbors.alive.is_empty());
    assert_eq!(neighbors.dead.len(), 8);
    for &n in positions.iter() {
        assert_eq!(grid.alive_neighbors(n), 1);
    }
    Ok(())
}

#[test]
fn bounded_corner_counts_no_outside() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(4, 4)?;
    let grid = DenseGrid::new(dim, Boundary::Bounded, dim.iter())?;
    assert_eq!(grid.alive_neighbors(Cell::new(0, 0)), 3);
    assert_eq!(grid.alive_neighbors(Cell::new(3, 1)), 5);
    assert_eq!(grid.alive_neighbors(Cell::new(1, 1)), 8);
    let grid = DenseGrid::new(dim, Boundary::Torus, dim.iter())?;
    assert_eq!(grid.alive_neighbors(Cell::new(0, 0)), 8);
    Ok(())
}

#[test]
fn gosper_glider_gun() -> Result<(), Box<dyn Error>> {
    let config = Config::new(50, 50).set_cells(cells(&GOSPER_GLIDER_GUN));
    let automaton = config.automaton()?;
    let gun = config.grid()?;
    assert_eq!(gun.population(), 36);
    let mut grid = gun.clone();
    for _ in 0..30 {
        grid = grid.step(&automaton);
    }
    assert_eq!(grid.population(), 41);
    assert!(gun.live_cells().all(|c| grid.is_alive(c)));
    let glider: BTreeSet<_> = grid.live_cells().filter(|&c| !gun.is_alive(c)).collect();
    assert_eq!(glider, set(&[(25, 14), (26, 14), (24, 15), (25, 15), (24, 13)]));
    for _ in 0..30 {
        grid = grid.step(&automaton);
    }
    assert_eq!(grid.population(), 46);
    Ok(())
}

#[test]
fn config_representations_agree() -> Result<(), Box<dyn Error>> {
    let config = Config::new(50, 50)
        .set_cells(cells(&GOSPER_GLIDER_GUN))
        .set_boundary(Boundary::Torus);
    let automaton = config.automaton()?;
    let mut sparse = config.clone().set_representation(Representation::Sparse).grid()?;
    let mut dense = config.set_representation(Representation::Dense).grid()?;
    for _ in 0..100 {
        sparse = sparse.step(&automaton);
        dense = dense.step(&automaton);
        assert!(matches!(sparse, AnyGrid::Sparse(_)));
        assert!(matches!(dense, AnyGrid::Dense(_)));
        assert_eq!(sparse.plaintext(), dense.plaintext());
    }
    Ok(())
}

#[test]
fn random_is_reproducible() -> Result<(), Box<dyn Error>> {
    let dim = Dimension::new(20, 10)?;
    let a = SparseGrid::random(dim, Boundary::Torus, 0.3, &mut StdRng::seed_from_u64(7))?;
    let b = DenseGrid::random(dim, Boundary::Torus, 0.3, &mut StdRng::seed_from_u64(7))?;
    assert!(a.same_cells(&b));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Dense and sparse grids agree on every cell, whatever the strategy.
    #[test]
    fn dense_agrees_with_sparse(
        seed: u64,
        width in 1..24i32,
        height in 1..24i32,
        density in 0.0..1.0f64,
        torus: bool,
    ) {
        let dim = Dimension::new(width, height).unwrap();
        let boundary = if torus { Boundary::Torus } else { Boundary::Bounded };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut dense = DenseGrid::random(dim, boundary, density, &mut rng).unwrap();
        let mut sparse = SparseGrid::new(dim, boundary, dense.live_cells()).unwrap();
        let scan = Automaton::new(Life::default(), Strategy::Scan);
        let incremental = Automaton::new(Life::default(), Strategy::Sparse);
        for _ in 0..20 {
            dense = scan.step(&dense);
            sparse = incremental.step(&sparse);
            for (cell, alive) in dense.cells() {
                prop_assert_eq!(sparse.is_alive(cell), alive);
            }
            prop_assert!(dense.same_cells(&sparse));
        }
    }

    /// Stepping never changes the input grid, and gives the same result twice.
    #[test]
    fn step_is_pure(seed: u64, torus: bool) {
        let dim = Dimension::new(16, 12).unwrap();
        let boundary = if torus { Boundary::Torus } else { Boundary::Bounded };
        let grid = SparseGrid::random(dim, boundary, 0.4, &mut StdRng::seed_from_u64(seed)).unwrap();
        let before = grid.clone();
        for automaton in automata() {
            let first = automaton.step(&grid);
            let second = automaton.step(&grid);
            prop_assert_eq!(&grid, &before);
            prop_assert_eq!(first, second);
        }
    }
}
