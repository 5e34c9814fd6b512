use std::collections::HashSet;

use sparselife::cell::Cell;
use sparselife::sim::Simulation;

fn seeded(size: i32, cells: &[(i32, i32)]) -> Simulation {
    let mut sim = Simulation::with_seed(size, 0);
    sim.seed(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap();
    sim
}

fn live_set(sim: &Simulation) -> HashSet<Cell> {
    sim.board().live_cells().clone()
}

#[test]
fn empty_board_stays_empty() {
    let mut sim = Simulation::with_seed(10, 0);

    for _ in 0..10 {
        sim.step();
        assert_eq!(sim.board().population(), 0);
    }
}

#[test]
fn block_is_a_still_life() {
    let mut sim = seeded(5, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    let before = live_set(&sim);

    sim.step();

    assert_eq!(live_set(&sim), before);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut sim = seeded(5, &[(1, 2), (2, 2), (3, 2)]);
    let horizontal = live_set(&sim);

    sim.step();
    let vertical: HashSet<_> = [Cell::new(2, 1), Cell::new(2, 2), Cell::new(2, 3)]
        .into_iter()
        .collect();
    assert_eq!(live_set(&sim), vertical);

    sim.step();
    assert_eq!(live_set(&sim), horizontal);
}

#[test]
fn glider_translates_diagonally_every_four_steps() {
    let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
    let mut sim = seeded(10, &glider);

    for _ in 0..4 {
        sim.step();
    }

    let shifted: HashSet<_> = glider
        .iter()
        .map(|&(x, y)| Cell::new(x + 1, y + 1))
        .collect();
    assert_eq!(live_set(&sim), shifted);
}

#[test]
fn hard_boundary_starves_a_wall_blinker() {
    // A vertical blinker hugging x = 0 cannot rotate through the wall; it
    // collapses to a two-cell remnant and then dies out.
    let mut sim = seeded(5, &[(0, 1), (0, 2), (0, 3)]);

    sim.step();
    let remnant: HashSet<_> = [Cell::new(0, 2), Cell::new(1, 2)].into_iter().collect();
    assert_eq!(live_set(&sim), remnant);

    sim.step();
    assert_eq!(sim.board().population(), 0);
}

#[test]
fn out_of_bounds_seed_is_rejected() {
    let mut sim = Simulation::with_seed(5, 0);

    assert!(sim.seed([Cell::new(5, 5)]).is_err());
    assert!(sim.seed([Cell::new(-1, 0)]).is_err());
    assert_eq!(sim.board().population(), 0);
}

#[test]
fn seeded_runs_are_reproducible() {
    let run = || {
        let mut sim = Simulation::with_seed(25, 42);
        sim.randomize(0.4);

        for _ in 0..5 {
            sim.step();
        }

        live_set(&sim)
    };

    assert_eq!(run(), run());
}

#[test]
fn one_step_never_enlivens_beyond_the_frontier() {
    let mut sim = Simulation::with_seed(20, 3);
    sim.randomize(0.25);
    let before = live_set(&sim);

    sim.step();

    for cell in sim.board().live_cells() {
        let near = before
            .iter()
            .any(|p| (p.x - cell.x).abs() <= 1 && (p.y - cell.y).abs() <= 1);
        assert!(near, "{cell} is alive but had no live cell within distance 1");
    }
}
