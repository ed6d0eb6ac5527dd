mod common;

use common::grid;
use lifegrid::rules::{advance, advance_n, next_state};
use lifegrid::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rule_table_is_b3_s23() {
    for neighbors in 0..=8u8 {
        assert_eq!(next_state(true, neighbors), neighbors == 2 || neighbors == 3, "alive with {}", neighbors);
        assert_eq!(next_state(false, neighbors), neighbors == 3, "dead with {}", neighbors);
    }
}

#[test]
fn isolated_cell_dies() {
    let g = grid(
        "
        ...
        .#.
        ...
        ",
    );
    assert_eq!(advance(&g).live_count(), 0);
}

#[test]
fn block_is_stable() {
    let block = grid(
        "
        ....
        .##.
        .##.
        ....
        ",
    );
    assert_eq!(advance(&block), block);
    assert_eq!(advance_n(&block, 10), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = grid(
        "
        .....
        .....
        .###.
        .....
        .....
        ",
    );
    let vertical = grid(
        "
        .....
        ..#..
        ..#..
        ..#..
        .....
        ",
    );

    assert_eq!(advance(&horizontal), vertical);
    assert_eq!(advance(&vertical), horizontal);
    assert_eq!(advance_n(&horizontal, 2), horizontal);
}

#[test]
fn blinker_on_the_edge_does_not_wrap() {
    // Against the top edge the vertical phase loses its top cell
    let g = grid(
        "
        ###
        ...
        ...
        ",
    );
    let expected = grid(
        "
        .#.
        .#.
        ...
        ",
    );
    assert_eq!(advance(&g), expected);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let glider = grid(
        "
        .#....
        ..#...
        ###...
        ......
        ......
        ......
        ",
    );
    let first = grid(
        "
        ......
        #.#...
        .##...
        .#....
        ......
        ......
        ",
    );
    let shifted = grid(
        "
        ......
        ..#...
        ...#..
        .###..
        ......
        ......
        ",
    );

    assert_eq!(advance(&glider), first);
    assert_eq!(advance_n(&glider, 4), shifted);
}

#[test]
fn next_generation_uses_only_the_frozen_input() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..5 {
        let input = Grid::random(24, 31, 0.35, &mut rng);
        let snapshot = input.clone();
        let output = advance(&input);

        assert_eq!(input, snapshot, "input must not be modified");
        for row in 0..input.rows {
            for col in 0..input.cols {
                let neighbors = snapshot.count_live_neighbors(row, col).unwrap();
                assert_eq!(
                    output.is_alive(row, col),
                    next_state(snapshot.is_alive(row, col), neighbors),
                    "cell ({}, {})",
                    row,
                    col
                );
            }
        }
    }
}

#[test]
fn advance_keeps_dimensions() {
    let g = Grid::new(7, 13);
    let next = advance(&g);
    assert_eq!((next.rows, next.cols), (7, 13));
    assert_eq!(next.live_count(), 0);
}
