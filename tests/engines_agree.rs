use rayon::prelude::*;
use tictacbot::verify::{check_position, reachable_positions, Mismatch};
use tictacbot::Player;

#[test]
fn alphabeta_matches_minimax_everywhere() {
    let positions = reachable_positions(Player::X);
    assert_eq!(positions.len(), 4520);
    let failures: Vec<Mismatch> = positions.par_iter().filter_map(check_position).collect();
    assert!(failures.is_empty(), "{} mismatches, first: {}", failures.len(), failures[0]);
}
