use tictacbot::search::eval::{check_outcome, score, Outcome};
use tictacbot::search::metrics::round_to;
use tictacbot::{select_move, Algorithm, Board, Player};

fn board(s: &str) -> Board { s.parse().expect("valid board") }

#[test]
fn outcome_fixtures() {
    assert_eq!(check_outcome(&Board::empty()), Outcome::None);
    assert_eq!(check_outcome(&board("XXX------")), Outcome::Win { player: Player::X, line: [0, 1, 2] });
    assert_eq!(check_outcome(&board("XOXXOOOXX")), Outcome::Draw);
    assert_eq!(score(&Outcome::None, Player::X), None);
    assert_eq!(score(&Outcome::Draw, Player::O), Some(0));
}

#[test]
fn both_engines_complete_the_diagonal() {
    // X wins at 6 (anti-diagonal) or 8 (main diagonal); lowest index first.
    let b = board("XOXOXO---");
    for (algo, cache) in [(Algorithm::Minimax, false), (Algorithm::AlphaBeta, false), (Algorithm::AlphaBeta, true)] {
        let r = select_move(&b, Player::X, algo, cache);
        assert_eq!(r.index, Some(6), "{algo} cache={cache}");
        assert_eq!(r.score, 10, "{algo} cache={cache}");
    }
}

#[test]
fn minimax_walks_whole_game_tree() {
    let r = select_move(&Board::empty(), Player::X, Algorithm::Minimax, false);
    assert_eq!(r.metrics.nodes, 549_946);
    assert_eq!(r.score, 0);
    assert_eq!(r.index, Some(0));
    assert_eq!(r.metrics.pruned, 0);
}

#[test]
fn alphabeta_empty_board_is_a_draw_with_pruning() {
    for cache in [false, true] {
        let r = select_move(&Board::empty(), Player::X, Algorithm::AlphaBeta, cache);
        assert_eq!(r.score, 0);
        assert_eq!(r.index, Some(0));
        assert!(r.metrics.pruned > 0);
        assert!(r.metrics.nodes < 549_946);
    }
}

#[test]
fn pruned_pct_matches_formula() {
    for b in ["---------", "X---O----", "XO--X----", "X-O-O-X--"] {
        let r = select_move(&board(b), Player::X, Algorithm::AlphaBeta, false);
        let m = &r.metrics;
        assert!(m.nodes > 0);
        assert_eq!(m.pruned_pct, round_to(m.pruned as f64 / m.nodes as f64 * 100.0, 2));
    }
}

#[test]
fn terminal_or_full_board_returns_no_move() {
    let full = board("XOXXOOOXX");
    let won = board("OOOXX-X--");
    for algo in [Algorithm::Minimax, Algorithm::AlphaBeta] {
        let r = select_move(&full, Player::X, algo, true);
        assert_eq!((r.index, r.score), (None, 0));
        let r = select_move(&won, Player::X, algo, true);
        assert_eq!((r.index, r.score), (None, -10));
        assert_eq!(r.metrics.nodes, 1);
    }
}

#[test]
fn repeated_calls_are_identical() {
    let b = board("X---O---X");
    for (algo, cache) in [(Algorithm::Minimax, false), (Algorithm::AlphaBeta, false), (Algorithm::AlphaBeta, true)] {
        let a = select_move(&b, Player::O, algo, cache);
        let c = select_move(&b, Player::O, algo, cache);
        assert_eq!((a.index, a.score, a.metrics.nodes, a.metrics.pruned), (c.index, c.score, c.metrics.nodes, c.metrics.pruned));
    }
}

#[test]
fn search_leaves_caller_board_untouched() {
    let b = board("X---O----");
    let before = b;
    let _ = select_move(&b, Player::X, Algorithm::AlphaBeta, true);
    let _ = select_move(&b, Player::X, Algorithm::Minimax, false);
    assert_eq!(b, before);
}
