use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use crate::board::{Player, Position};
use crate::error::{Error, Result};
use crate::search::eval::Outcome;
use crate::search::{select_move, Algorithm, Metrics, SearchResult};

pub const MIN_AI_DELAY_MS: u64 = 100;
pub const MAX_AI_DELAY_MS: u64 = 1500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    HumanVsHuman,
    #[default]
    HumanVsAi,
    AiVsAi,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self { Mode::HumanVsHuman => "Human vs Human", Mode::HumanVsAi => "Human vs AI", Mode::AiVsAi => "AI vs AI" };
        write!(f, "{s}")
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hh" | "human-vs-human" | "pvp" => Ok(Mode::HumanVsHuman),
            "ha" | "human-vs-ai" | "pve" => Ok(Mode::HumanVsAi),
            "aa" | "ai-vs-ai" | "eve" => Ok(Mode::AiVsAi),
            other => Err(Error::Parse(format!("mode '{other}'"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub mode: Mode,
    pub algo_x: Algorithm,
    pub algo_o: Algorithm,
    /// Side that opens every game.
    pub first: Player,
    /// Side the human controls in `HumanVsAi`.
    pub human: Player,
    pub use_cache: bool,
    pub ai_delay_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: Mode::HumanVsAi,
            algo_x: Algorithm::AlphaBeta,
            algo_o: Algorithm::AlphaBeta,
            first: Player::X,
            human: Player::X,
            use_cache: true,
            ai_delay_ms: 600,
        }
    }
}

impl SessionConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    pub fn algorithm_for(&self, p: Player) -> Algorithm {
        match p { Player::X => self.algo_x, Player::O => self.algo_o }
    }
}

/// Headless game controller: turn order, undo/redo and per-side engine metrics.
#[derive(Clone, Debug)]
pub struct Session {
    cfg: SessionConfig,
    pos: Position,
    history: Vec<Position>,
    future: Vec<Position>,
    last_win_line: Option<[usize; 3]>,
    last_metrics: Option<Metrics>,
    perf_x: Vec<Metrics>,
    perf_o: Vec<Metrics>,
}

impl Session {
    pub fn new(cfg: SessionConfig) -> Self {
        let pos = Position::with_first(cfg.first);
        Self {
            cfg,
            pos,
            history: Vec::new(),
            future: Vec::new(),
            last_win_line: None,
            last_metrics: None,
            perf_x: Vec::new(),
            perf_o: Vec::new(),
        }
    }

    pub fn config(&self) -> &SessionConfig { &self.cfg }
    pub fn position(&self) -> &Position { &self.pos }
    pub fn turn(&self) -> Player { self.pos.side_to_move() }
    pub fn outcome(&self) -> Outcome { self.pos.outcome() }
    pub fn is_over(&self) -> bool { self.pos.is_over() }
    pub fn win_line(&self) -> Option<[usize; 3]> { self.last_win_line }
    pub fn last_metrics(&self) -> Option<&Metrics> { self.last_metrics.as_ref() }
    pub fn can_undo(&self) -> bool { !self.history.is_empty() }
    pub fn can_redo(&self) -> bool { !self.future.is_empty() }

    pub fn perf(&self, p: Player) -> &[Metrics] {
        match p { Player::X => &self.perf_x, Player::O => &self.perf_o }
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.cfg.ai_delay_ms.clamp(MIN_AI_DELAY_MS, MAX_AI_DELAY_MS))
    }

    pub fn reset(&mut self) {
        self.pos = Position::with_first(self.cfg.first);
        self.history.clear();
        self.future.clear();
        self.last_win_line = None;
        self.last_metrics = None;
        self.perf_x.clear();
        self.perf_o.clear();
        debug!("session reset: mode={} first={}", self.cfg.mode, self.cfg.first);
    }

    pub fn set_mode(&mut self, mode: Mode) { self.cfg.mode = mode; self.reset(); }
    pub fn set_first(&mut self, first: Player) { self.cfg.first = first; self.reset(); }
    pub fn set_human(&mut self, human: Player) { self.cfg.human = human; self.reset(); }
    pub fn set_use_cache(&mut self, on: bool) { self.cfg.use_cache = on; }
    pub fn set_ai_delay_ms(&mut self, ms: u64) { self.cfg.ai_delay_ms = ms.clamp(MIN_AI_DELAY_MS, MAX_AI_DELAY_MS); }

    pub fn set_algorithm(&mut self, p: Player, algo: Algorithm) {
        match p { Player::X => self.cfg.algo_x = algo, Player::O => self.cfg.algo_o = algo }
    }

    pub fn is_ai_turn(&self) -> bool {
        if self.is_over() { return false; }
        match self.cfg.mode {
            Mode::HumanVsHuman => false,
            Mode::HumanVsAi => self.turn() != self.cfg.human,
            Mode::AiVsAi => true,
        }
    }

    /// Human move at `idx`.
    pub fn play(&mut self, idx: usize) -> Result<()> {
        if self.is_over() { return Err(Error::GameOver); }
        if self.is_ai_turn() { return Err(Error::NotYourTurn); }
        self.apply(idx, None)
    }

    /// Runs the side-to-move's engine and plays its choice. Returns `None` once the game is over.
    pub fn ai_move(&mut self) -> Result<Option<SearchResult>> {
        if self.is_over() { return Ok(None); }
        if !self.is_ai_turn() { return Err(Error::NotYourTurn); }
        let turn = self.turn();
        let res = select_move(self.pos.board(), turn, self.cfg.algorithm_for(turn), self.cfg.use_cache);
        let Some(idx) = res.index else { return Ok(None) };
        self.apply(idx, Some(res.metrics.clone()))?;
        Ok(Some(res))
    }

    fn apply(&mut self, idx: usize, metrics: Option<Metrics>) -> Result<()> {
        let mover = self.turn();
        let prev = self.pos;
        self.pos.make_move(idx)?;
        self.history.push(prev);
        self.future.clear();
        self.last_win_line = match self.pos.outcome() {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        };
        if let Some(m) = metrics {
            match mover { Player::X => self.perf_x.push(m.clone()), Player::O => self.perf_o.push(m.clone()) }
            self.last_metrics = Some(m);
        }
        match self.pos.outcome() {
            Outcome::Win { player, line } => info!("{} wins on line {:?}", player, line),
            Outcome::Draw => info!("game drawn"),
            Outcome::None => {}
        }
        Ok(())
    }

    pub fn undo(&mut self) -> Result<()> {
        let prev = self.history.pop().ok_or(Error::NothingToUndo)?;
        self.future.push(self.pos);
        self.pos = prev;
        self.last_win_line = None;
        debug!("undo: {} to move, {} undo / {} redo left", self.turn(), self.history.len(), self.future.len());
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        let next = self.future.pop().ok_or(Error::NothingToRedo)?;
        self.history.push(self.pos);
        self.pos = next;
        self.last_win_line = match self.pos.outcome() {
            Outcome::Win { line, .. } => Some(line),
            _ => None,
        };
        debug!("redo: {} to move, {} undo / {} redo left", self.turn(), self.history.len(), self.future.len());
        Ok(())
    }
}

impl Default for Session {
    fn default() -> Self { Self::new(SessionConfig::default()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hh() -> Session { Session::new(SessionConfig { mode: Mode::HumanVsHuman, ..SessionConfig::default() }) }

    #[test]
    fn undo_redo_restores_snapshots() {
        let mut s = hh();
        s.play(4).unwrap();
        s.play(0).unwrap();
        let after_two = *s.position();
        s.undo().unwrap();
        assert_eq!(s.turn(), Player::O);
        assert_eq!(s.position().board().get(0), None);
        s.redo().unwrap();
        assert_eq!(*s.position(), after_two);
        assert!(matches!(s.redo(), Err(Error::NothingToRedo)));
    }

    #[test]
    fn new_move_clears_redo() {
        let mut s = hh();
        s.play(4).unwrap();
        s.undo().unwrap();
        assert!(s.can_redo());
        s.play(0).unwrap();
        assert!(!s.can_redo());
        assert!(matches!(Session::default().undo(), Err(Error::NothingToUndo)));
    }

    #[test]
    fn ai_turns_follow_mode() {
        let mut s = Session::default();
        assert!(!s.is_ai_turn());
        s.play(0).unwrap();
        assert!(s.is_ai_turn());
        assert!(matches!(s.play(1), Err(Error::NotYourTurn)));
        let r = s.ai_move().unwrap().expect("ai should move");
        assert!(r.index.is_some());
        assert_eq!(s.perf(Player::O).len(), 1);
        assert!(s.perf(Player::X).is_empty());
        assert!(!s.is_ai_turn());
    }

    #[test]
    fn ai_refuses_to_move_for_a_human() {
        let mut s = Session::default();
        assert!(matches!(s.ai_move(), Err(Error::NotYourTurn)));
        assert!(s.perf(Player::X).is_empty());
        assert_eq!(s.position().board().empties().count(), 9);
        let mut h = hh();
        assert!(matches!(h.ai_move(), Err(Error::NotYourTurn)));
        h.play(4).unwrap();
        assert!(matches!(h.ai_move(), Err(Error::NotYourTurn)));
        assert!(h.last_metrics().is_none());
    }

    #[test]
    fn set_first_resets_with_new_opener() {
        let mut s = hh();
        s.play(4).unwrap();
        s.play(0).unwrap();
        s.undo().unwrap();
        s.set_first(Player::O);
        assert_eq!(s.turn(), Player::O);
        assert_eq!(s.position().board().empties().count(), 9);
        assert!(!s.can_undo());
        assert!(!s.can_redo());
    }

    #[test]
    fn set_human_resets() {
        let mut s = Session::default();
        s.play(0).unwrap();
        s.ai_move().unwrap();
        s.set_human(Player::O);
        assert_eq!(s.position().board().empties().count(), 9);
        assert!(s.perf(Player::O).is_empty());
        // X now belongs to the engine and opens.
        assert!(s.is_ai_turn());
    }

    #[test]
    fn set_algorithm_switches_engine() {
        let mut s = Session::default();
        s.set_algorithm(Player::O, Algorithm::Minimax);
        s.play(0).unwrap();
        let r = s.ai_move().unwrap().unwrap();
        assert_eq!(r.metrics.algo, Algorithm::Minimax);
        assert_eq!(r.metrics.pruned, 0);
        assert_eq!(s.config().algo_o, Algorithm::Minimax);
    }

    #[test]
    fn set_use_cache_is_honoured() {
        use crate::search::select_move_alphabeta;
        for on in [false, true] {
            let mut s = Session::default();
            s.set_use_cache(on);
            s.play(0).unwrap();
            let before = *s.position().board();
            let r = s.ai_move().unwrap().unwrap();
            let direct = select_move_alphabeta(&before, Player::O, on);
            assert_eq!(r.metrics.nodes, direct.metrics.nodes, "cache={on}");
            assert_eq!(r.index, direct.index);
        }
        let off = select_move_alphabeta(&"X--------".parse().unwrap(), Player::O, false);
        let on = select_move_alphabeta(&"X--------".parse().unwrap(), Player::O, true);
        assert_ne!(off.metrics.nodes, on.metrics.nodes);
    }

    #[test]
    fn changing_mode_resets() {
        let mut s = hh();
        s.play(4).unwrap();
        s.set_mode(Mode::AiVsAi);
        assert!(!s.can_undo());
        assert_eq!(s.position().board().empties().count(), 9);
        assert!(s.is_ai_turn());
    }

    #[test]
    fn win_line_tracked_and_game_locks() {
        let mut s = hh();
        for m in [0, 3, 1, 4, 2] { s.play(m).unwrap(); }
        assert_eq!(s.win_line(), Some([0, 1, 2]));
        assert!(matches!(s.play(8), Err(Error::GameOver)));
        s.undo().unwrap();
        assert_eq!(s.win_line(), None);
    }

    #[test]
    fn delay_is_clamped() {
        let mut s = Session::default();
        s.set_ai_delay_ms(5);
        assert_eq!(s.ai_delay(), Duration::from_millis(MIN_AI_DELAY_MS));
        s.set_ai_delay_ms(60_000);
        assert_eq!(s.ai_delay(), Duration::from_millis(MAX_AI_DELAY_MS));
    }
}
