use chrono::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - Playing -> Won
/// - Playing -> Lost
///
/// Both end states hold until the board is restarted or resized.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Playing,
    Won,
    Lost,
}

impl Phase {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for Phase {
    fn default() -> Self {
        Self::Playing
    }
}

/// Per-game bookkeeping owned by the [`Board`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameContext {
    config: GameConfig,
    difficulty: Option<Difficulty>,
    phase: Phase,
    started_at: Option<DateTime<Utc>>,
    ended_at: Option<DateTime<Utc>>,
    triggered_mine: Option<CellIndex>,
}

impl GameContext {
    fn new(config: GameConfig, difficulty: Option<Difficulty>) -> Self {
        Self {
            config,
            difficulty,
            phase: Phase::Playing,
            started_at: None,
            ended_at: None,
            triggered_mine: None,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// Level the game was started from, `None` for custom boards.
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Seconds played as seen at `now`, frozen once the game ended and 0
    /// before the first reveal.
    pub fn elapsed_secs_at(&self, now: DateTime<Utc>) -> u32 {
        if let Some(started_at) = self.started_at {
            (self.ended_at.unwrap_or(now) - started_at)
                .num_seconds()
                .max(0) as u32
        } else {
            0
        }
    }
}

/// Owns the current game and the generator that lays out its mines on the
/// first reveal.
#[derive(Clone, Debug)]
pub struct Board<G = RandomLayoutGenerator> {
    context: GameContext,
    grid: Grid,
    generator: G,
}

impl Board {
    /// A board seeded from the wall clock.
    pub fn new(difficulty: Difficulty) -> Self {
        let seed = Utc::now().timestamp_nanos_opt().unwrap_or_default() as u64;
        Self::with_seed(difficulty, seed)
    }

    /// A board whose sequence of games is reproducible from `seed`.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self::with_generator(difficulty, RandomLayoutGenerator::new(seed))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

impl<G: MineLayoutGenerator> Board<G> {
    pub fn with_generator(difficulty: Difficulty, generator: G) -> Self {
        Self::start(difficulty.config(), Some(difficulty), generator)
    }

    /// A board sized outside the difficulty table.
    pub fn with_config(config: GameConfig, generator: G) -> Self {
        Self::start(config, None, generator)
    }

    fn start(config: GameConfig, difficulty: Option<Difficulty>, generator: G) -> Self {
        Self {
            context: GameContext::new(config, difficulty),
            grid: Grid::new(config),
            generator,
        }
    }

    /// Throws away the current game and starts a blank one for `difficulty`.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.reset(difficulty.config(), Some(difficulty));
    }

    /// Starts over with the same level, or the same size for custom boards.
    pub fn restart(&mut self) {
        self.reset(self.context.config, self.context.difficulty);
    }

    fn reset(&mut self, config: GameConfig, difficulty: Option<Difficulty>) {
        log::debug!(
            "New {}x{} game with {} mines",
            config.rows(),
            config.cols(),
            config.mines
        );
        self.context = GameContext::new(config, difficulty);
        self.grid = Grid::new(config);
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn phase(&self) -> Phase {
        self.context.phase
    }

    pub fn is_finished(&self) -> bool {
        self.context.phase.is_finished()
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.context.difficulty
    }

    pub fn config(&self) -> GameConfig {
        self.context.config
    }

    pub fn size(&self) -> Coord2 {
        self.grid.size()
    }

    pub fn cell(&self, index: CellIndex) -> &Cell {
        self.grid.cell(index)
    }

    /// Checks an index coming from the host before it is used in a command.
    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        self.grid.validate_index(index)
    }

    /// Mines on the board, which may be fewer than the config asked for.
    pub fn total_mines(&self) -> CellCount {
        if self.grid.is_generated() {
            self.grid.mine_count()
        } else {
            self.generator.planned_mines(self.context.config)
        }
    }

    pub fn flagged_count(&self) -> CellCount {
        self.grid.flagged_count()
    }

    /// How many mines have not been flagged yet, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        (self.total_mines() as isize) - (self.flagged_count() as isize)
    }

    /// The mine whose reveal lost the game.
    pub fn triggered_mine(&self) -> Option<CellIndex> {
        self.context.triggered_mine
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.context.elapsed_secs_at(Utc::now())
    }

    pub fn elapsed_secs_at(&self, now: DateTime<Utc>) -> u32 {
        self.context.elapsed_secs_at(now)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot_at(Utc::now())
    }

    pub fn snapshot_at(&self, now: DateTime<Utc>) -> Snapshot {
        Snapshot::from_board(self, now)
    }

    pub fn toggle_flag(&mut self, index: CellIndex) -> FlagOutcome {
        if self.context.phase != Phase::Playing {
            return FlagOutcome::NoChange;
        }
        self.grid.toggle_flag(index)
    }

    /// Whether a reveal at `index` would be accepted rather than ignored.
    pub fn can_reveal(&self, index: CellIndex) -> bool {
        self.context.phase == Phase::Playing && self.grid[index].is_revealable()
    }

    pub fn reveal(&mut self, index: CellIndex) -> RevealOutcome {
        self.reveal_at(index, Utc::now())
    }

    /// Reveals a cell with `now` as the current time for the game clock.
    pub fn reveal_at(&mut self, index: CellIndex, now: DateTime<Utc>) -> RevealOutcome {
        if !self.can_reveal(index) {
            return RevealOutcome::Continue;
        }

        self.mark_started(now);
        let outcome = self.grid.reveal(index, &mut self.generator);
        match outcome {
            RevealOutcome::GameOver => {
                self.context.triggered_mine = Some(index);
                self.end_game(Phase::Lost, now);
                self.grid.sweep_after_loss(index);
            }
            RevealOutcome::Win => self.end_game(Phase::Won, now),
            RevealOutcome::Continue => {}
        }
        outcome
    }

    fn mark_started(&mut self, now: DateTime<Utc>) {
        if self.context.started_at.is_none() {
            log::debug!("started at {}", now);
            self.context.started_at = Some(now);
        }
    }

    fn end_game(&mut self, phase: Phase, now: DateTime<Utc>) {
        if self.context.phase.is_finished() {
            return;
        }
        self.context.phase = phase;
        self.context.ended_at = Some(now);
        log::debug!("{:?} at {}", phase, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(size: Coord2, mines: &[CellIndex]) -> Board<FixedLayoutGenerator> {
        let generator = FixedLayoutGenerator::new(size, mines.iter().copied()).unwrap();
        Board::with_config(generator.game_config(), generator)
    }

    // 1x5 strip used below: . 1 * 1 .
    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn new_board_is_blank_and_playing() {
        let board = Board::with_seed(Difficulty::Beginner, 1);
        assert_eq!(board.phase(), Phase::Playing);
        assert_eq!(board.size(), (9, 9));
        assert_eq!(board.mines_left(), 10);
        assert!(!board.grid().is_generated());
        assert_eq!(board.elapsed_secs(), 0);
    }

    #[test]
    fn flag_then_reveal_is_a_no_op() {
        let mut board = Board::with_seed(Difficulty::Beginner, 1);
        assert_eq!(board.toggle_flag(5), FlagOutcome::Changed);

        assert!(!board.can_reveal(5));
        assert_eq!(board.reveal(5), RevealOutcome::Continue);
        assert_eq!(board.phase(), Phase::Playing);
        assert!(board.cell(5).flagged);
        assert!(!board.cell(5).revealed);
        assert!(!board.grid().is_generated());
        assert_eq!(board.mines_left(), 9);
    }

    #[test]
    fn revealing_a_mine_loses() {
        let mut board = scripted((3, 3), &[4]);
        assert_eq!(board.reveal(4), RevealOutcome::GameOver);
        assert_eq!(board.phase(), Phase::Lost);
        assert!(board.cell(4).revealed);
        assert_eq!(board.cell(4).end_mark, Some(EndMark::TriggeredMine));
    }

    #[test]
    fn clock_starts_on_first_reveal_and_freezes_on_loss() {
        let mut board = scripted((1, 5), &[2]);
        assert_eq!(board.elapsed_secs_at(at(50)), 0);

        assert_eq!(board.reveal_at(0, at(100)), RevealOutcome::Continue);
        assert_eq!(board.elapsed_secs_at(at(107)), 7);

        assert_eq!(board.reveal_at(2, at(112)), RevealOutcome::GameOver);
        assert_eq!(board.phase(), Phase::Lost);
        assert!(board.cell(2).revealed);
        assert_eq!(board.triggered_mine(), Some(2));
        assert_eq!(board.elapsed_secs_at(at(500)), 12);
    }

    #[test]
    fn finished_game_rejects_commands() {
        let mut board = scripted((1, 5), &[2]);
        board.reveal(2);
        assert_eq!(board.phase(), Phase::Lost);

        let before = board.grid().clone();
        assert!(!board.can_reveal(0));
        assert_eq!(board.reveal(0), RevealOutcome::Continue);
        assert_eq!(board.toggle_flag(1), FlagOutcome::NoChange);
        assert_eq!(board.grid(), &before);
    }

    #[test]
    fn win_freezes_clock() {
        let mut board = scripted((1, 5), &[2]);
        board.reveal_at(0, at(10));
        assert_eq!(board.reveal_at(4, at(15)), RevealOutcome::Win);
        assert_eq!(board.phase(), Phase::Won);
        assert_eq!(board.elapsed_secs_at(at(99)), 5);
        assert_eq!(board.triggered_mine(), None);
    }

    #[test]
    fn restart_keeps_level_and_clears_game() {
        let mut board = Board::with_seed(Difficulty::Intermediate, 3);
        board.reveal(0);
        board.restart();

        assert_eq!(board.difficulty(), Some(Difficulty::Intermediate));
        assert_eq!(board.size(), (16, 16));
        assert!(!board.grid().is_generated());
        assert_eq!(board.grid().revealed_count(), 0);
        assert_eq!(board.context().started_at(), None);
    }

    #[test]
    fn set_difficulty_resizes() {
        let mut board = Board::with_seed(Difficulty::Beginner, 3);
        board.toggle_flag(0);
        board.set_difficulty(Difficulty::Expert);

        assert_eq!(board.size(), (30, 30));
        assert_eq!(board.total_mines(), 199);
        assert_eq!(board.flagged_count(), 0);
        assert_eq!(board.phase(), Phase::Playing);
    }

    #[test]
    fn restart_custom_board_keeps_config() {
        let mut board = scripted((1, 5), &[2]);
        board.reveal(2);
        board.restart();

        assert_eq!(board.difficulty(), None);
        assert_eq!(board.config(), GameConfig::new_unchecked((1, 5), 1));
        assert_eq!(board.phase(), Phase::Playing);
    }

    #[test]
    fn mines_left_goes_negative_when_over_flagged() {
        let mut board = scripted((1, 5), &[2]);
        board.toggle_flag(0);
        board.toggle_flag(1);
        assert_eq!(board.mines_left(), -1);
    }

    #[test]
    fn overfull_custom_board_counts_placed_mines() {
        let config = GameConfig::new_unchecked((4, 4), 16);
        let mut board = Board::with_config(config, RandomLayoutGenerator::new(9));
        assert_eq!(board.total_mines(), 7);
        assert_eq!(board.mines_left(), 7);

        board.reveal_at(0, at(0));
        assert_eq!(board.grid().mine_count(), 7);
        assert_eq!(board.total_mines(), 7);
        assert_eq!(board.mines_left(), 7);
        assert_eq!(board.snapshot_at(at(1)).mines_left, 7);
        assert_eq!(board.config(), config);
    }

    #[test]
    #[should_panic]
    fn out_of_range_reveal_panics() {
        let mut board = Board::with_seed(Difficulty::Beginner, 1);
        board.reveal(81);
    }
}
