use minefield_core::{
    self as game, Board, Coord2, GameClock, MarkOutcome, Outcome, RevealOutcome,
};

/// One game in progress plus the bookkeeping the terminal needs around it.
#[derive(Clone, Debug)]
pub(crate) struct GameSession {
    board: Board,
    clock: GameClock,
    next_seed: Option<u64>,
    move_count: u32,
}

impl GameSession {
    /// With a forced seed every game is reproducible, consecutive games use consecutive seeds.
    pub fn new(seed: Option<u64>) -> game::Result<Self> {
        let mut next_seed = seed;
        let board = fresh_board(&mut next_seed)?;
        let mut clock = GameClock::new();
        clock.start();
        Ok(Self {
            board,
            clock,
            next_seed,
            move_count: 0,
        })
    }

    /// Throws the current board away and deals a new one.
    pub fn restart(&mut self) -> game::Result<()> {
        self.board = fresh_board(&mut self.next_seed)?;
        self.move_count = 0;
        self.clock.start();
        log::debug!("new game started");
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.clock.elapsed_secs()
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        log::debug!("reveal cell: {:?}", coords);
        let outcome = self.board.reveal(coords);
        if outcome.has_update() {
            self.move_count += 1;
            log::trace!("board after move {}:\n{}", self.move_count, self.board);
        }
        if self.board.is_finished() && self.clock.stop() {
            log::info!(
                "game over: {:?} after {} moves in {}s",
                self.outcome(),
                self.move_count,
                self.clock.elapsed_secs()
            );
        }
        outcome
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> MarkOutcome {
        log::debug!("mark cell: {:?}", coords);
        self.board.toggle_flag(coords)
    }
}

fn fresh_board(next_seed: &mut Option<u64>) -> game::Result<Board> {
    let config = game::GameConfig::default();
    match next_seed {
        Some(seed) => {
            let board = game::new_game_with_seed(config.size(), config.mines(), *seed)?;
            *seed = seed.wrapping_add(1);
            Ok(board)
        }
        None => game::new_game(config.size(), config.mines()),
    }
}
