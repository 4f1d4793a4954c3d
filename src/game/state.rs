use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use super::board::{Board, ConnectFour};
use super::player::Player;
use super::slot::{DropColor, Slot};
use super::statistic::GameStatistic;
use super::status::GameStatus;
use crate::error::GameError;

/// What a single drop changed on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertResult {
    pub slot: Slot,
    /// Set when this drop completed four in a row.
    pub triggered_win: Option<ConnectFour>,
}

/// One game between two players on its own board.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    start: usize,
    started: bool,
    status: Option<GameStatus>,
    statistic: Option<GameStatistic>,
    rng: StdRng,
}

impl Game {
    /// Colors and the start player are drawn at random.
    pub fn new(first: Player, second: Player) -> Self {
        Self::with_rng(first, second, StdRng::from_os_rng())
    }

    /// Reproducible color and start player assignment.
    pub fn with_seed(first: Player, second: Player, seed: u64) -> Self {
        Self::with_rng(first, second, StdRng::seed_from_u64(seed))
    }

    fn with_rng(mut first: Player, mut second: Player, mut rng: StdRng) -> Self {
        let first_color = random_color(&mut rng);
        first.set_color(first_color);
        second.set_color(first_color.other());

        let mut game = Game {
            board: Board::new(),
            players: [first, second],
            start: 0,
            started: false,
            status: None,
            statistic: None,
            rng,
        };
        game.draw_start_player();
        game
    }

    fn draw_start_player(&mut self) {
        let color = random_color(&mut self.rng);
        self.start = self.index_of(color);
    }

    fn index_of(&self, color: DropColor) -> usize {
        if self.players[0].color() == color {
            0
        } else {
            1
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn start_player(&self) -> &Player {
        &self.players[self.start]
    }

    pub fn other_player(&self) -> &Player {
        &self.players[1 - self.start]
    }

    pub fn player_by_color(&self, color: DropColor) -> Option<&Player> {
        self.players.iter().find(|p| p.color() == color)
    }

    /// Player whose turn it is, by parity of completed turns.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current_seat()]
    }

    /// Index into [`Game::players`] of the player whose turn it is.
    pub fn current_seat(&self) -> usize {
        let color = self
            .status
            .as_ref()
            .map_or(self.start_player().color(), GameStatus::current_color);
        self.index_of(color)
    }

    pub fn status(&self) -> Option<&GameStatus> {
        self.status.as_ref()
    }

    pub fn statistic(&self) -> Option<&GameStatistic> {
        self.statistic.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Decided by four in a row or a full board.
    pub fn is_over(&self) -> bool {
        self.status.as_ref().is_some_and(GameStatus::is_over)
    }

    pub fn winner(&self) -> Option<&Player> {
        self.status
            .as_ref()
            .and_then(GameStatus::winner_color)
            .and_then(|color| self.player_by_color(color))
    }

    /// Number of drops on the board; zero before the first status exists.
    pub fn drops_on_board(&self) -> usize {
        self.status.as_ref().map_or(0, GameStatus::total_drops)
    }

    pub fn start(&mut self) -> Result<(), GameError> {
        if self.started {
            return Err(GameError::IllegalState(
                "game can't be started, it was already started".into(),
            ));
        }
        self.statistic = Some(GameStatistic::start());
        self.refresh_status();
        self.started = true;
        info!(
            start = %self.start_player(),
            other = %self.other_player(),
            "game started"
        );
        Ok(())
    }

    pub fn stop(&mut self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::IllegalState(
                "game can't be stopped, it wasn't started".into(),
            ));
        }
        self.started = false;
        if let Some(statistic) = self.statistic.as_mut() {
            statistic.finish();
        }
        info!(drops = self.drops_on_board(), "game stopped");
        Ok(())
    }

    /// Clear the board, reset drop budgets, draw a new start player and
    /// start again.
    pub fn restart(&mut self) -> Result<(), GameError> {
        if !self.started {
            return Err(GameError::IllegalState(
                "game can't be restarted, it wasn't started".into(),
            ));
        }
        self.status = None;
        self.statistic = None;
        self.started = false;
        self.board.reset();
        for player in &mut self.players {
            player.reset_drops();
        }
        self.draw_start_player();
        self.start()
    }

    /// Drop a token of the current player into `column_key`.
    pub fn insert(&mut self, column_key: char) -> Result<InsertResult, GameError> {
        if !self.started {
            return Err(GameError::IllegalState(
                "game is not started, no drops can be set".into(),
            ));
        }
        if self.is_over() {
            return Err(GameError::IllegalState("game is already decided".into()));
        }

        let index = self.current_seat();
        if self.players[index].drops_left() == 0 {
            return Err(GameError::IllegalState(format!(
                "{} has no drops remaining",
                self.players[index].name()
            )));
        }

        let color = self.players[index].color();
        let slot = self.board.insert(column_key, color)?;
        self.players[index].decrement_drops()?;

        let status = self.refresh_status();
        let triggered_win = status.connect_four().cloned();
        if let Some(win) = &triggered_win {
            if let Some(statistic) = self.statistic.as_mut() {
                statistic.finish();
            }
            info!(winner = %color, line = %win.line_key, "connect four");
        }
        debug!(slot = %slot.position(), %color, "drop inserted");

        Ok(InsertResult {
            slot,
            triggered_win,
        })
    }

    fn refresh_status(&mut self) -> &GameStatus {
        let status = GameStatus::evaluate(&self.board, self.start_player().color());
        if status.is_draw() {
            if let Some(statistic) = self.statistic.as_mut() {
                statistic.finish();
            }
        }
        self.status.insert(status)
    }
}

fn random_color<R: Rng + ?Sized>(rng: &mut R) -> DropColor {
    if rng.random_bool(0.5) {
        DropColor::Red
    } else {
        DropColor::Yellow
    }
}
