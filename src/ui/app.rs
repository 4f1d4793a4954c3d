use crate::ai::{Agent, CpuAgent};
use crate::config::AppConfig;
use crate::error::{GameError, MoveError};
use crate::game::{column_id, column_key, Game, COLUMNS};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};
use tracing::warn;

const MIDDLE_COLUMN: usize = 4;

/// Interactive session: owns the game and drives CPU seats between key
/// presses.
pub struct App {
    game: Game,
    agents: [Option<CpuAgent>; 2],
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
    cpu_delay: Duration,
    turn_started: Instant,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self, GameError> {
        let (first, second) = (config.first.to_player(), config.second.to_player());
        let mut game = match config.game.seed {
            Some(seed) => Game::with_seed(first, second, seed),
            None => Game::new(first, second),
        };
        game.start()?;

        let agents = [0, 1].map(|seat| {
            game.players()[seat].strategy().map(|strategy| match config.game.seed {
                Some(seed) => CpuAgent::with_seed(strategy, seed.wrapping_add(seat as u64 + 1)),
                None => CpuAgent::new(strategy),
            })
        });

        Ok(App {
            game,
            agents,
            selected_column: MIDDLE_COLUMN,
            should_quit: false,
            message: None,
            cpu_delay: Duration::from_millis(config.game.cpu_delay_ms),
            turn_started: Instant::now(),
        })
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.cpu_due() {
                self.play_cpu_turn();
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn cpu_due(&self) -> bool {
        !self.game.is_over()
            && self.agents[self.game.current_seat()].is_some()
            && self.turn_started.elapsed() >= self.cpu_delay
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Left => {
                if self.selected_column > 1 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column < COLUMNS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if let Some(column) = column_key(self.selected_column) {
                    self.human_drop(column);
                }
            }
            KeyCode::Char(c) => {
                if let Some(id) = column_id(c) {
                    self.selected_column = id;
                    self.human_drop(c);
                }
            }
            _ => {}
        }
    }

    fn restart(&mut self) {
        match self.game.restart() {
            Ok(()) => {
                self.selected_column = MIDDLE_COLUMN;
                self.message = Some(format!("New game, {} starts", self.game.start_player().name()));
                self.turn_started = Instant::now();
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn human_drop(&mut self, key: char) {
        if self.agents[self.game.current_seat()].is_some() && !self.game.is_over() {
            self.message = Some("Wait for the computer to move".to_string());
            return;
        }
        self.drop_into(key);
    }

    fn play_cpu_turn(&mut self) {
        let seat = self.game.current_seat();
        let Some(agent) = self.agents[seat].as_mut() else {
            return;
        };
        match agent.select_column(&self.game) {
            Ok(Some(key)) => {
                if let Some(id) = column_id(key) {
                    self.selected_column = id;
                }
                self.drop_into(key);
            }
            Ok(None) => self.message = Some("No column left to play".to_string()),
            Err(err) => {
                warn!(%err, "cpu move failed");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Drop into `key` for the current player and describe the outcome.
    fn drop_into(&mut self, key: char) {
        if self.game.is_over() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        let player = self.game.current_player().name().to_string();
        self.message = match self.game.insert(key) {
            Ok(result) => {
                self.turn_started = Instant::now();
                if result.triggered_win.is_some() {
                    Some(format!("{player} wins! Press 'r' to play again."))
                } else if self.game.is_over() {
                    Some("It's a draw!".to_string())
                } else {
                    Some(format!("{player} dropped into {}", result.slot.key()))
                }
            }
            Err(GameError::Move(MoveError::ColumnFull(column))) => {
                Some(format!("Column {column} is full!"))
            }
            Err(err) => Some(err.to_string()),
        };
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(frame, &self.game, self.selected_column, self.message());
    }
}
