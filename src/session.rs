//! Interactive session: the menu, mark selection and the live game loop
//!
//! The session owns the only mutable game in the process. Engines only ever
//! see copies of its board.

pub mod turns;

pub use turns::{InputProblem, Seat, parse_position, play_match, prompt_human_move};

use crate::{
    Result,
    adapters::EngineAgent,
    app::SessionConfig,
    ports::Console,
    tictactoe::{Game, GameOutcome, Player},
};

const MODES: [&str; 4] = ["Player vs AI", "Player vs Player", "AI vs AI", "Exit"];
const MARKS: [&str; 2] = ["X (first move)", "O (second move)"];

/// Game modes offered by the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    PlayerVsAi,
    PlayerVsPlayer,
    AiVsAi,
}

/// A menu-driven series of games over one console
pub struct Session<C: Console> {
    console: C,
    config: SessionConfig,
}

impl<C: Console> Session<C> {
    pub fn new(console: C, config: SessionConfig) -> Self {
        Self { console, config }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Show the menu and play games until the user exits or input closes
    pub fn run(&mut self) -> Result<()> {
        self.console.show("Welcome to CLI Tic-Tac-Toe!");

        loop {
            let Some(choice) = self.console.choose("Enter choice", &MODES)? else {
                break;
            };
            let mode = match choice {
                0 => Mode::PlayerVsAi,
                1 => Mode::PlayerVsPlayer,
                2 => Mode::AiVsAi,
                _ => break,
            };

            if self.play_mode(mode)?.is_none() {
                break;
            }
        }

        self.console.show("Thanks for playing!");
        Ok(())
    }

    /// Set up seats for `mode` and play one game.
    ///
    /// `Ok(None)` when input closed before the game finished.
    pub fn play_mode(&mut self, mode: Mode) -> Result<Option<GameOutcome>> {
        let (x, o) = match mode {
            Mode::PlayerVsAi => {
                let Some(choice) = self.console.choose("Choose your symbol", &MARKS)? else {
                    return Ok(None);
                };
                if choice == 1 {
                    (self.engine_seat(), Seat::Human)
                } else {
                    (Seat::Human, self.engine_seat())
                }
            }
            Mode::PlayerVsPlayer => (Seat::Human, Seat::Human),
            Mode::AiVsAi => (self.engine_seat(), self.engine_seat()),
        };

        self.play_game(Player::X, x, o)
    }

    /// Alternate turns from `first` until the board is decided.
    ///
    /// `Ok(None)` when a human's input closed mid-game.
    pub fn play_game(&mut self, first: Player, x: Seat, o: Seat) -> Result<Option<GameOutcome>> {
        let mut seats = [x, o];
        let mut game = Game::new(first);
        self.console.show(&game.board().to_string());

        loop {
            let mark = game.to_move();
            let seat = &mut seats[seat_index(mark)];

            let position = match seat {
                Seat::Human => {
                    match prompt_human_move(&mut self.console, game.board(), mark)? {
                        Some(position) => position,
                        None => {
                            log::info!("input closed after {} moves", game.moves().len());
                            return Ok(None);
                        }
                    }
                }
                Seat::Computer(agent) => {
                    self.console.show("AI is thinking...");
                    agent.select_move(game.board(), mark)?
                }
            };

            let outcome = game.play(position)?;
            if !seat.is_human() {
                self.console
                    .show(&format!("AI placed '{mark}' at position {}", position + 1));
            }
            self.console.show(&game.board().to_string());

            if let Some(outcome) = outcome {
                log::info!("game over after {} moves: {outcome:?}", game.moves().len());
                self.announce(outcome, &seats);
                return Ok(Some(outcome));
            }
        }
    }

    fn announce(&mut self, outcome: GameOutcome, seats: &[Seat; 2]) {
        let message = match outcome {
            GameOutcome::Draw => "It's a draw!".to_string(),
            GameOutcome::Win(mark) => {
                let winner = &seats[seat_index(mark)];
                let loser = &seats[seat_index(mark.opponent())];
                match (winner.is_human(), loser.is_human()) {
                    (true, _) => format!("Congratulations! {mark} wins!"),
                    (false, true) => "AI wins! Better luck next time!".to_string(),
                    (false, false) => format!("{mark} wins!"),
                }
            }
        };
        self.console.show(&message);
    }

    fn engine_seat(&self) -> Seat {
        Seat::Computer(Box::new(EngineAgent::with_mode(
            "AI".to_string(),
            self.config.search,
        )))
    }
}

fn seat_index(mark: Player) -> usize {
    match mark {
        Player::X => 0,
        Player::O => 1,
    }
}
