//! Turn loops: who moves, how human input is validated, and when play stops

use crate::{
    Result,
    ports::{Agent, Console},
    tictactoe::{Board, Game, Player},
};

/// Who controls a mark
pub enum Seat {
    /// A person typing positions at the console
    Human,
    /// A computer agent
    Computer(Box<dyn Agent>),
}

impl Seat {
    pub fn is_human(&self) -> bool {
        matches!(self, Seat::Human)
    }
}

/// Why a line of human input was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputProblem {
    NotANumber,
    OutOfRange,
    Occupied,
}

/// Turn a 1-based position typed by a person into a board index.
///
/// The board is only read; a refused line never reaches [`Board::apply_move`].
pub fn parse_position(input: &str, board: &Board) -> std::result::Result<usize, InputProblem> {
    let number: i64 = input.trim().parse().map_err(|_| InputProblem::NotANumber)?;
    if !(1..=9).contains(&number) {
        return Err(InputProblem::OutOfRange);
    }
    let index = (number - 1) as usize;
    if board.is_empty(index) {
        Ok(index)
    } else {
        Err(InputProblem::Occupied)
    }
}

/// Ask until the person names an empty square. `Ok(None)` when input closes.
pub fn prompt_human_move(
    console: &mut dyn Console,
    board: &Board,
    mark: Player,
) -> Result<Option<usize>> {
    let prompt = format!("{mark}'s turn! Choose a position (1-9)");
    loop {
        let Some(line) = console.read_line(&prompt)? else {
            return Ok(None);
        };
        match parse_position(&line, board) {
            Ok(index) => return Ok(Some(index)),
            Err(problem) => {
                log::info!("rejected input {:?} for {mark}: {problem:?}", line.trim());
                console.show("Invalid move! Try again.");
            }
        }
    }
}

/// Play a silent game between two agents and return it finished.
///
/// # Errors
///
/// Propagates agent failures and illegal positions returned by an agent.
pub fn play_match<'a>(
    first: Player,
    x: &mut (dyn Agent + 'a),
    o: &mut (dyn Agent + 'a),
) -> Result<Game> {
    let mut game = Game::new(first);

    while !game.is_over() {
        let mark = game.to_move();
        let agent = match mark {
            Player::X => &mut *x,
            Player::O => &mut *o,
        };
        let position = agent.select_move(game.board(), mark)?;
        game.play(position)?;
    }

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{EngineAgent, RandomAgent, ScriptedConsole};
    use crate::search::SearchMode;
    use crate::tictactoe::GameOutcome;

    #[test]
    fn test_parse_position() {
        let board = Board::from_string("X........").unwrap();
        assert_eq!(parse_position(" 5 ", &board), Ok(4));
        assert_eq!(parse_position("9", &board), Ok(8));
        assert_eq!(parse_position("1", &board), Err(InputProblem::Occupied));
        assert_eq!(parse_position("0", &board), Err(InputProblem::OutOfRange));
        assert_eq!(parse_position("10", &board), Err(InputProblem::OutOfRange));
        assert_eq!(parse_position("-3", &board), Err(InputProblem::OutOfRange));
        assert_eq!(parse_position("five", &board), Err(InputProblem::NotANumber));
        assert_eq!(parse_position("", &board), Err(InputProblem::NotANumber));
    }

    #[test]
    fn test_prompt_reprompts_on_bad_input() {
        let board = Board::from_string("X...O....").unwrap();
        let mut console = ScriptedConsole::new(["abc", "1", "12", "3"]);
        let chosen = prompt_human_move(&mut console, &board, Player::X).unwrap();
        assert_eq!(chosen, Some(2));

        let rejections = console
            .output()
            .iter()
            .filter(|line| line.as_str() == "Invalid move! Try again.")
            .count();
        assert_eq!(rejections, 3);
    }

    #[test]
    fn test_prompt_stops_when_input_closes() {
        let mut console = ScriptedConsole::new(["x"]);
        let chosen = prompt_human_move(&mut console, &Board::new(), Player::O).unwrap();
        assert_eq!(chosen, None);
    }

    #[test]
    fn test_engine_self_play_draws() {
        let mut x = EngineAgent::with_mode("X".to_string(), SearchMode::Memoized);
        let mut o = EngineAgent::with_mode("O".to_string(), SearchMode::Memoized);
        let game = play_match(Player::X, &mut x, &mut o).unwrap();
        assert_eq!(game.outcome(), Some(GameOutcome::Draw));
        assert_eq!(game.moves().len(), 9);
    }

    #[test]
    fn test_match_between_different_agents() {
        let mut engine = EngineAgent::with_mode("AI".to_string(), SearchMode::Memoized);
        let mut random = RandomAgent::with_seed("Random".to_string(), 3);
        let game = play_match(Player::O, &mut engine, &mut random).unwrap();
        assert!(game.is_over());
        assert_eq!(game.first_player(), Player::O);
        assert_eq!(game.moves()[0].player, Player::O);
        assert_ne!(game.outcome(), Some(GameOutcome::Win(Player::O)));
    }

    #[test]
    fn test_engine_never_loses_to_random() {
        for seed in 0..20 {
            let mut engine = EngineAgent::with_mode("AI".to_string(), SearchMode::Memoized);
            let mut random = RandomAgent::with_seed("Random".to_string(), seed);
            let game = play_match(Player::X, &mut random, &mut engine).unwrap();
            assert_ne!(game.outcome(), Some(GameOutcome::Win(Player::X)), "seed {seed}");
        }
    }
}
