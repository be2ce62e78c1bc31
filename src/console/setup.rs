//! Session setup: game mode, names, markers and who moves first.
//!
//! Every question is retried in a bounded loop; a refused answer only
//! repeats that one question.

use super::players::{ComputerPlayer, HumanPlayer, Player};
use super::{Console, GameEvent};
use crate::config::GameConfig;
use crate::games::tictactoe::Marker;
use anyhow::Result;
use derive_getters::Getters;
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};

/// Who plays whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum GameMode {
    /// Two people at one keyboard.
    #[strum(to_string = "Human v. Human")]
    HumanVsHuman,
    /// A person against the heuristic.
    #[strum(to_string = "Human v. Computer")]
    HumanVsComputer,
    /// The heuristic against itself.
    #[strum(to_string = "Computer v. Computer")]
    ComputerVsComputer,
}

impl GameMode {
    /// Menu number shown next to this mode (1-based).
    pub fn menu_number(self) -> usize {
        GameMode::iter().position(|m| m == self).unwrap_or(0) + 1
    }

    /// Parses a menu answer such as `2`, `(2)` or `2.`.
    #[instrument]
    pub fn parse_choice(answer: &str) -> Option<Self> {
        let n = menu_choice(answer)?;
        GameMode::iter().find(|m| m.menu_number() == n)
    }

    /// Player kinds for the two profiles, in the order they are set up.
    pub fn kinds(self) -> [PlayerKind; 2] {
        match self {
            GameMode::HumanVsHuman => [PlayerKind::Human, PlayerKind::Human],
            GameMode::HumanVsComputer => [PlayerKind::Human, PlayerKind::Computer],
            GameMode::ComputerVsComputer => [PlayerKind::Computer, PlayerKind::Computer],
        }
    }
}

/// Whether a seat is typed at or computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum PlayerKind {
    /// Moves come from the keyboard.
    Human,
    /// Moves come from the heuristic.
    Computer,
}

/// A configured player before the game starts.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayerProfile {
    /// Display name.
    name: String,
    /// Marker written on the board.
    marker: Marker,
    /// Human or computer.
    kind: PlayerKind,
}

/// Everything needed to start a game.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct SessionSetup {
    /// Chosen mode.
    mode: GameMode,
    /// Player who moves first.
    first: PlayerProfile,
    /// Player who moves second.
    second: PlayerProfile,
}

impl SessionSetup {
    /// Builds the two players, first mover first.
    pub fn into_players(self, config: &GameConfig) -> [Box<dyn Player>; 2] {
        let first_marker = self.first.marker;
        let second_marker = self.second.marker;
        [
            build_player(self.first, second_marker, config, 0),
            build_player(self.second, first_marker, config, 1),
        ]
    }
}

fn build_player(
    profile: PlayerProfile,
    opponent: Marker,
    config: &GameConfig,
    offset: u64,
) -> Box<dyn Player> {
    match profile.kind {
        PlayerKind::Human => Box::new(HumanPlayer::new(profile.name, profile.marker)),
        PlayerKind::Computer => {
            let computer = ComputerPlayer::new(profile.name, profile.marker, opponent)
                .with_think_delay(config.think_delay());
            match config.seed() {
                Some(seed) => Box::new(computer.with_seed(seed.wrapping_add(offset))),
                None => Box::new(computer),
            }
        }
    }
}

/// A question asked during setup.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupPrompt {
    /// Game mode menu.
    #[display(
        "Welcome to Tic Tac Toe\nPlease select your game type:\n(1) {}\n(2) {}\n(3) {}\n> ",
        GameMode::HumanVsHuman,
        GameMode::HumanVsComputer,
        GameMode::ComputerVsComputer
    )]
    GameMode,
    /// Name for a human player.
    #[display("Player {seat}, what is your name? ")]
    PlayerName {
        /// 1-based position in setup order.
        seat: usize,
    },
    /// Marker for a named player.
    #[display("{name}, which marker do you want (default {default})? ")]
    Marker {
        /// Player being asked about.
        name: String,
        /// Marker used for a blank answer.
        default: Marker,
    },
    /// Who opens the game.
    #[display("Who goes first? (1) {first} or (2) {second}: ")]
    FirstPlayer {
        /// First profile's name.
        first: String,
        /// Second profile's name.
        second: String,
    },
}

/// A refused setup answer.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SetupError {
    /// Game mode answer was not 1, 2 or 3.
    #[display("Sorry, I didn't understand {_0:?}. Try selecting 1, 2, or 3")]
    UnknownMode(String),
    /// First-player answer was not 1 or 2.
    #[display("Sorry, I didn't understand {_0:?}. Try selecting 1 or 2")]
    UnknownFirstPlayer(String),
    /// Both players asked for the same marker.
    #[display("{_0} is already taken. Pick a different marker")]
    DuplicateMarker(Marker),
    /// The symbol draws like an empty cell.
    #[display("{_0:?} looks like an empty cell. Pick a different marker")]
    UnusableMarker(char),
    /// The same question was refused too many times.
    #[display("Giving up after {attempts} invalid answers")]
    TooManyAttempts {
        /// Attempts made.
        attempts: u32,
    },
}

impl std::error::Error for SetupError {}

/// Asks the setup questions and returns the configured session.
///
/// # Errors
///
/// Fails when input closes or a question is refused `max_attempts` times.
#[instrument(skip(console))]
pub async fn run_setup(console: &mut Console, max_attempts: u32) -> Result<SessionSetup> {
    let mode = ask(console, max_attempts, SetupPrompt::GameMode, |answer| {
        GameMode::parse_choice(answer).ok_or_else(|| SetupError::UnknownMode(answer.trim().into()))
    })
    .await?;
    info!(%mode, "Game mode selected");

    let [first_kind, second_kind] = mode.kinds();
    let first_name = choose_name(console, first_kind, 1, mode).await?;
    let second_name = choose_name(console, second_kind, 2, mode).await?;

    let first_marker = ask(
        console,
        max_attempts,
        SetupPrompt::Marker {
            name: first_name.clone(),
            default: Marker::X,
        },
        |answer| parse_marker(answer, Marker::X),
    )
    .await?;

    let second_default = if first_marker == Marker::O {
        Marker::X
    } else {
        Marker::O
    };
    let second_marker = ask(
        console,
        max_attempts,
        SetupPrompt::Marker {
            name: second_name.clone(),
            default: second_default,
        },
        |answer| {
            let marker = parse_marker(answer, second_default)?;
            if marker == first_marker {
                Err(SetupError::DuplicateMarker(marker))
            } else {
                Ok(marker)
            }
        },
    )
    .await?;

    let a = PlayerProfile {
        name: first_name,
        marker: first_marker,
        kind: first_kind,
    };
    let b = PlayerProfile {
        name: second_name,
        marker: second_marker,
        kind: second_kind,
    };

    let prompt = SetupPrompt::FirstPlayer {
        first: a.name.clone(),
        second: b.name.clone(),
    };
    let a_first = ask(console, max_attempts, prompt, |answer| match menu_choice(answer) {
        Some(1) => Ok(true),
        Some(2) => Ok(false),
        _ => Err(SetupError::UnknownFirstPlayer(answer.trim().into())),
    })
    .await?;

    let (first, second) = if a_first { (a, b) } else { (b, a) };
    info!(first = %first.name, second = %second.name, "Setup complete");
    Ok(SessionSetup {
        mode,
        first,
        second,
    })
}

/// Repeats `prompt` until `parse` accepts an answer or attempts run out.
async fn ask<T>(
    console: &mut Console,
    max_attempts: u32,
    prompt: SetupPrompt,
    mut parse: impl FnMut(&str) -> Result<T, SetupError>,
) -> Result<T> {
    let attempts = max_attempts.max(1);
    for attempt in 1..=attempts {
        console.emit(GameEvent::Setup(prompt.clone()));
        let answer = console.read_line().await?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!(attempt, error = %e, "Setup answer refused");
                console.emit(GameEvent::SetupRejected(e));
            }
        }
    }
    Err(SetupError::TooManyAttempts { attempts }.into())
}

/// Humans are asked for a name; computers are named for them.
async fn choose_name(
    console: &mut Console,
    kind: PlayerKind,
    seat: usize,
    mode: GameMode,
) -> Result<String> {
    match kind {
        PlayerKind::Computer if mode == GameMode::ComputerVsComputer => {
            Ok(format!("Computer {seat}"))
        }
        PlayerKind::Computer => Ok("Computer".to_string()),
        PlayerKind::Human => {
            console.emit(GameEvent::Setup(SetupPrompt::PlayerName { seat }));
            let answer = console.read_line().await?;
            let name = answer.trim();
            if name.is_empty() {
                Ok(format!("Player {seat}"))
            } else {
                Ok(name.to_string())
            }
        }
    }
}

/// First visible character of the answer, or `default` for a blank answer.
fn parse_marker(answer: &str, default: Marker) -> Result<Marker, SetupError> {
    match answer.trim().chars().next() {
        None => Ok(default),
        Some(symbol) => Marker::new(symbol).ok_or(SetupError::UnusableMarker(symbol)),
    }
}

/// Reads `n`, `(n)` or `n.` as a menu number.
fn menu_choice(answer: &str) -> Option<usize> {
    let answer = answer.trim();
    let answer = answer
        .strip_prefix('(')
        .and_then(|a| a.strip_suffix(')'))
        .or_else(|| answer.strip_suffix('.'))
        .unwrap_or(answer);
    answer.trim().parse().ok()
}
