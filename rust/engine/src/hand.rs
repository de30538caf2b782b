//! Builds a structured [`Hand`] from the ordered rows of one hand.
//!
//! The first three rows are the header preamble (stacks, small blind, big
//! blind). Everything after is bucketed into streets by a small state
//! machine: [`classify`] maps a row to a [`Step`] without touching the hand,
//! and [`Cursor::advance`] applies it.

use serde::{Deserialize, Serialize};

use crate::action::{parse_action, parse_player, Action};
use crate::errors::HandError;
use crate::event::EventRow;
use crate::logger::Street;

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 10;

const STACKS_MARKER: &str = "Player stacks";
const SMALL_BLIND_MARKER: &str = "small blind";
const BIG_BLIND_MARKER: &str = "big blind";
const CLOSING_MARKERS: [&str; 3] = ["Uncalled bet", "collected", "run it twice"];

/// Position of the builder inside a hand.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Cursor {
    Header,
    Street(Street),
    Closed,
}

/// What a single row means to the builder.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Step<'a> {
    /// Settlement or multi-way pot marker: stop consuming rows
    Close,
    /// Street marker with the board text that follows it
    Deal(Street, &'a str),
    /// Anything else is a player action
    Act(&'a str),
}

/// Classifies a post-header row. Closing markers win over street markers.
pub fn classify(description: &str) -> Step<'_> {
    if CLOSING_MARKERS.iter().any(|m| description.contains(m)) {
        return Step::Close;
    }
    for street in [Street::Flop, Street::Turn, Street::River] {
        if let Some(board) = street
            .marker()
            .and_then(|marker| description.strip_prefix(marker))
        {
            return Step::Deal(street, board.trim_start());
        }
    }
    Step::Act(description)
}

impl Cursor {
    /// Next cursor after `step`. A closed cursor never reopens.
    pub fn advance(self, step: &Step<'_>) -> Cursor {
        match (self, step) {
            (Cursor::Closed, _) | (_, Step::Close) => Cursor::Closed,
            (_, Step::Deal(street, _)) => Cursor::Street(*street),
            (Cursor::Header, Step::Act(_)) => Cursor::Street(Street::Preflop),
            (cursor, Step::Act(_)) => cursor,
        }
    }
}

/// A reconstructed hand.
///
/// `players` is button-relative: index 0 button, 1 small blind, 2 big blind.
/// Heads-up hands are `[small blind/button, big blind]`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    pub players: Vec<String>,
    pub hand_time: String,
    pub preflop_actions: Vec<Action>,
    pub flop_actions: Vec<Action>,
    pub turn_actions: Vec<Action>,
    pub river_actions: Vec<Action>,
    pub flop_board: Option<String>,
    pub turn_board: Option<String>,
    pub river_board: Option<String>,
    /// False when the header had no small blind row; callers drop such hands
    pub valid: bool,
}

impl Hand {
    fn empty(valid: bool) -> Self {
        Self {
            players: Vec::new(),
            hand_time: String::new(),
            preflop_actions: Vec::new(),
            flop_actions: Vec::new(),
            turn_actions: Vec::new(),
            river_actions: Vec::new(),
            flop_board: None,
            turn_board: None,
            river_board: None,
            valid,
        }
    }

    /// Builds a hand from its rows, already stripped of lifecycle noise.
    pub fn build(rows: &[EventRow]) -> Result<Hand, HandError> {
        if rows.len() < 3 {
            return Err(HandError::MissingHeader { found: rows.len() });
        }
        let (stacks, small_blind, big_blind) = (&rows[0], &rows[1], &rows[2]);

        if !stacks.description.contains(STACKS_MARKER) {
            return Err(HandError::MissingStacks(stacks.description.clone()));
        }
        if !small_blind.description.contains(SMALL_BLIND_MARKER) {
            return Ok(Hand::empty(false));
        }
        if !big_blind.description.contains(BIG_BLIND_MARKER) {
            return Err(HandError::MissingBigBlind(big_blind.description.clone()));
        }

        let mut hand = Hand::empty(true);
        hand.players = seat_players(
            parse_stack_row(&stacks.description),
            blind_poster(small_blind)?,
            blind_poster(big_blind)?,
        )?;
        hand.hand_time = stacks.timestamp.clone();

        let mut cursor = Cursor::Header;
        for row in &rows[3..] {
            let step = classify(&row.description);
            cursor = cursor.advance(&step);
            let Cursor::Street(street) = cursor else {
                break;
            };
            match step {
                Step::Deal(_, board) => {
                    if let Some(slot) = hand.board_mut(street) {
                        *slot = Some(board.to_string());
                    }
                }
                Step::Act(description) => {
                    let action = parse_action(description).map_err(|source| HandError::Action {
                        sequence_id: row.sequence_id.clone(),
                        source,
                    })?;
                    hand.actions_mut(street).push(action);
                }
                Step::Close => break,
            }
        }
        Ok(hand)
    }

    pub fn actions(&self, street: Street) -> &[Action] {
        match street {
            Street::Preflop => &self.preflop_actions,
            Street::Flop => &self.flop_actions,
            Street::Turn => &self.turn_actions,
            Street::River => &self.river_actions,
        }
    }

    fn actions_mut(&mut self, street: Street) -> &mut Vec<Action> {
        match street {
            Street::Preflop => &mut self.preflop_actions,
            Street::Flop => &mut self.flop_actions,
            Street::Turn => &mut self.turn_actions,
            Street::River => &mut self.river_actions,
        }
    }

    pub fn board(&self, street: Street) -> Option<&str> {
        match street {
            Street::Preflop => None,
            Street::Flop => self.flop_board.as_deref(),
            Street::Turn => self.turn_board.as_deref(),
            Street::River => self.river_board.as_deref(),
        }
    }

    fn board_mut(&mut self, street: Street) -> Option<&mut Option<String>> {
        match street {
            Street::Preflop => None,
            Street::Flop => Some(&mut self.flop_board),
            Street::Turn => Some(&mut self.turn_board),
            Street::River => Some(&mut self.river_board),
        }
    }

    /// Every action in chronological order.
    pub fn all_actions(&self) -> impl Iterator<Item = &Action> {
        Street::ALL.into_iter().flat_map(|s| self.actions(s).iter())
    }

    pub fn is_heads_up(&self) -> bool {
        self.players.len() == 2
    }

    pub fn button(&self) -> Option<&str> {
        self.players.first().map(String::as_str)
    }

    pub fn small_blind(&self) -> Option<&str> {
        let idx = if self.is_heads_up() { 0 } else { 1 };
        self.players.get(idx).map(String::as_str)
    }

    pub fn big_blind(&self) -> Option<&str> {
        let idx = if self.is_heads_up() { 1 } else { 2 };
        self.players.get(idx).map(String::as_str)
    }

    pub fn hand_time_utc(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.hand_time)
            .ok()
            .map(|t| t.with_timezone(&chrono::Utc))
    }
}

fn blind_poster(row: &EventRow) -> Result<&str, HandError> {
    parse_player(&row.description).map_err(|source| HandError::Action {
        sequence_id: row.sequence_id.clone(),
        source,
    })
}

/// Player names in listed order from
/// `Player stacks: #1 "George @ ZuSk" (114.14) | #4 "Mo @ C2SG" (172.60)`.
pub fn parse_stack_row(description: &str) -> Vec<String> {
    let segments: Vec<&str> = description.split('@').collect();
    let Some((_, named)) = segments.split_last() else {
        return Vec::new();
    };
    named
        .iter()
        .filter_map(|seg| seg.rsplit('"').next())
        .map(|name| name.strip_suffix(' ').unwrap_or(name).to_string())
        .collect()
}

/// Rotates the listed seats into button-relative order.
pub fn seat_players(
    mut players: Vec<String>,
    small_blind: &str,
    big_blind: &str,
) -> Result<Vec<String>, HandError> {
    if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players.len()) {
        return Err(HandError::PlayerCount {
            found: players.len(),
        });
    }
    for poster in [small_blind, big_blind] {
        if !players.iter().any(|p| p == poster) {
            return Err(HandError::BlindNotSeated {
                player: poster.to_string(),
            });
        }
    }

    if let Some(idx) = players.iter().position(|p| p == small_blind) {
        players.rotate_left(idx);
    }
    if players[1] != big_blind {
        return Err(HandError::SeatingMismatch {
            expected: big_blind.to_string(),
            found: players[1].clone(),
        });
    }
    if players.len() > 2 {
        players.rotate_right(1);
    }
    Ok(players)
}
