//! Core simulation types: coordinates, lanes, cell values, actions.

use serde::{Deserialize, Serialize};

use crate::core::error::{EngineError, Result};

/// Grid coordinate (row, col). Row 0 is the top wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// One of the four fixed lanes, numbered 1-4 left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    One,
    Two,
    Three,
    Four,
}

impl Lane {
    pub const ALL: [Lane; 4] = [Lane::One, Lane::Two, Lane::Three, Lane::Four];

    /// Lane number as shown on the board (1-4)
    pub fn number(self) -> u8 {
        match self {
            Lane::One => 1,
            Lane::Two => 2,
            Lane::Three => 3,
            Lane::Four => 4,
        }
    }

    /// Zero-based index for lane-keyed arrays
    pub fn index(self) -> usize {
        (self.number() - 1) as usize
    }

    pub fn from_number(n: u8) -> Option<Lane> {
        match n {
            1 => Some(Lane::One),
            2 => Some(Lane::Two),
            3 => Some(Lane::Three),
            4 => Some(Lane::Four),
            _ => None,
        }
    }
}

/// Value occupying one grid cell. The grid is the single source of truth:
/// dots and barriers exist only as cell values, never in a separate registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    Wall,
    Lane(Lane),
    Dot,
    Barrier,
    GoalBlock,
}

impl Default for Cell {
    fn default() -> Self {
        Cell::Empty
    }
}

impl Cell {
    /// Whether a dot may move onto this cell (empties and lane markers only)
    pub fn admits_dot(self) -> bool {
        matches!(self, Cell::Empty | Cell::Lane(_))
    }

    /// Board rendering symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " . ",
            Cell::Wall => "███",
            Cell::Lane(Lane::One) => " 1 ",
            Cell::Lane(Lane::Two) => " 2 ",
            Cell::Lane(Lane::Three) => " 3 ",
            Cell::Lane(Lane::Four) => " 4 ",
            Cell::Dot => " ● ",
            Cell::Barrier => " O ",
            Cell::GoalBlock => " ■ ",
        }
    }
}

/// Player action: one barrier-placement bit per lane, packed into the low
/// nibble. Bit 0 is lane 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action(u8);

impl Action {
    /// The do-nothing action
    pub const NONE: Action = Action(0);

    /// Validates external input: anything above the low nibble is rejected.
    pub fn from_bits(bits: u8) -> Result<Action> {
        if bits > 0b1111 {
            return Err(EngineError::InvalidAction(format!(
                "action bits {bits:#06b} exceed the 4-bit lane range"
            )));
        }
        Ok(Action(bits))
    }

    /// Masks to the low nibble; total constructor for internally generated
    /// values that are already in range.
    pub const fn from_nibble(bits: u8) -> Action {
        Action(bits & 0b1111)
    }

    /// Parses the wire form used by external collaborators, e.g. "1011"
    /// (leftmost character is lane 1).
    pub fn parse(s: &str) -> Result<Action> {
        if s.len() != 4 {
            return Err(EngineError::InvalidAction(format!(
                "action '{s}' must be exactly 4 bits"
            )));
        }
        let mut bits = 0u8;
        for (i, ch) in s.chars().enumerate() {
            match ch {
                '1' => bits |= 1 << i,
                '0' => {}
                _ => {
                    return Err(EngineError::InvalidAction(format!(
                        "action '{s}' contains non-binary character '{ch}'"
                    )))
                }
            }
        }
        Ok(Action(bits))
    }

    /// Whether this action places a barrier on the given lane
    pub fn places(self, lane: Lane) -> bool {
        self.0 & (1 << lane.index()) != 0
    }

    pub fn bits(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for lane in Lane::ALL {
            write!(f, "{}", if self.places(lane) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

/// Outcome of one simulation cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepResult {
    /// Net score change this cycle (barrier exits, goal reward, trap penalty)
    pub score_delta: i64,
    /// At least one dot had no legal destination
    pub trapped: bool,
    /// A goal row was converted this cycle
    pub goal_placed: bool,
    /// The run has terminated (absorbing)
    pub game_over: bool,
}
