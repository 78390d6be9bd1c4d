use crate::card::Card;
use crate::game::error::GameError;
use std::fmt;

/// How the drawn card must compare to the top card of the chosen stack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Predicate {
    Lower,
    Equal,
    Higher,
}

impl Predicate {
    pub const ALL: [Predicate; 3] = [Predicate::Lower, Predicate::Equal, Predicate::Higher];

    /// Legacy numeric choice values: 0 lower, 1 equal, 2 higher
    pub fn code(&self) -> u8 {
        match self {
            Predicate::Lower => 0,
            Predicate::Equal => 1,
            Predicate::Higher => 2,
        }
    }
}

impl TryFrom<u8> for Predicate {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Predicate::Lower),
            1 => Ok(Predicate::Equal),
            2 => Ok(Predicate::Higher),
            other => Err(GameError::InvalidPredicate(other)),
        }
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Predicate::Lower => "lower",
            Predicate::Equal => "equal",
            Predicate::Higher => "higher",
        };
        write!(f, "{}", s)
    }
}

/// Does `drawn` beat `top` under `predicate`?
pub fn is_valid(drawn: &Card, top: &Card, predicate: Predicate) -> bool {
    match predicate {
        Predicate::Lower => drawn.rank() < top.rank(),
        Predicate::Equal => drawn.rank() == top.rank(),
        Predicate::Higher => drawn.rank() > top.rank(),
    }
}
