//! Matchup outcomes

/// Which side won a matchup
///
/// Serializes as its wire code, not its variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Winner {
    Draw = 0,
    First = 1,
    Second = 2,
}

impl Winner {
    /// Wire code: 0 = draw, 1 = first wins, 2 = second wins
    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Winner::Draw),
            1 => Some(Winner::First),
            2 => Some(Winner::Second),
            _ => None,
        }
    }

    /// Map a signed effectiveness score to a winner
    pub fn from_score(score: i8) -> Self {
        match score.signum() {
            1 => Winner::First,
            -1 => Winner::Second,
            _ => Winner::Draw,
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Winner {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Winner {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = <u8 as serde::Deserialize>::deserialize(deserializer)?;
        Winner::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid winner code {}", code)))
    }
}

/// Result of a single matchup
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchResult {
    pub winner: Winner,
    pub message: String,
}

impl MatchResult {
    pub fn is_draw(&self) -> bool {
        self.winner == Winner::Draw
    }
}
