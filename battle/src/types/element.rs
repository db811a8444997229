//! Elemental type system and effectiveness table

/// How strictly type names are recognized when parsing free-form input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TypeNameMatching {
    /// Only the lowercase and capitalized spellings ("fire", "Fire")
    #[default]
    Legacy,
    /// Any casing ("FIRE", "fIrE", ...)
    CaseInsensitive,
}

impl TypeNameMatching {
    /// Parse a policy name ("legacy" or "case-insensitive")
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "legacy" => Some(TypeNameMatching::Legacy),
            "case-insensitive" => Some(TypeNameMatching::CaseInsensitive),
            _ => None,
        }
    }
}

/// Elemental types taking part in a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ElementalType {
    Fire = 0,
    Water = 1,
    Grass = 2,
}

/// Valid type names, as listed in error messages
pub const VALID_TYPE_NAMES: &str = "Fire, Water, Grass";

impl ElementalType {
    /// All 3 elemental types, in table order
    pub const ALL: [ElementalType; 3] = [
        ElementalType::Fire,
        ElementalType::Water,
        ElementalType::Grass,
    ];

    pub fn all() -> &'static [ElementalType] {
        &Self::ALL
    }

    /// Signed effectiveness of `self` attacking `defender`: 1, 0 or -1
    pub fn effectiveness(&self, defender: ElementalType) -> i8 {
        EFFECTIVENESS_TABLE[*self as usize][defender as usize]
    }

    /// Whether `self` wins against `other`
    pub fn beats(&self, other: ElementalType) -> bool {
        self.effectiveness(other) > 0
    }

    /// Parse a type name using the legacy spellings ("fire"/"Fire", ...)
    pub fn from_name(s: &str) -> Option<Self> {
        Self::from_name_with(TypeNameMatching::Legacy, s)
    }

    /// Parse a type name under the given matching policy
    ///
    /// No trimming is performed: " Fire" is not a type under either policy.
    pub fn from_name_with(matching: TypeNameMatching, s: &str) -> Option<Self> {
        match matching {
            TypeNameMatching::Legacy => match s {
                "fire" | "Fire" => Some(ElementalType::Fire),
                "water" | "Water" => Some(ElementalType::Water),
                "grass" | "Grass" => Some(ElementalType::Grass),
                _ => None,
            },
            TypeNameMatching::CaseInsensitive => Self::ALL
                .iter()
                .copied()
                .find(|t| t.as_str().eq_ignore_ascii_case(s)),
        }
    }

    /// Canonical capitalized name
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementalType::Fire => "Fire",
            ElementalType::Water => "Water",
            ElementalType::Grass => "Grass",
        }
    }
}

impl std::fmt::Display for ElementalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 3x3 effectiveness table
/// Row = first type, Column = second type
/// Values: 1 = row wins, -1 = column wins, 0 = draw
///
/// Order: Fire, Water, Grass
#[rustfmt::skip]
pub static EFFECTIVENESS_TABLE: [[i8; 3]; 3] = [
    // Fire
    [ 0, -1,  1],
    // Water
    [ 1,  0, -1],
    // Grass
    [-1,  1,  0],
];
