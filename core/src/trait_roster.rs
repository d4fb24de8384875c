//! The full roster of player attributes a boost can target.
//!
//! Used for display listings only. Reward resolution never checks trait
//! names against this roster; configured names are trusted as-is.

pub struct TraitRoster;

impl TraitRoster {
    /// Every attribute display name, grouped by position family.
    pub fn display_names() -> &'static [&'static str] {
        &[
            // Physical
            "Speed", "Strength", "Agility", "Acceleration", "Awareness", "Toughness",
            "Stamina", "Jumping",

            // Ball carrier
            "Break Tackle", "Trucking", "Change of Direction", "Ball Carrier Vision",
            "Stiff Arm", "Spin Move", "Juke Move", "Carrying",

            // Quarterback
            "Throw Power", "Short Accuracy", "Medium Accuracy", "Deep Accuracy",
            "Scrambling", "Throw Under Pressure", "Break Sack", "Play Action",

            // Receiving
            "Catching", "Short Route Running", "Medium Route Running", "Deep Route Running",
            "Catch in Traffic", "Spectacular Catch", "Release",

            // Blocking
            "Pass Block", "Pass Block Power", "Pass Block Finesse", "Run Block",
            "Run Block Power", "Run Block Finesse", "Lead Block", "Impact Blocking",

            // Defense
            "Tackle", "Power Moves", "Pass Rush Moves", "Finesse Moves", "Block Shedding",
            "Pursuit", "Play Recognition", "Man Coverage", "Zone Coverage", "Press",

            // Special teams
            "Kick Power", "Kick Accuracy", "Return",
        ]
    }

    /// Alphabetical copy of the roster, for pickers.
    pub fn sorted() -> Vec<String> {
        let mut names: Vec<String> = Self::display_names().iter().map(|s| s.to_string()).collect();
        names.sort();
        names
    }

    /// Case-insensitive lookup returning the canonical display name.
    pub fn canonical(name: &str) -> Option<&'static str> {
        Self::display_names()
            .iter()
            .copied()
            .find(|candidate| candidate.eq_ignore_ascii_case(name.trim()))
    }
}
