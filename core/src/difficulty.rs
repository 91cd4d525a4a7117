use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    /// Every level, in menu order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    /// Board size and mine count for this level.
    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Beginner => GameConfig::new_unchecked((9, 9), 10),
            Intermediate => GameConfig::new_unchecked((16, 16), 49),
            Expert => GameConfig::new_unchecked((30, 30), 199),
        }
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Beginner => "Beginner",
            Intermediate => "Intermediate",
            Expert => "Expert",
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}

impl core::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizing_table() {
        assert_eq!(Difficulty::Beginner.config(), GameConfig::new((9, 9), 10));
        assert_eq!(
            Difficulty::Intermediate.config(),
            GameConfig::new((16, 16), 49)
        );
        assert_eq!(Difficulty::Expert.config(), GameConfig::new((30, 30), 199));
    }

    #[test]
    fn every_level_leaves_room_for_the_safe_zone() {
        for level in Difficulty::ALL {
            let config = level.config();
            assert!(config.mines <= GameConfig::max_mines(config.size), "{level}");
        }
    }
}
