use super::Player;

/// Named terminal colors a disc can be painted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl DiscColor {
    pub fn name(self) -> &'static str {
        match self {
            DiscColor::Red => "red",
            DiscColor::Green => "green",
            DiscColor::Yellow => "yellow",
            DiscColor::Blue => "blue",
            DiscColor::Magenta => "magenta",
            DiscColor::Cyan => "cyan",
            DiscColor::White => "white",
        }
    }
}

/// Disc color for each player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub x: DiscColor,
    pub o: DiscColor,
}

impl Palette {
    pub fn for_player(&self, player: Player) -> DiscColor {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            x: DiscColor::Magenta,
            o: DiscColor::Blue,
        }
    }
}
