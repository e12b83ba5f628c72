//! Player-facing text: level titles, exit notices and the game-over screen

use vp_core::Corner;

/// English ordinal suffix for `n` ("st", "nd", "rd", "th")
pub fn ordinal_suffix(n: u32) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}

/// Title shown when a level starts
pub fn level_title(level: u32) -> String {
    format!("Dusk of the {level}{} Night.", ordinal_suffix(level))
}

/// Notification for a freshly opened exit
///
/// Each corner is announced by the side the player sees it open on.
pub fn exit_notice(corner: Corner) -> &'static str {
    match corner {
        Corner::SouthWest => "South exit has opened up!",
        Corner::SouthEast => "East exit has opened up!",
        Corner::NorthWest => "West exit has opened up!",
        Corner::NorthEast => "North exit has opened up!",
    }
}

/// Game-over text for a death on `level`
pub fn game_over_text(level: u32) -> String {
    let survived = level.saturating_sub(1);
    let nights = if survived == 1 { "night" } else { "nights" };
    let epilogue = match level {
        0..=5 => "The remaining VamPyros\ndidn't sleep the following day.",
        6..=10 => "You have instilled a new \nsense of hope in some VamPyros.",
        11..=15 => {
            "The VamPyros mourned your death\nlike that of a war-hero.\n\
             Many were determined to follow\nin your footsteps."
        }
        _ => "The VamPyros slowly accepted \nthat there was no end to the games.",
    };
    format!("You survived {survived} {nights} in the arena.\n\n{epilogue}")
}

/// Shown when every hostile on the level is dead
pub const ARENA_CLEARED: &str = "Arena cleared!";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordinals() {
        assert_eq!(level_title(1), "Dusk of the 1st Night.");
        assert_eq!(level_title(2), "Dusk of the 2nd Night.");
        assert_eq!(level_title(3), "Dusk of the 3rd Night.");
        assert_eq!(level_title(4), "Dusk of the 4th Night.");
        assert_eq!(level_title(11), "Dusk of the 11th Night.");
        assert_eq!(level_title(12), "Dusk of the 12th Night.");
        assert_eq!(level_title(21), "Dusk of the 21st Night.");
        assert_eq!(level_title(112), "Dusk of the 112th Night.");
    }

    #[test]
    fn test_exit_notices() {
        assert_eq!(exit_notice(Corner::SouthWest), "South exit has opened up!");
        assert_eq!(exit_notice(Corner::NorthEast), "North exit has opened up!");
    }

    #[test]
    fn test_arena_cleared_text() {
        assert_eq!(ARENA_CLEARED, "Arena cleared!");
    }

    #[test]
    fn test_game_over_singular() {
        let text = game_over_text(2);
        assert!(text.starts_with("You survived 1 night in the arena."));
        assert!(text.contains("didn't sleep"));
    }

    #[test]
    fn test_game_over_tiers() {
        assert!(game_over_text(1).starts_with("You survived 0 nights"));
        assert!(game_over_text(5).contains("didn't sleep"));
        assert!(game_over_text(6).contains("sense of hope"));
        assert!(game_over_text(10).contains("sense of hope"));
        assert!(game_over_text(11).contains("war-hero"));
        assert!(game_over_text(15).contains("in your footsteps"));
        assert!(game_over_text(16).contains("no end to the games"));
    }
}
