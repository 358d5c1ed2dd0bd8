use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::action::PlayerId;
use crate::bot::Bot;
use crate::bots::{CautiousBot, HumanBot, RandomBot, TrackerBot};
use crate::player::Difficulty;

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Build the bot for a configured difficulty tier.
pub fn bot_for_difficulty(difficulty: Difficulty, seat: PlayerId, seed: u64) -> Box<dyn Bot> {
    let rng = StdRng::seed_from_u64(seed);
    match difficulty {
        Difficulty::Easy => Box::new(RandomBot::new(rng)),
        Difficulty::Medium => Box::new(CautiousBot::new(rng)),
        Difficulty::Hard => Box::new(TrackerBot::new(seat, rng)),
    }
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - easy[:seed] (alias: random)
/// - medium[:seed] (alias: cautious)
/// - hard[:seed] (alias: tracker)
pub fn create_bot_from_spec(
    spec: &str,
    seat: PlayerId,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let spec_lower = spec.to_ascii_lowercase();
    let custom_seed = spec
        .split_once(':')
        .and_then(|(_, value)| value.parse::<u64>().ok())
        .unwrap_or(seed ^ ((seat as u64 + 1) * 0x9E37_79B9));

    if spec_lower.starts_with("human") {
        let name = spec
            .split_once(':')
            .map(|(_, name)| name.trim().to_string());
        let name = name.unwrap_or_else(|| format!("Human {seat}"));
        Ok(Box::new(HumanBot::new(name)))
    } else if spec_lower.starts_with("easy") || spec_lower.starts_with("random") {
        Ok(bot_for_difficulty(Difficulty::Easy, seat, custom_seed))
    } else if spec_lower.starts_with("medium") || spec_lower.starts_with("cautious") {
        Ok(bot_for_difficulty(Difficulty::Medium, seat, custom_seed))
    } else if spec_lower.starts_with("hard") || spec_lower.starts_with("tracker") {
        Ok(bot_for_difficulty(Difficulty::Hard, seat, custom_seed))
    } else {
        Err(format!("unrecognized bot spec: {spec}").into())
    }
}

/// Difficulty named by a spec, when it names a bot tier at all.
pub fn difficulty_for_spec(spec: &str) -> Option<Difficulty> {
    let label = label_for_spec(spec);
    if label.starts_with("easy") || label.starts_with("random") {
        Some(Difficulty::Easy)
    } else if label.starts_with("medium") || label.starts_with("cautious") {
        Some(Difficulty::Medium)
    } else if label.starts_with("hard") || label.starts_with("tracker") {
        Some(Difficulty::Hard)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_strip_arguments() {
        assert_eq!(label_for_spec("easy:42"), "easy");
        assert_eq!(label_for_spec("Human:Alice"), "human");
    }

    #[test]
    fn specs_map_to_difficulties() {
        assert_eq!(difficulty_for_spec("easy"), Some(Difficulty::Easy));
        assert_eq!(difficulty_for_spec("cautious:7"), Some(Difficulty::Medium));
        assert_eq!(difficulty_for_spec("tracker"), Some(Difficulty::Hard));
        assert_eq!(difficulty_for_spec("human:Bob"), None);
    }
}
