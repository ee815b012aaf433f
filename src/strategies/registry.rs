use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::player::Player;
use crate::strategies::{CpuStrategy, RandomStrategy};

/// Returns a normalized label for a player spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a seated player from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - cpu[:name]
/// - random[:seed]
pub fn create_player_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Player, Box<dyn Error>> {
    let argument = spec.split_once(':').map(|(_, value)| value.trim());
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = argument
                .map(str::to_string)
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Player::human(name))
        }
        "cpu" => {
            let name = argument
                .map(str::to_string)
                .unwrap_or_else(|| format!("CPU {index}"));
            Ok(Player::automated(name, Box::new(CpuStrategy::new())))
        }
        "random" => {
            let custom_seed = argument
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            let rng = StdRng::seed_from_u64(custom_seed);
            Ok(Player::automated(
                format!("Random {index}"),
                Box::new(RandomStrategy::new(rng)),
            ))
        }
        _ => Err(format!("unrecognized player spec: {spec}").into()),
    }
}
