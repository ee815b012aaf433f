use std::collections::HashMap;
use std::error::Error;
use std::io::{self, Write};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};

use unobot::{
    Action, DeckVariant, EventLogger, Game, GameError, PlayerId, create_player_from_spec,
};

/// Default base seed for deterministic runs.
const DEFAULT_SEED: u64 = 0xDEC0_1DED_5EED_F00D;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Standard,
    SkipTwo,
    Quick,
    WildHeavy,
}

impl From<VariantArg> for DeckVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Standard => DeckVariant::Standard,
            VariantArg::SkipTwo => DeckVariant::StandardWithSkipTwo,
            VariantArg::Quick => DeckVariant::Quick,
            VariantArg::WildHeavy => DeckVariant::WildHeavy,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "simulate",
    about = "Play UNO rounds between automated and interactive players."
)]
struct Args {
    /// Number of rounds to play
    #[arg(short = 'g', long = "games", default_value_t = 1)]
    games: usize,

    /// Base RNG seed for deck shuffles and random players
    #[arg(short = 's', long = "seed", default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Cards dealt to each player
    #[arg(long = "hand-size", default_value_t = 7)]
    hand_size: usize,

    /// Deck recipe
    #[arg(long = "variant", value_enum, default_value_t = VariantArg::Standard)]
    variant: VariantArg,

    /// Safety cap on turns per round; longer rounds are abandoned
    #[arg(long = "max-turns", default_value_t = 2000)]
    max_turns: u64,

    /// Do not print the event log
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue)]
    quiet: bool,

    /// Player specs: human[:name], cpu[:name], random[:seed] (2 or more)
    players: Vec<String>,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let specs = if args.players.is_empty() {
        vec![String::from("human"), String::from("cpu")]
    } else {
        args.players.clone()
    };

    let mut builder = Game::builder()
        .with_seed(args.seed)
        .with_hand_size(args.hand_size)
        .with_variant(args.variant.into());
    for (index, spec) in specs.iter().enumerate() {
        builder = builder.with_player(create_player_from_spec(spec, index, args.seed)?);
    }
    let mut game = builder.build()?;
    if !args.quiet {
        game.add_event_listener(EventLogger::new(io::stdout()));
    }

    let mut wins: HashMap<PlayerId, (usize, u64)> = HashMap::new();
    let mut abandoned = 0usize;
    for round in 0..args.games {
        if round > 0 {
            game.reset();
        }
        game.start()?;
        while !game.is_finished() {
            if game.turn() >= args.max_turns {
                println!("Max turn limit {} reached. Abandoning round.", args.max_turns);
                abandoned += 1;
                break;
            }
            if game.play_automated_turn() {
                continue;
            }
            let seat = game.current_seat();
            let Some(action) = prompt_human(&game, seat)? else {
                println!("Exiting game at user's request.");
                return Ok(());
            };
            if let Err(err) = game.apply_action(seat, action) {
                println!("{err}");
            }
        }
        if let (Some(winner), Some(score)) = (game.winner(), game.score()) {
            let entry = wins.entry(winner).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += u64::from(score);
        }
    }

    println!("\n=== Summary ({} rounds) ===", args.games);
    for (seat, player) in game.players().iter().enumerate() {
        let (won, points) = wins.get(&seat).copied().unwrap_or((0, 0));
        println!("  {:<12} wins {won:>4}  points {points:>6}", player.name());
    }
    if abandoned > 0 {
        println!("  abandoned rounds: {abandoned}");
    }
    Ok(())
}

fn describe_action(action: &Action) -> String {
    match action {
        Action::Play(card) => format!("play {card}"),
        Action::Draw => String::from("draw a card"),
        Action::Pass => String::from("keep the drawn card and pass"),
        Action::ChooseColor(color) => format!("choose {color}"),
    }
}

/// Reads the next action for a human seat from stdin. `None` means the user quit.
fn prompt_human(game: &Game, seat: PlayerId) -> Result<Option<Action>, GameError> {
    let actions = game.legal_actions(seat);
    if actions.is_empty() {
        return Err(GameError::InvalidState("no legal actions for the waiting player"));
    }
    let player = game.player(seat).ok_or(GameError::InvalidPlayer(seat))?;
    loop {
        println!("\n=== {}'s turn ===", player.name());
        if let Some(top) = game.top_card() {
            println!("Top card: {top}");
        }
        let hand = player
            .hand()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        println!("Hand: {hand}");
        for (index, action) in actions.iter().enumerate() {
            println!("  [{index}] {}", describe_action(action));
        }
        print!("Selection (q to quit): ");
        if io::stdout().flush().is_err() {
            eprintln!("failed to flush stdout");
        }
        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => return Ok(None),
            Ok(_) => {}
            Err(_) => {
                eprintln!("failed to read input");
                continue;
            }
        }
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        let Ok(choice) = trimmed.parse::<usize>() else {
            println!("Invalid input: '{trimmed}'. Please enter a number.");
            continue;
        };
        if let Some(action) = actions.get(choice) {
            return Ok(Some(*action));
        }
        println!("Index out of range. Please choose a valid option.");
    }
}
