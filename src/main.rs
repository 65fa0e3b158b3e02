use clap::{Parser, Subcommand};
use hopper::game::{colour::Colour, model::Game};
use hopper::players::{HumanPlayer, RandomPlayer};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Arguments {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs an interactive hotseat game on the terminal (DEFAULT)
    Play {
        /// Name for the game
        #[arg(short, long, default_value = "hopper")]
        name: String,
    },
    /// Plays out a batch of random games and reports their outcomes
    SelfPlay {
        games: usize,
        /// Seed for reproducible batches
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

pub fn main() {
    let args = Arguments::parse();
    env_logger::init();

    match args.command.unwrap_or(Command::Play {
        name: String::from("hopper"),
    }) {
        Command::Play { name } => play(name),
        Command::SelfPlay { games, seed } => self_play(games, seed),
    }
}

fn play(name: String) {
    let mut game = Game::new(name, Box::new(HumanPlayer::new()));
    println!("{}", game.position());
    loop {
        let to_move = game.current_player();
        match game.step() {
            Ok(Some(mv)) => {
                println!("{to_move} played {mv}");
                println!("{}", game.position());
            }
            Ok(None) => {
                println!("{to_move} has no move to play, game over");
                break;
            }
            Err(e) => println!("{e}"),
        }
    }
}

fn self_play(games: usize, seed: Option<u64>) {
    for game_index in 0..games {
        let player = match seed {
            Some(seed) => RandomPlayer::seeded(seed.wrapping_add(game_index as u64)),
            None => RandomPlayer::new(),
        };
        let mut game = Game::new(format!("selfplay-{game_index}"), Box::new(player));

        let mut plies = 0usize;
        loop {
            match game.step() {
                Ok(Some(_)) => plies += 1,
                Ok(None) => break,
                Err(e) => {
                    log::error!("selfplay move rejected: {e}");
                    break;
                }
            }
        }

        let position = game.position();
        println!(
            "{}: {plies} plies, {} to move, {} red and {} white men left",
            game.name(),
            game.current_player(),
            position.piece_count(Colour::Red),
            position.piece_count(Colour::White),
        );
    }
}
