//! CLI blackjack demo.
//!
//! Set `RUST_LOG=bjsolo=debug` to watch the engine's events.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsolo::{GameOptions, GameResult, GameState, Hand, Table, Turn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut table = Table::new(GameOptions::default(), seed);
    let mut state = table.deal();

    loop {
        print_table(&state);

        let line = if state.turn() == Turn::PlayerTurn {
            prompt_line("(h)it, (s)tand, (r)eset, (q)uit: ")
        } else {
            prompt_line("(r)eset, (q)uit: ")
        };

        let next = match (line.as_str(), state.turn()) {
            ("h" | "hit", Turn::PlayerTurn) => table.hit(&state),
            ("s" | "stand", Turn::PlayerTurn) => table.stand(&state),
            ("r" | "reset", _) => Ok(table.deal()),
            ("q" | "quit", _) => return,
            _ => {
                println!("Unknown action.");
                continue;
            }
        };

        match next {
            Ok(next) => state = next,
            Err(err) => {
                println!("Engine error: {err}");
                return;
            }
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return String::from("q"),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn print_table(state: &GameState) {
    println!("\nDeck: {} cards remaining", state.card_deck().len());

    let player = state.player_hand();
    println!("Player: {} (score {})", format_hand(player), player.score());

    match state.turn() {
        Turn::PlayerTurn => {
            let up = state
                .dealer_up_card()
                .map_or_else(String::new, ToString::to_string);
            println!(
                "Dealer: ?? {up} (showing {})",
                state.visible_dealer_score()
            );
        }
        Turn::DealerTurn => {
            let dealer = state.dealer_hand();
            println!("Dealer: {} (score {})", format_hand(dealer), dealer.score());
        }
    }

    match state.settled_result() {
        GameResult::PlayerWin => println!("Player wins."),
        GameResult::DealerWin => println!("Dealer wins."),
        GameResult::Draw => println!("Draw."),
        GameResult::NoResult => {
            if player.is_bust() {
                println!("Bust! Stand to let the dealer finish.");
            }
        }
    }
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
