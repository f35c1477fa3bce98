//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjshoe::deck::{DeckService, ShuffledShoe};
use bjshoe::{Card, Game, GameOptions, Phase, Presenter, Snapshot, Status, Suit};
use clap::Parser;

#[derive(Parser)]
#[command(name = "cli_blackjack", about = "Play blackjack against the dealer")]
struct Cli {
    /// Seed for the in-process shoe (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Skip the dealer's pacing delays
    #[arg(long)]
    instant: bool,

    /// Draw from the public deck API instead of an in-process shoe
    #[cfg(feature = "http")]
    #[arg(long)]
    http: bool,
}

/// Prints the table whenever it changes.
struct Console;

impl Presenter for Console {
    fn render(&mut self, snapshot: &Snapshot) {
        let message = snapshot.status.message();
        if !message.is_empty() {
            println!("{message}");
        }

        if snapshot.dealer.is_empty() {
            return;
        }

        let dealer_value = snapshot
            .dealer_score
            .map_or_else(|| "?".to_string(), |value| value.to_string());
        println!(
            "\nDealer: {} (value {dealer_value})",
            format_dealer(&snapshot.dealer)
        );
        println!(
            "You:    {} (value {})\n",
            format_cards(&snapshot.player),
            snapshot.player_score
        );

        if let Some(outcome) = snapshot.outcome {
            println!("{}", colorize(outcome.message(), "1"));
        }
    }
}

fn build_service(cli: &Cli) -> Box<dyn DeckService> {
    #[cfg(feature = "http")]
    if cli.http {
        match bjshoe::deck::HttpDeckService::new(bjshoe::deck::HttpDeckOptions::default()) {
            Ok(service) => return Box::new(service),
            Err(err) => tracing::warn!(error = %err, "falling back to in-process shoe"),
        }
    }

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    Box::new(ShuffledShoe::new(seed))
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let options = if cli.instant {
        GameOptions::instant()
    } else {
        GameOptions::default()
    };

    println!("Blackjack CLI example (type 'q' to quit)");
    let mut game = Game::with_presenter(build_service(&cli), options, Console);

    loop {
        match prompt_line("\n[n]ew round or [q]uit: ").as_str() {
            "q" | "quit" => break,
            "" | "n" | "new" => {}
            _ => {
                println!("Unknown command.");
                continue;
            }
        }

        if let Err(err) = game.start_round().await {
            tracing::debug!(error = %err, "start_round failed");
            continue;
        }

        while game.phase() == Phase::PlayerTurn && game.status() == Status::AwaitingAction {
            let result = match prompt_line("[h]it or [s]tand: ").as_str() {
                "h" | "hit" => game.hit().await,
                "s" | "stand" => game.stand().await,
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                tracing::debug!(error = %err, "action failed");
            }
        }
    }

    println!("Goodbye.");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => return "q".to_string(),
        Ok(_) => {}
    }
    input.trim().to_lowercase()
}

fn format_dealer(cards: &[Option<Card>]) -> String {
    cards
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_cards(cards: &[Card]) -> String {
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
