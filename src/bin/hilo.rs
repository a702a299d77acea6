//! Terminal front end for the higher/lower game.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use hilo_cards::deck::DeckApiClient;
use hilo_cards::games::hilo::GuessOutcome;
use hilo_cards::session::{GameSession, GuessSubmission, SessionEvent};
use hilo_cards::{Direction, GameConfig};

/// Play higher/lower against a friend in the terminal.
///
/// Commands: h(igher), l(ower), p(ass), d(raw), r(eset), q(uit).
#[derive(Debug, Parser)]
#[command(name = "hilo", version, about)]
struct Cli {
    /// TOML config file. Defaults are used when omitted.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Base URL of the deck service.
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Verbose logging.
    #[arg(long)]
    debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Guess(Direction),
    Pass,
    Draw,
    Reset,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        match input.to_ascii_lowercase().as_str() {
            "p" | "pass" => Some(Self::Pass),
            "d" | "draw" => Some(Self::Draw),
            "r" | "reset" => Some(Self::Reset),
            "q" | "quit" | "exit" => Some(Self::Quit),
            other => Direction::parse(other).map(Self::Guess),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("loading config '{}'", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(url) = &cli.api_url {
        config = config.with_deck_api_url(url.clone());
    }
    config.validate().context("validating config")?;
    Ok(config)
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(tokio::time::Instant::from_std(at)).await,
        None => std::future::pending().await,
    }
}

fn report(event: &SessionEvent) {
    match event {
        SessionEvent::GuessResolved(GuessOutcome::Correct { card, streak }) => {
            println!("{card}: correct! ({streak} in a row)");
        }
        SessionEvent::GuessResolved(GuessOutcome::Wrong {
            card, loser, points, ..
        }) => {
            println!("{card}: wrong. {loser} takes {points}.");
        }
        SessionEvent::GuessResolved(GuessOutcome::NoGuess) => {}
        SessionEvent::GuessRejected(err) => println!("{err}"),
        SessionEvent::RoundCleared(_) => {}
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_filter = if cli.debug {
        "debug".to_string()
    } else {
        "hilo_cards=info,warn".to_string()
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_filter));

    // Logs go to stderr; stdout is the game.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(cli.debug)
        .with_line_number(cli.debug)
        .init();

    let config = load_config(&cli)?;
    tracing::info!(deck_api_url = %config.deck_api_url, "starting");

    let client = DeckApiClient::from_config(&config);
    let mut session = GameSession::new(config, client);

    if session.reset().await.is_err() {
        println!("Could not fetch a deck. Type 'r' to try again.");
    }
    println!("{}", session.view());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line.context("reading stdin")? else {
                    break;
                };
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                match Command::parse(input) {
                    Some(Command::Quit) => break,
                    Some(Command::Reset) => {
                        if session.reset().await.is_err() {
                            println!("Could not fetch a deck. Type 'r' to try again.");
                        }
                    }
                    Some(Command::Draw) => match session.draw() {
                        Ok(card) => println!("Drew {card}"),
                        Err(err) => println!("{err}"),
                    },
                    Some(Command::Pass) => match session.submit_pass() {
                        Ok(to) => println!("Passed to {to}"),
                        Err(err) => println!("{err}"),
                    },
                    Some(Command::Guess(direction)) => {
                        match session.submit_guess(Some(direction), Instant::now()) {
                            Ok(GuessSubmission::Queued { direction, .. }) => {
                                println!("Guessing {direction}...");
                                continue;
                            }
                            Ok(GuessSubmission::Ignored) => {}
                            Err(err) => println!("{err}"),
                        }
                    }
                    None => {
                        println!("Unknown command '{input}'. Try h, l, p, d, r or q.");
                        continue;
                    }
                }
                println!("{}", session.view());
            }
            () = sleep_until(session.next_deadline()) => {
                let events = session.tick(Instant::now());
                events.iter().for_each(report);
                if !events.is_empty() {
                    println!("{}", session.view());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("h"), Some(Command::Guess(Direction::Higher)));
        assert_eq!(Command::parse("LOWER"), Some(Command::Guess(Direction::Lower)));
        assert_eq!(Command::parse("p"), Some(Command::Pass));
        assert_eq!(Command::parse("draw"), Some(Command::Draw));
        assert_eq!(Command::parse("r"), Some(Command::Reset));
        assert_eq!(Command::parse("q"), Some(Command::Quit));
        assert_eq!(Command::parse("sideways"), None);
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from(["hilo", "--api-url", "http://localhost:8000/api/deck", "--debug"]);
        assert!(cli.debug);
        assert!(cli.config.is_none());

        let config = load_config(&cli).unwrap();
        assert_eq!(config.deck_api_url, "http://localhost:8000/api/deck");
    }
}
