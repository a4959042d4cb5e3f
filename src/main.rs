use std::thread;
use std::time::Duration;

use minichess::config::AppConfig;
use minichess::engine::Game;
use minichess::{GreedySelector, MoveSelector, RandomSelector};

fn main() {
    // Initialize tracing (structured logging).
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "minichess=info".into()),
        )
        .init();

    let config = AppConfig::from_env();

    tracing::info!(
        "minichess v{} self-play demo starting",
        env!("CARGO_PKG_VERSION")
    );

    let white: &dyn MoveSelector = &GreedySelector::new();
    let black: &dyn MoveSelector = &RandomSelector::new();

    let mut game = Game::new();
    println!("{}", game.board());

    for ply in 1..=config.max_plies {
        let side = game.side_to_move();
        let selector = match side {
            minichess::Color::White => white,
            minichess::Color::Black => black,
        };

        let mv = match game.make_ai_move(selector) {
            Ok(mv) => mv,
            Err(e) => {
                tracing::warn!("game stopped: {e}");
                break;
            }
        };

        println!(
            "{ply:>3}. {side} ({}) plays {}",
            selector.name(),
            mv.notation
        );
        println!("{}", game.board());

        if game.is_game_over() {
            break;
        }
        thread::sleep(Duration::from_millis(config.ai_delay_ms));
    }

    let status = game.status();
    tracing::info!(
        moves = game.history().len(),
        status = status.as_str(),
        "game finished"
    );
    match status {
        minichess::GameStatus::Checkmate => {
            // The side to move is the one that got mated.
            println!("Checkmate. {} wins.", !game.side_to_move());
        }
        minichess::GameStatus::Stalemate => println!("Stalemate. Draw."),
        _ => println!("Game stopped after {} moves ({}).", game.history().len(), status),
    }
}
