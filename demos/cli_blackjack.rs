//! CLI blackjack example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use twentyone::{Game, GameOptions, Hand, PlayerOutcome, RoundPhase};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default();
    let mut game = Game::new(options, seed);
    let player_id = game.players()[0].id();

    loop {
        if let Err(err) = game.new_round() {
            println!("Deal error: {err}");
            break;
        }

        while game.phase() == RoundPhase::Acting {
            print_table(&game, player_id);

            match prompt_line("Action (h = hit, s = stand, q = quit): ").as_str() {
                "h" | "hit" => match game.hit(player_id) {
                    Ok(Some(card)) => println!("You draw the {card}."),
                    Ok(None) => println!("You are already standing."),
                    Err(err) => {
                        println!("Action error: {err}");
                        return;
                    }
                },
                "s" | "stand" => {
                    if let Err(err) = game.stand(player_id) {
                        println!("Action error: {err}");
                        return;
                    }
                }
                "q" | "quit" => return,
                _ => println!("Unknown action."),
            }
        }

        print_table(&game, player_id);
        print_result(&game, player_id);

        match prompt_line("New round? (y/n): ").as_str() {
            "y" | "yes" => {}
            _ => break,
        }
    }

    println!("Goodbye.");
}

fn print_table(game: &Game, player_id: u8) {
    println!();
    print_hand("Dealer", game.dealer());
    if let Some(player) = game.player(player_id) {
        print_hand("You", &player.hand);
    }
}

fn print_hand(owner: &str, hand: &Hand) {
    if hand.is_revealed() {
        let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
        let score = hand
            .score()
            .map_or_else(|_| "?".to_string(), |s| s.to_string());
        println!("{owner}: {} (score {score})", cards.join(", "));
    } else {
        let hidden = vec!["?"; hand.len()];
        println!("{owner}: {} (score ?)", hidden.join(", "));
    }
}

fn print_result(game: &Game, player_id: u8) {
    let Some(result) = game.round_result() else {
        return;
    };

    if result.dealer_bust {
        println!("Dealer busts at {}.", result.dealer_score);
    } else {
        println!("Dealer stands at {}.", result.dealer_score);
    }

    for player in &result.players {
        if player.player_id != player_id {
            continue;
        }
        match player.outcome {
            PlayerOutcome::Won => println!("You win! ({} wins total)", player.wins),
            PlayerOutcome::Lost => println!("Dealer wins."),
            PlayerOutcome::Busted => println!("You bust at {}.", player.score),
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return "q".to_string();
    }
    line.trim().to_lowercase()
}
