//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjround::{
    Card, Game, GameOptions, GameState, Hand, History, RECENT_RESULTS_LIMIT, SaveFile, Suit,
    Winner,
};

fn main() {
    println!("Blackjack CLI example (type 'q' to quit)");

    let options = GameOptions::default().with_player_name("Player");
    let mut game = Game::new(options, seed());
    let save = SaveFile::default_location();

    if let Err(err) = game.start_round() {
        println!("Deal error: {err}");
    }

    loop {
        print_table(&game);

        match prompt_line(&format_actions(&game)).as_str() {
            "h" | "hit" => {
                if let Err(err) = game.hit() {
                    println!("Action error: {err}");
                }
            }
            "s" | "stand" => match game.stand() {
                Ok(drawn) if !drawn.is_empty() => {
                    println!("Dealer draws {} card(s).", drawn.len());
                }
                Ok(_) => {}
                Err(err) => println!("Dealer error: {err}"),
            },
            "n" | "new" => {
                if let Err(err) = game.start_round() {
                    println!("Deal error: {err}");
                }
            }
            input @ ("1" | "2") => {
                game.set_deck_count(input.parse().unwrap_or(1));
                println!("Next round uses {} deck(s).", game.deck_count());
            }
            "w" | "save" => match save.save(&game) {
                Ok(()) => println!("Saved to {}.", save.path().display()),
                Err(err) => println!("Error saving: {err}"),
            },
            "l" | "load" => match save.load_into(&mut game, seed()) {
                Ok(()) => println!("Game loaded!"),
                Err(err) => println!("Error loading: {err}"),
            },
            "t" | "stats" => print_statistics(game.history()),
            "q" | "quit" => return,
            _ => println!("Unknown action."),
        }
    }
}

fn seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn print_table(game: &Game) {
    let remaining = game.cards_remaining();
    println!(
        "\nShoe: {remaining} cards remaining ({} deck(s) next round)",
        game.deck_count()
    );

    let dealer = game.dealer_hand();
    if game.is_over() {
        println!(
            "\nDealer: {} (value {})",
            format_hand(dealer),
            game.dealer_score()
        );
    } else {
        println!("\nDealer: {}", format_dealer_hidden(dealer));
    }

    println!(
        "{}: {} (value {})",
        game.player().name(),
        format_hand(game.player_hand()),
        game.player_score()
    );

    if game.state() != GameState::WaitingForRound {
        println!("{}", game.result_text());
    }
    println!();
}

fn format_actions(game: &Game) -> String {
    let playing = game.is_player_turn();
    let parts = [
        format_action("hit", "h", playing),
        format_action("stand", "s", playing),
        format_action("new round", "n", !playing),
        format_action("decks", "1/2", true),
        format_action("save", "w", true),
        format_action("load", "l", true),
        format_action("stats", "t", !game.history().is_empty()),
        format_action("quit", "q", true),
    ];
    format!("Actions: {}\nAction: ", parts.join(" "))
}

fn format_action(label: &str, key: &str, allowed: bool) -> String {
    let text = format!("[{key}]{label}");
    if allowed {
        colorize(&text, "32")
    } else {
        colorize(&text, "90")
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn print_statistics(history: &History) {
    if history.is_empty() {
        println!("Play at least one round to see statistics.");
        return;
    }

    println!("\nLast {RECENT_RESULTS_LIMIT} rounds statistics");
    for (index, result) in history.recent(RECENT_RESULTS_LIMIT).iter().enumerate() {
        let code = match result.winner() {
            Winner::Player => "32",
            Winner::Dealer => "31",
            Winner::Tie => "33",
        };
        let line = format!(
            "Round {}: {} | Player: {} ({} cards) | Dealer: {} ({} cards)",
            index + 1,
            result.winner(),
            result.player_score,
            result.player_hand.len(),
            result.dealer_score,
            result.dealer_hand.len()
        );
        println!("{}", colorize(&line, code));
        println!(
            "    {} vs {}",
            result.player_hand.join(", "),
            result.dealer_hand.join(", ")
        );
    }

    let summary = history.summary();
    println!(
        "Total: {} rounds, {} won, {} lost, {} tied\n",
        summary.rounds, summary.player_wins, summary.dealer_wins, summary.ties
    );
}

fn format_dealer_hidden(dealer: &Hand) -> String {
    let mut parts = Vec::new();
    if let Some(card) = dealer.cards().first() {
        parts.push(format_card(card));
    }
    if dealer.len() > 1 {
        parts.push("??".to_string());
    }
    if parts.is_empty() {
        return "(no cards)".to_string();
    }
    parts.join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
