//! Social Feed
//!
//! Walks a user through a Regular -> Premium switch and shows what happens
//! to content and subscribers.
//!
//! Key concepts:
//! - The active state decides the content transform
//! - Subscribers live on the state, so a switch drops them
//! - Unsubscribing someone who is not subscribed is an error
//!
//! Run with: RUST_LOG=debug cargo run --example social_feed

use std::sync::Arc;
use tierfeed::core::{ConsoleSubscriber, UserState};
use tierfeed::{FeedError, User};

fn main() -> Result<(), FeedError> {
    env_logger::init();

    println!("=== Social Feed Example ===\n");

    let mut alice = User::new("Alice", UserState::regular());
    let bob = Arc::new(ConsoleSubscriber::new("Bob"));
    alice.subscribe(bob.clone());

    println!("{}", alice.post("Hello World"));
    println!("{}", alice.comment("Nice post!"));

    println!("\n--- Alice switches to Premium ---\n");
    alice.set_state(UserState::premium());

    // Bob was registered on the Regular state and is gone now.
    println!("{}", alice.post("Hello World"));

    alice.subscribe(bob.clone());
    println!("{}", alice.comment("Nice post!"));

    alice.unsubscribe(&bob)?;
    println!("{}", alice.post("Another post"));

    match alice.unsubscribe(&bob) {
        Ok(()) => println!("unexpected: Bob was still subscribed"),
        Err(e) => println!("\n{}", e),
    }

    println!(
        "\nTier path: {:?}, subscribers dropped by switches: {}",
        alice.history().get_path(),
        alice.history().total_dropped()
    );

    println!("\n=== Example Complete ===");
    Ok(())
}
