//! Keyboard Session
//!
//! Drives a calculator from standard input, one line at a time, the way a
//! keyboard front end would.
//!
//! Key concepts:
//! - Key names map to inputs (`Enter`, `Escape`, digits, operators)
//! - The readout is re-rendered after every line
//! - The tape records what each key did
//!
//! Run with: echo "5+3 Enter" | RUST_LOG=tally=debug cargo run --example keyboard_session

use std::io::{self, BufRead};
use tally::builder::CalculatorBuilder;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_writer(io::stderr)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() {
    init_logging();

    let mut calculator = CalculatorBuilder::new()
        .tape_capacity(64)
        .build()
        .expect("tape capacity is non-zero");

    println!("=== Keyboard Session ===\n");
    println!("Type keys (e.g. `12.5*4 Enter`, `9 r`, `Escape`). Ctrl-D to quit.\n");

    for line in io::stdin().lock().lines() {
        let Ok(line) = line else { break };

        for token in line.split_whitespace() {
            // Whole-token key names first ("Enter", "Escape"), then per character.
            if calculator.press_key(token).is_none() {
                calculator.type_keys(token);
            }
        }

        let readout = calculator.readout();
        println!("{:>24}", readout.history_text);
        println!("{:>24}\n", readout.value_text);
    }

    let tape = calculator.tape();
    println!("Recorded {} inputs, {} failed", tape.len(), tape.failures().count());
    if let Some(duration) = tape.duration() {
        println!("Session length: {duration:?}");
    }

    println!("\n=== Session Complete ===");
}
