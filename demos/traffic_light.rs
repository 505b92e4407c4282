//! Traffic Light
//!
//! This example exercises the public API on a simple cyclic table:
//! - Checking a single transition on its own
//! - Dispatching through a registry
//! - Exporting the table as DOT
//!
//! Run with: cargo run --example traffic_light
//! Set RUST_LOG=edgecheck=trace to see dispatch logging.

use edgecheck::dot::{self, ExportOptions, RankDir};
use edgecheck::{states, Callback, CallbackError, Registry, State, Transition, TransitionConfig};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn announce(_: &Transition, from: &State, to: &State) -> Result<(), CallbackError> {
    println!("Changing '{from}' to '{to}'");
    Ok(())
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edgecheck=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let red = State::new("red");
    let green = State::new("green");
    let yellow = State::new("yellow");

    let announce: Callback = Arc::new(announce);
    let announcing = TransitionConfig::new().with_shared_callback(announce);

    let go_green = Transition::new(states![red.clone()], green.clone())
        .with_name("Go")
        .configure(announcing.clone());
    let go_yellow = Transition::new(states![green.clone()], yellow.clone())
        .with_name("Slow Down")
        .configure(announcing.clone());
    let go_red = Transition::new(states![yellow.clone()], red.clone())
        .with_name("Stop")
        .configure(announcing);

    println!("=== Single transitions ===");
    for (transition, from) in [(&go_green, &red), (&go_yellow, &green), (&go_red, &yellow)] {
        if let Err(err) = transition.transition_from(from) {
            println!("Error: {err}");
        }
    }
    if let Err(err) = go_green.transition_from(&yellow) {
        println!("Error: {err}");
    }

    println!("\n=== Registry ===");
    let table = vec![go_green, go_yellow, go_red];
    let registry = Registry::new(table.clone());
    for (from, to) in [(&red, &green), (&red, &yellow)] {
        if let Err(err) = registry.handle(from, to) {
            println!("Error: {err}");
        }
    }

    println!("\n=== DOT ===");
    let options = ExportOptions::new()
        .with_graph_name("traffic_light")
        .with_rankdir(RankDir::LeftToRight);
    print!("{}", dot::export_with(&table, &options));
}
