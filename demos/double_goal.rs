//! Double Goal Task
//!
//! A vehicle must reach goal 1 and then goal 2. The simulation is reduced to
//! a scripted list of per-tick goal hits; the automaton tracks task progress
//! and drives termination.
//!
//! Key concepts:
//! - Building the task automaton once per episode
//! - Feeding one event snapshot per tick
//! - Reading the step outcome for reward and termination
//! - Exporting the graph for rendering
//!
//! Run with: cargo run --example double_goal

use tl_automaton::builder::sequence_task;
use tl_automaton::export::{to_dot, write_default};
use tl_automaton::lint::LintRules;
use tl_automaton::logging::init_logging;
use tl_automaton::{events, StepResult};

const TASK_COMPLETION_REWARD: f64 = 10.0;

fn main() {
    init_logging();
    println!("=== Double Goal Task ===\n");

    let mut automaton = sequence_task(["g1", "g2"]).expect("two goals build a valid task");
    if LintRules::standard().check(&automaton).is_failure() {
        eprintln!("Task automaton failed lint");
        return;
    }

    // (goal 1 hit, goal 2 hit) per tick
    let hits = [
        (false, false),
        (false, true),
        (true, false),
        (false, false),
        (false, true),
        (false, false),
    ];

    for (g1, g2) in hits {
        let outcome = match automaton.step(&events! { "g1" => g1, "g2" => g2 }) {
            Ok(outcome) => outcome,
            Err(err) => {
                eprintln!("Episode aborted: {err}");
                return;
            }
        };

        let reward = if outcome.accepting {
            TASK_COMPLETION_REWARD
        } else {
            0.0
        };
        let note = match &outcome.result {
            StepResult::Idle => "no event".to_string(),
            StepResult::Ignored { symbol } => format!("{symbol} ignored"),
            StepResult::Transitioned { symbol, to } => format!("{symbol} -> {to}"),
        };
        println!(
            "tick {:>2}: {} -> {} ({note}), reward {reward}",
            outcome.tick, outcome.previous, outcome.current
        );

        if outcome.accepting {
            println!("\nTask complete after {} ticks", outcome.tick);
            break;
        }
    }

    println!("\nAutomaton diagram:\n{}", to_dot(&automaton));
    match write_default(&automaton) {
        Ok(path) => println!("Diagram written to {}", path.display()),
        Err(err) => eprintln!("{err}"),
    }
    println!("=== Example Complete ===");
}
