//! End-to-end episode scenarios.

use tl_automaton::automaton::{Automaton, AutomatonError, StateSpec, StepResult};
use tl_automaton::builder::sequence_task;
use tl_automaton::core::{StateId, StateRole};
use tl_automaton::definition::AutomatonDefinition;
use tl_automaton::events;
use tl_automaton::lint::LintRules;

fn double_goal() -> Automaton {
    let mut automaton = Automaton::new();
    automaton
        .add_states(vec![
            StateSpec::tagged("q0", "init"),
            StateSpec::untagged("q1"),
            StateSpec::tagged("q2", "final"),
        ])
        .unwrap();
    automaton.add_transitions([("q0", "q1", "g1"), ("q1", "q2", "g2")]);
    automaton
}

#[test]
fn ordered_goals_reach_final_state() {
    let mut automaton = double_goal();

    let outcome = automaton.step(&events! { "g1" => true, "g2" => false }).unwrap();
    assert_eq!(outcome.current, StateId::from("q1"));
    assert!(!automaton.in_final());

    let outcome = automaton.step(&events! { "g1" => false, "g2" => true }).unwrap();
    assert_eq!(outcome.current, StateId::from("q2"));
    assert!(automaton.in_final());

    for events in [
        events! { "g1" => true },
        events! { "g2" => true },
        events! { "g1" => false, "g2" => false },
    ] {
        let outcome = automaton.step(&events).unwrap();
        assert_eq!(outcome.current, StateId::from("q2"));
    }
    assert_eq!(automaton.current_state(), Some(&StateId::from("q2")));
}

#[test]
fn simultaneous_goals_are_rejected() {
    let mut automaton = double_goal();

    let err = automaton
        .step(&events! { "g1" => true, "g2" => true })
        .unwrap_err();

    assert!(matches!(err, AutomatonError::AmbiguousInput { .. }));
    assert_eq!(automaton.current_state(), Some(&StateId::from("q0")));
}

#[test]
fn goal_with_unrelated_event_is_rejected() {
    let mut automaton = double_goal();

    let err = automaton
        .step(&events! { "g1" => true, "crashed" => true })
        .unwrap_err();

    assert_eq!(
        err,
        AutomatonError::AmbiguousInput {
            active: vec!["crashed".to_string(), "g1".to_string()]
        }
    );
    assert_eq!(automaton.current_state(), Some(&StateId::from("q0")));

    let outcome = automaton.step(&events! { "crashed" => true }).unwrap();
    assert_eq!(
        outcome.result,
        StepResult::Ignored {
            symbol: "crashed".to_string()
        }
    );
    assert_eq!(outcome.current, StateId::from("q0"));
}

#[test]
fn unknown_role_is_rejected() {
    let mut automaton = Automaton::new();
    let err = automaton.add_state_tagged(3, "normal").unwrap_err();

    assert_eq!(
        err,
        AutomatonError::InvalidRole {
            role: "normal".to_string()
        }
    );
}

#[test]
fn stepping_before_initial_designation_fails_until_fixed() {
    let mut automaton = Automaton::new();
    automaton.add_transitions([("q0", "q1", "g1")]);

    assert_eq!(
        automaton.step(&events! { "g1" => true }),
        Err(AutomatonError::NoCurrentState)
    );

    automaton.add_state("q0", StateRole::Initial);
    let outcome = automaton.step(&events! { "g1" => true }).unwrap();
    assert_eq!(outcome.current, StateId::from("q1"));
}

#[test]
fn episode_loop_with_reset() {
    let mut automaton = sequence_task(["g1", "g2"]).unwrap();
    assert!(LintRules::standard().check(&automaton).is_success());

    // goal 2 first does nothing, then the right order completes the task
    let signals = [
        events! { "g2" => true },
        events! {},
        events! { "g1" => true },
        events! { "g2" => true },
    ];
    let outcomes: Vec<_> = signals
        .iter()
        .map(|events| automaton.step(events).unwrap())
        .collect();

    assert!(matches!(outcomes[0].result, StepResult::Ignored { .. }));
    assert_eq!(outcomes[1].result, StepResult::Idle);
    assert!(outcomes[2].transitioned());
    assert!(outcomes[3].accepting);
    assert_eq!(automaton.history().symbols(), vec!["g1", "g2"]);

    automaton.reset();
    assert_eq!(automaton.current_state(), Some(&StateId::from("q0")));
    assert!(!automaton.in_final());
}

#[test]
fn definition_roundtrip_preserves_behavior() {
    let json = double_goal().definition().to_json().unwrap();
    let mut rebuilt = AutomatonDefinition::from_json(&json)
        .unwrap()
        .build()
        .unwrap();

    rebuilt.step(&events! { "g1" => true }).unwrap();
    rebuilt.step(&events! { "g2" => true }).unwrap();
    assert!(rebuilt.in_final());
}
