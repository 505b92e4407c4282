use edgecheck::builder::simple_transition;
use edgecheck::{states, Registry, State, Transition, TransitionBuilder, TransitionConfig};
use std::sync::{Arc, Mutex};

const RED: &str = "red";
const GREEN: &str = "green";
const YELLOW: &str = "yellow";

fn traffic_light() -> Registry {
    Registry::new(vec![
        simple_transition(RED, GREEN),
        simple_transition(GREEN, YELLOW),
        simple_transition(YELLOW, RED),
    ])
}

#[test]
fn traffic_light_rejects_skipping_yellow() {
    let registry = traffic_light();

    let err = registry
        .handle(&State::new(GREEN), &State::new(RED))
        .unwrap_err();
    assert_eq!(err.to_string(), r#""Green" -> "Red" is not a valid transition"#);

    assert!(registry
        .handle(&State::new(GREEN), &State::new(YELLOW))
        .is_ok());
}

#[test]
fn callbacks_log_each_dispatch_in_order() {
    let log = Arc::new(Mutex::new(Vec::new()));

    let transitions: Vec<Transition> = [(RED, GREEN), (GREEN, YELLOW), (YELLOW, RED)]
        .into_iter()
        .map(|(from, to)| {
            let log = Arc::clone(&log);
            TransitionBuilder::new()
                .from(states![from])
                .to(to)
                .callback(move |_, from, to| {
                    log.lock().unwrap().push(format!("{from} -> {to}"));
                    Ok(())
                })
                .build()
                .unwrap()
        })
        .collect();
    let registry = Registry::new(transitions);

    for (from, to) in [(RED, GREEN), (GREEN, YELLOW), (YELLOW, RED)] {
        registry.handle(&State::new(from), &State::new(to)).unwrap();
    }
    assert!(registry
        .handle(&State::new(RED), &State::new(YELLOW))
        .unwrap_err()
        .is_invalid());

    assert_eq!(
        *log.lock().unwrap(),
        vec!["Red -> Green", "Green -> Yellow", "Yellow -> Red"]
    );
}

#[test]
fn call_time_override_sees_the_matched_transition() {
    let registry = Registry::new(vec![
        Transition::new(states![RED], GREEN).with_name("Go"),
    ]);
    let seen = Arc::new(Mutex::new(String::new()));
    let sink = Arc::clone(&seen);
    let config = TransitionConfig::new().with_callback(move |t, _, _| {
        *sink.lock().unwrap() = t.name().to_string();
        Ok(())
    });

    registry
        .handle_with(&State::new(RED), &State::new(GREEN), &config)
        .unwrap();
    assert_eq!(*seen.lock().unwrap(), "Go");
}

#[test]
fn callback_failure_is_the_dispatch_result() {
    let registry = Registry::new(vec![Transition::new(states![RED], GREEN)
        .with_callback(|_, _, _| Err(std::io::Error::other("bulb burnt out").into()))]);

    let err = registry
        .handle(&State::new(RED), &State::new(GREEN))
        .unwrap_err();
    assert!(!err.is_invalid());
    assert_eq!(err.to_string(), "bulb burnt out");

    let inner = err.into_callback_error().unwrap();
    assert!(inner.downcast_ref::<std::io::Error>().is_some());
}

#[test]
fn registry_is_usable_from_many_threads() {
    let registry = Arc::new(traffic_light());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                registry
                    .handle(&State::new(YELLOW), &State::new(RED))
                    .is_ok()
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
