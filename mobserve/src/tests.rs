use std::sync::{Arc, Mutex};
use std::time::Duration;

use mtransport::{ApiError, SessionHooks};

use crate::{FanoutSessionHooks, MetricsSessionHooks, SafeSessionHooks, TracingSessionHooks};

fn exercise(hooks: &dyn SessionHooks) {
    let retry_error = ApiError::from_status(503, "service unavailable");
    let final_error = ApiError::timeout("request timed out");

    hooks.on_attempt_start("search_memories", 1);
    hooks.on_retry_scheduled(
        "search_memories",
        1,
        Duration::from_millis(10),
        &retry_error,
    );
    hooks.on_success("search_memories", 2);
    hooks.on_failure("get_memory", 4, &final_error);
}

#[test]
fn tracing_hooks_smoke_test_all_callbacks() {
    exercise(&TracingSessionHooks);
}

#[test]
fn metrics_hooks_smoke_test_all_callbacks() {
    exercise(&MetricsSessionHooks);
}

#[test]
fn init_logging_is_idempotent() {
    crate::init_logging();
    assert!(!crate::init_logging());
}

#[derive(Default, Clone)]
struct RecordingSessionHooks {
    events: Arc<Mutex<Vec<&'static str>>>,
}

impl SessionHooks for RecordingSessionHooks {
    fn on_attempt_start(&self, _operation: &str, _attempt: u32) {
        self.events
            .lock()
            .expect("events lock")
            .push("attempt_start");
    }

    fn on_retry_scheduled(
        &self,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &ApiError,
    ) {
        self.events
            .lock()
            .expect("events lock")
            .push("retry_scheduled");
    }

    fn on_success(&self, _operation: &str, _attempts: u32) {
        self.events.lock().expect("events lock").push("success");
    }

    fn on_failure(&self, _operation: &str, _attempts: u32, _error: &ApiError) {
        self.events.lock().expect("events lock").push("failure");
    }
}

struct PanicSessionHooks;

impl SessionHooks for PanicSessionHooks {
    fn on_attempt_start(&self, _operation: &str, _attempt: u32) {
        panic!("attempt_start panic");
    }

    fn on_retry_scheduled(
        &self,
        _operation: &str,
        _attempt: u32,
        _delay: Duration,
        _error: &ApiError,
    ) {
        panic!("retry_scheduled panic");
    }

    fn on_success(&self, _operation: &str, _attempts: u32) {
        panic!("success panic");
    }

    fn on_failure(&self, _operation: &str, _attempts: u32, _error: &ApiError) {
        panic!("failure panic");
    }
}

#[test]
fn safe_session_hooks_delegate_when_inner_succeeds() {
    let inner = RecordingSessionHooks::default();
    let events = Arc::clone(&inner.events);
    let hooks = SafeSessionHooks::new(inner);

    exercise(&hooks);

    assert_eq!(
        *events.lock().expect("events lock"),
        vec!["attempt_start", "retry_scheduled", "success", "failure"]
    );
}

#[test]
fn safe_session_hooks_swallow_panics() {
    let hooks = SafeSessionHooks::new(PanicSessionHooks);
    exercise(&hooks);
}

#[test]
fn fanout_forwards_to_every_hook_in_order() {
    let first = RecordingSessionHooks::default();
    let second = RecordingSessionHooks::default();
    let first_events = Arc::clone(&first.events);
    let second_events = Arc::clone(&second.events);

    let hooks = FanoutSessionHooks::new()
        .with(Arc::new(first))
        .with(Arc::new(SafeSessionHooks::new(PanicSessionHooks)))
        .with(Arc::new(second));
    assert_eq!(hooks.len(), 3);

    exercise(&hooks);

    assert_eq!(first_events.lock().expect("events lock").len(), 4);
    assert_eq!(second_events.lock().expect("events lock").len(), 4);
}
