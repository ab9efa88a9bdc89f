//! Warning sinks. Builders report recoverable input problems here and never
//! look at the result.

use crate::error::{Warning, WarningCode};

pub trait WarningSink {
    fn warn(&mut self, warning: Warning);
}

impl<F: FnMut(Warning)> WarningSink for F {
    fn warn(&mut self, warning: Warning) { self(warning) }
}

/// Forwards warnings to `tracing` at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(code = warning.code.as_str(), "{}", warning.message);
    }
}

/// Keeps every warning in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    pub warnings: Vec<Warning>,
}

impl CollectingSink {
    pub fn len(&self) -> usize { self.warnings.len() }

    pub fn is_empty(&self) -> bool { self.warnings.is_empty() }

    pub fn codes(&self) -> Vec<WarningCode> {
        self.warnings.iter().map(|w| w.code).collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(|w| w.message.as_str()).collect()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&mut self, warning: Warning) { self.warnings.push(warning); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
    use tracing_subscriber::Registry;

    fn emit(sink: &mut dyn WarningSink) {
        sink.warn(Warning::new(WarningCode::W001, "first"));
        sink.warn(Warning::new(WarningCode::W002, "second"));
    }

    #[test]
    fn collecting_sink_keeps_order() {
        let mut sink = CollectingSink::default();
        emit(&mut sink);
        assert_eq!(sink.codes(), [WarningCode::W001, WarningCode::W002]);
        assert_eq!(sink.messages(), ["first", "second"]);
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        emit(&mut |w: Warning| seen.push(w.to_string()));
        assert_eq!(seen, ["[W001] first", "[W002] second"]);
    }

    // ─── TracingSink ─────────────────────────────────────────────────────────

    type Events = Arc<Mutex<Vec<(Level, Option<String>)>>>;

    struct Recorder(Events);

    impl<S: Subscriber> Layer<S> for Recorder {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut code = CodeField(None);
            event.record(&mut code);
            if let Ok(mut events) = self.0.lock() {
                events.push((*event.metadata().level(), code.0));
            }
        }
    }

    struct CodeField(Option<String>);

    impl Visit for CodeField {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "code" {
                self.0 = Some(value.to_string());
            }
        }

        fn record_debug(&mut self, _field: &Field, _value: &dyn std::fmt::Debug) {}
    }

    #[test]
    fn tracing_sink_emits_one_warn_event_per_warning() {
        let events = Events::default();
        let subscriber = Registry::default().with(Recorder(events.clone()));
        tracing::subscriber::with_default(subscriber, || emit(&mut TracingSink));

        let events = events.lock().expect("recorder lock poisoned").clone();
        assert_eq!(events, [
            (Level::WARN, Some("W001".to_string())),
            (Level::WARN, Some("W002".to_string())),
        ]);
    }
}
