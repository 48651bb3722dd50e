use std::marker::PhantomData;
use std::sync::{Arc, Mutex, OnceLock};
use tracing::Level;
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn";

/// Structured log entry captured for tests
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: Level,
    pub target: String,
    pub message: String,
    pub fields: Vec<(String, String)>,
}

impl LogEntry {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Collects log entries so tests can assert on what the engine emitted
#[derive(Debug, Clone, Default)]
pub struct TestLogSubscriber {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl TestLogSubscriber {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.entries.lock() {
            guard.clear();
        }
    }

    pub fn into_layer<S>(self) -> TestLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        TestLayer {
            subscriber: self,
            _phantom: PhantomData,
        }
    }
}

pub struct TestLayer<S> {
    subscriber: TestLogSubscriber,
    _phantom: PhantomData<S>,
}

impl<S> Layer<S> for TestLayer<S>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut visitor = FieldVisitor::default();
        event.record(&mut visitor);

        let entry = LogEntry {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: visitor.message.unwrap_or_default(),
            fields: visitor.fields,
        };

        if let Ok(mut guard) = self.subscriber.entries.lock() {
            guard.push(entry);
        }
    }
}

#[derive(Default)]
struct FieldVisitor {
    message: Option<String>,
    fields: Vec<(String, String)>,
}

impl tracing::field::Visit for FieldVisitor {
    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        let value_str = format!("{:?}", value);
        if field.name() == "message" {
            self.message = Some(value_str);
        } else {
            self.fields.push((field.name().to_string(), value_str));
        }
    }
}

/// Installs the stderr subscriber. Safe to call more than once; only the
/// first call has any effect, and an already-installed global subscriber is
/// left in place.
pub fn init_logging() {
    static INSTALLED: OnceLock<()> = OnceLock::new();

    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use racing_suits_engine::replay::GhostPayload;
    use racing_suits_engine::session::SessionState;
    use racing_suits_engine::suits::Suit;
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::SubscriberExt;

    fn capture<F: FnOnce()>(f: F) -> Vec<LogEntry> {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, f);
        subscriber.entries()
    }

    #[test]
    fn version_mismatch_is_logged_as_warning() {
        let entries = capture(|| {
            let payload = r#"{"schemaVersion":2,"replayId":"x","seed":"s","config":{}}"#;
            assert!(GhostPayload::from_json(payload).is_err());
        });
        let warning = entries
            .iter()
            .find(|e| e.level == Level::WARN)
            .expect("warning captured");
        assert_eq!(warning.field("found"), Some("2"));
        assert!(warning.target.starts_with("racing_suits_engine"));
    }

    #[test]
    fn settlement_and_refill_are_logged() {
        let entries = capture(|| {
            let mut session = SessionState::new();
            session.select_competitor(Suit::Hearts);
            session.set_ante(200);
            session.settle_race(Suit::Clubs).unwrap();
        });
        let messages: Vec<&str> = entries
            .iter()
            .filter(|e| e.level == Level::INFO)
            .map(|e| e.message.as_str())
            .collect();
        assert!(messages.iter().any(|m| m.contains("refilled")));
        assert!(messages.iter().any(|m| m.contains("race settled")));
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
    }

    #[test]
    fn clear_drops_entries() {
        let subscriber = TestLogSubscriber::new();
        let registry = Registry::default().with(subscriber.clone().into_layer::<Registry>());
        tracing::subscriber::with_default(registry, || tracing::info!("hello"));
        assert_eq!(subscriber.entries().len(), 1);
        assert_eq!(subscriber.entries()[0].message, "hello");
        subscriber.clear();
        assert!(subscriber.entries().is_empty());
    }
}
