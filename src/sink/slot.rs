use super::{LogSink, SinkRegistry, TracingSink};
use crate::domain::{Level, LogValue};
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

static GLOBAL_SLOT: LazyLock<SinkSlot> = LazyLock::new(|| SinkSlot::new(Arc::new(TracingSink)));

/// Registry holding the active sink behind a read-write lock.
///
/// Logging through the slot itself delegates to whatever sink is installed at
/// call time.
pub struct SinkSlot {
    active: RwLock<Arc<dyn LogSink>>,
}

impl SinkSlot {
    pub fn new(initial: Arc<dyn LogSink>) -> Self {
        Self {
            active: RwLock::new(initial),
        }
    }

    /// Process-wide slot, initially holding a `TracingSink`.
    pub fn global() -> &'static SinkSlot {
        &GLOBAL_SLOT
    }
}

impl SinkRegistry for SinkSlot {
    fn current(&self) -> Arc<dyn LogSink> {
        self.active.read().clone()
    }

    fn install(&self, sink: Arc<dyn LogSink>) {
        *self.active.write() = sink;
    }
}

impl LogSink for SinkSlot {
    fn log(&self, value: &LogValue, level: &Level) {
        // Release the lock before logging so a sink may re-enter the registry.
        let sink = self.current();
        sink.log(value, level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::thread;

    #[derive(Default)]
    struct Recording {
        entries: Mutex<Vec<(LogValue, Level)>>,
    }

    impl LogSink for Recording {
        fn log(&self, value: &LogValue, level: &Level) {
            self.entries.lock().push((value.clone(), level.clone()));
        }
    }

    #[test]
    fn test_slot_delegates_to_current_sink() {
        let first = Arc::new(Recording::default());
        let slot = SinkSlot::new(first.clone());

        slot.log(&LogValue::from("hello"), &Level::Debug);

        let entries = first.entries.lock();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0], (LogValue::from("hello"), Level::Debug));
    }

    #[test]
    fn test_install_replaces_active_sink() {
        let first = Arc::new(Recording::default());
        let second = Arc::new(Recording::default());
        let slot = SinkSlot::new(first.clone());

        slot.install(second.clone());
        slot.log_info(&LogValue::from("after install"));

        assert!(first.entries.lock().is_empty());
        assert_eq!(
            second.entries.lock()[0],
            (LogValue::from("after install"), Level::Info)
        );
    }

    #[test]
    fn test_concurrent_logging_through_slot() {
        let sink = Arc::new(Recording::default());
        let slot = Arc::new(SinkSlot::new(sink.clone()));

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let slot = slot.clone();
                thread::spawn(move || {
                    slot.log(&LogValue::from(format!("entry {i}")), &Level::Info);
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().is_ok());
        }

        assert_eq!(sink.entries.lock().len(), 50);
    }

    #[test]
    fn test_global_slot_is_shared() {
        let a = SinkSlot::global() as *const SinkSlot;
        let b = SinkSlot::global() as *const SinkSlot;
        assert_eq!(a, b);
    }
}
