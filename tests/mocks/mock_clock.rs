use contact_book::Clock;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Clock that moves forward by one second on every reading.
#[derive(Clone, Default)]
pub struct SteppingClock {
    seconds: Arc<AtomicU32>,
}

impl SteppingClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> String {
        let s = self.seconds.fetch_add(1, Ordering::SeqCst);
        format!(
            "2024-01-01T{:02}:{:02}:{:02}.000000",
            s / 3600,
            (s / 60) % 60,
            s % 60
        )
    }
}
