//! Record identity generation.

use chrono::Utc;

/// Issues record ids derived from the wall clock in Unix milliseconds.
///
/// Two records created within the same millisecond would share a timestamp,
/// so an id is never lower than one past the previous id.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    fn next_at(&mut self, now_millis: i64) -> String {
        self.last = now_millis.max(self.last + 1);
        self.last.to_string()
    }
}
