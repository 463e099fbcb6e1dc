//! Demo reading room.
//!
//! Static fixture readers plus a short activity feed. A renderer draws
//! from [`ReadingRoom`]; nothing here talks to a server.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Activity entries kept, newest first.
pub const ACTIVITY_CAPACITY: usize = 5;

pub const JOIN_MESSAGES: [&str; 3] = [
    "joined the reading room",
    "started reading",
    "sat down to read",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    pub id: String,
    pub name: String,
    pub book: String,
    pub minutes_read: u32,
    /// Minutes between sitting down and the room opening. Fixed.
    pub joined_ago_min: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub name: String,
    pub message: String,
    pub at: DateTime<Utc>,
}

pub fn fixture_readers() -> Vec<Reader> {
    let reader = |id: &str, name: &str, book: &str, minutes_read, joined_ago_min| Reader {
        id: id.into(),
        name: name.into(),
        book: book.into(),
        minutes_read,
        joined_ago_min,
    };
    vec![
        reader("1", "Miso", "Atomic Habits", 23, 12),
        reader("2", "Haru", "Deep Work", 45, 30),
        reader("3", "Yuna", "The Alchemist", 8, 3),
    ]
}

#[derive(Debug, Clone, Serialize)]
pub struct ReadingRoom {
    readers: Vec<Reader>,
    activities: Vec<Activity>,
    #[serde(skip)]
    waiting: Vec<Reader>,
}

impl ReadingRoom {
    /// Seats the first two fixture readers; the third waits to join.
    pub fn new() -> Self {
        let mut waiting = fixture_readers();
        let readers = waiting.drain(..2).collect();
        Self {
            readers,
            activities: Vec::new(),
            waiting,
        }
    }

    pub fn readers(&self) -> &[Reader] {
        &self.readers
    }

    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Seat the next waiting reader and announce it. `None` once full.
    pub fn admit_next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&Reader> {
        if self.waiting.is_empty() {
            return None;
        }
        let reader = self.waiting.remove(0);
        let message = JOIN_MESSAGES.choose(rng).copied().unwrap_or(JOIN_MESSAGES[0]);
        self.post(&reader.name, message);
        self.readers.push(reader);
        self.readers.last()
    }

    pub fn post(&mut self, name: &str, message: &str) {
        self.activities.insert(
            0,
            Activity {
                id: Uuid::new_v4(),
                name: name.to_string(),
                message: message.to_string(),
                at: Utc::now(),
            },
        );
        self.activities.truncate(ACTIVITY_CAPACITY);
    }

    /// One simulated minute: everyone seated reads a little more.
    pub fn advance_minute(&mut self) {
        for reader in &mut self.readers {
            reader.minutes_read += 1;
        }
    }
}

impl Default for ReadingRoom {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn starts_with_two_readers() {
        let room = ReadingRoom::new();
        assert_eq!(room.reader_count(), 2);
        assert_eq!(room.readers()[0].name, "Miso");
        assert!(room.activities().is_empty());
    }

    #[test]
    fn admits_third_reader_once() {
        let mut room = ReadingRoom::new();
        let mut rng = StepRng::new(0, 1);
        let joined = room.admit_next(&mut rng).map(|r| r.name.clone());
        assert_eq!(joined.as_deref(), Some("Yuna"));
        assert!(room.admit_next(&mut rng).is_none());
        assert_eq!(room.reader_count(), 3);
        assert_eq!(room.activities().len(), 1);
        assert!(JOIN_MESSAGES.contains(&room.activities()[0].message.as_str()));
    }

    #[test]
    fn feed_keeps_newest_five() {
        let mut room = ReadingRoom::new();
        for i in 0..7 {
            room.post("Miso", &format!("note {i}"));
        }
        assert_eq!(room.activities().len(), ACTIVITY_CAPACITY);
        assert_eq!(room.activities()[0].message, "note 6");
        assert_eq!(room.activities()[4].message, "note 2");
    }

    #[test]
    fn minutes_advance_for_seated_readers() {
        let mut room = ReadingRoom::new();
        room.advance_minute();
        assert_eq!(room.readers()[0].minutes_read, 24);
        assert_eq!(room.readers()[1].minutes_read, 46);
        assert_eq!(room.readers()[0].joined_ago_min, 12);
        assert_eq!(room.readers()[1].joined_ago_min, 30);
    }
}
