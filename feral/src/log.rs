use std::{
    borrow::Cow,
    fmt::Display,
};

use itertools::Itertools;

/// Trait for objects that can be added directly to the battle log.
///
/// Automatically implemented for types that implement [`Display`].
pub trait BattleLoggable {
    fn log<'s>(&'s self, parts: &mut Vec<Cow<'s, str>>);
}

impl<T> BattleLoggable for T
where
    T: Display,
{
    fn log(&self, parts: &mut Vec<Cow<'_, str>>) {
        parts.push(Cow::Owned(format!("{self}")))
    }
}

/// A battle event that is added to the [`EventLog`].
///
/// This object should not be constructed directly. Instead, use the
/// [`battle_event`][`crate::battle_event`] macro.
pub struct BattleEvent(String);

impl BattleEvent {
    pub fn from_parts(parts: &[&dyn BattleLoggable]) -> Self {
        let mut log_parts = Vec::with_capacity(parts.len());
        for part in parts {
            part.log(&mut log_parts);
        }
        Self(log_parts.into_iter().join("|"))
    }
}

/// Constructs a [`BattleEvent`] to be added to the [`EventLog`].
///
/// This macro enforces a common format for all entries in the event log.
#[macro_export]
macro_rules! battle_event {
    ($($arg:expr),* $(,)?) => {{
        $crate::log::BattleEvent::from_parts(&[$(&$arg),*])
    }};
}

/// A log of battle events that can be exported incrementally.
///
/// This log is the engine's message sink. Display text is pre-rendered by
/// whoever produces the event; the log only records that the event happened
/// and in what order.
pub struct EventLog {
    logs: Vec<String>,
    last_read: usize,
}

impl EventLog {
    /// Creates a new event log.
    pub fn new() -> Self {
        Self {
            logs: Vec::new(),
            last_read: 0,
        }
    }

    /// Adds a new event to the log.
    pub fn push(&mut self, event: BattleEvent) {
        self.logs.push(event.0);
    }

    /// Adds an extra line of user-facing message text.
    pub fn push_message(&mut self, message: &str) {
        self.push(BattleEvent::from_parts(&[&"message", &message]));
    }

    /// All events since the start of the battle.
    pub fn since_start(&self) -> impl Iterator<Item = &str> {
        self.logs.iter().map(|log| log.as_str())
    }

    /// All events recorded after the given index.
    pub fn since(&self, index: usize) -> impl Iterator<Item = &str> {
        self.logs.iter().skip(index).map(|log| log.as_str())
    }

    /// The number of events recorded so far.
    pub fn len(&self) -> usize {
        self.logs.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.logs.is_empty()
    }

    /// Reads all new events since the last call to this method.
    pub fn read_out(&mut self) -> Vec<String> {
        let new = self.logs[self.last_read..].to_vec();
        self.last_read = self.logs.len();
        new
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new()
    }
}
