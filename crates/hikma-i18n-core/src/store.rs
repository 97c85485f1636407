use crate::language::Language;
use parking_lot::{Mutex, RwLock};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Notification sent to subscribers after the active language changed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LanguageChange {
    pub previous: Language,
    pub current: Language,
}

/// Handle returned by [`LanguageStore::subscribe`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SubscriptionId(u64);

type Subscriber = Arc<dyn Fn(LanguageChange) + Send + Sync>;

/// Holds the active language of one session.
///
/// Stores are plain values: each session (or each server render) owns its
/// own, so concurrent sessions never observe each other's language.
pub struct LanguageStore {
    current: RwLock<Language>,
    subscribers: Mutex<Vec<(SubscriptionId, Subscriber)>>,
    next_id: AtomicU64,
}

impl fmt::Debug for LanguageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LanguageStore")
            .field("current", &*self.current.read())
            .field("subscribers", &self.subscribers.lock().len())
            .finish()
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Language::default())
    }
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        Self {
            current: RwLock::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    pub fn current(&self) -> Language {
        *self.current.read()
    }

    /// Makes `language` active and notifies subscribers before returning.
    ///
    /// Returns `false`, without notifying anyone, when `language` is
    /// already active.
    pub fn set(&self, language: Language) -> bool {
        let previous = {
            let mut current = self.current.write();
            if *current == language {
                return false;
            }
            std::mem::replace(&mut *current, language)
        };

        let change = LanguageChange {
            previous,
            current: language,
        };
        tracing::debug!("Language changed from {} to {}", previous, language);

        // Subscribers run without any lock held so they may read the store
        // or unsubscribe themselves.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in subscribers {
            subscriber(change);
        }

        true
    }

    pub fn subscribe<F>(&self, subscriber: F) -> SubscriptionId
    where
        F: Fn(LanguageChange) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.subscribers.lock().push((id, Arc::new(subscriber)));
        id
    }

    /// Returns `false` when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.lock();
        let before = subscribers.len();
        subscribers.retain(|(existing, _)| *existing != id);
        subscribers.len() != before
    }
}
