//! In-process property-change observer registry.
//!
//! # Responsibility
//! - Register/remove observers of named property changes.
//! - Deliver change events synchronously, in subscription order.
//!
//! # Invariants
//! - Observer ids strictly increase and are never reused by one notifier.
//! - `notify` calls every currently subscribed observer exactly once.
//! - Observer panics are not isolated; they unwind to the notifying caller.

use std::sync::Arc;

/// Handle returned by `subscribe`, used to remove one observer later.
pub type ObserverId = u64;

/// Callback contract for named property-change events.
///
/// Implemented for all `Fn(&str)` closures, so plain closures can subscribe
/// without a wrapper type.
pub trait PropertyObserver {
    fn property_changed(&self, property: &str);
}

impl<F> PropertyObserver for F
where
    F: Fn(&str),
{
    fn property_changed(&self, property: &str) {
        self(property)
    }
}

/// Per-instance observer list with add/remove/invoke semantics.
#[derive(Default)]
pub struct ChangeNotifier {
    observers: Vec<(ObserverId, Arc<dyn PropertyObserver>)>,
    next_id: ObserverId,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one observer and returns its removal handle.
    pub fn subscribe(&mut self, observer: Arc<dyn PropertyObserver>) -> ObserverId {
        let id = self.next_id;
        self.next_id += 1;
        self.observers.push((id, observer));
        id
    }

    /// Removes one observer by id.
    ///
    /// Returns `false` when the id is unknown or already removed.
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(observer_id, _)| *observer_id != id);
        self.observers.len() != before
    }

    /// Invokes every subscribed observer with `property`, in subscription
    /// order. No-op when nothing is subscribed.
    pub fn notify(&self, property: &str) {
        for (_, observer) in &self.observers {
            observer.property_changed(property);
        }
    }

    pub fn len(&self) -> usize {
        self.observers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{ChangeNotifier, PropertyObserver};
    use std::sync::{Arc, Mutex};

    fn recording_observer(
        tag: &'static str,
        log: Arc<Mutex<Vec<String>>>,
    ) -> Arc<dyn PropertyObserver> {
        Arc::new(move |property: &str| {
            log.lock()
                .expect("observer log lock")
                .push(format!("{tag}:{property}"));
        })
    }

    #[test]
    fn notifies_observers_in_subscription_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        notifier.subscribe(recording_observer("first", Arc::clone(&log)));
        notifier.subscribe(recording_observer("second", Arc::clone(&log)));

        notifier.notify("email");

        let seen = log.lock().expect("observer log lock").clone();
        assert_eq!(seen, vec!["first:email".to_string(), "second:email".to_string()]);
    }

    #[test]
    fn notify_without_observers_is_a_no_op() {
        let notifier = ChangeNotifier::new();
        assert!(notifier.is_empty());
        notifier.notify("email");
    }

    #[test]
    fn unsubscribed_observer_is_not_invoked() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        let first = notifier.subscribe(recording_observer("first", Arc::clone(&log)));
        notifier.subscribe(recording_observer("second", Arc::clone(&log)));

        assert!(notifier.unsubscribe(first));
        notifier.notify("birth_date");

        let seen = log.lock().expect("observer log lock").clone();
        assert_eq!(seen, vec!["second:birth_date".to_string()]);
        assert_eq!(notifier.len(), 1);
    }

    #[test]
    fn unsubscribe_unknown_id_returns_false() {
        let mut notifier = ChangeNotifier::new();
        assert!(!notifier.unsubscribe(42));

        let log = Arc::new(Mutex::new(Vec::new()));
        let id = notifier.subscribe(recording_observer("only", Arc::clone(&log)));
        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
    }

    #[test]
    fn observer_ids_strictly_increase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut notifier = ChangeNotifier::new();
        let first = notifier.subscribe(recording_observer("a", Arc::clone(&log)));
        let second = notifier.subscribe(recording_observer("b", Arc::clone(&log)));
        assert!(notifier.unsubscribe(first));
        let third = notifier.subscribe(recording_observer("c", Arc::clone(&log)));

        assert!(second > first);
        assert!(third > second);
    }
}
