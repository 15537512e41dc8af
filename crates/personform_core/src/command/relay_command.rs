//! Generic command adapter over an action and an optional guard.
//!
//! # Responsibility
//! - Wrap one action and one optional can-execute predicate behind a
//!   uniform execute/can-execute surface the view layer can bind to.
//! - Own a per-instance re-query signal for guard re-evaluation.
//!
//! # Invariants
//! - Without a guard, `can_execute` is always `true`.
//! - `execute` never consults the guard; enforcing it is the binder's job.
//! - Panics inside the action unwind to the caller unmodified.

use crate::notify::change_notifier::ObserverId;

type ActionFn<T> = Box<dyn Fn(&T)>;
type GuardFn<T> = Box<dyn Fn(&T) -> bool>;
type RequeryFn = Box<dyn Fn()>;

/// Command adapter binding one action (and optional guard) over `T`.
pub struct RelayCommand<T> {
    action: ActionFn<T>,
    guard: Option<GuardFn<T>>,
    requery_observers: Vec<(ObserverId, RequeryFn)>,
    next_observer_id: ObserverId,
}

impl<T> RelayCommand<T> {
    /// Creates a command with no guard; `can_execute` is always `true`.
    pub fn new(action: impl Fn(&T) + 'static) -> Self {
        Self {
            action: Box::new(action),
            guard: None,
            requery_observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Creates a command whose executability is decided by `guard`.
    pub fn with_guard(
        action: impl Fn(&T) + 'static,
        guard: impl Fn(&T) -> bool + 'static,
    ) -> Self {
        Self {
            action: Box::new(action),
            guard: Some(Box::new(guard)),
            requery_observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Returns the guard's verdict for `parameter`, or `true` without one.
    pub fn can_execute(&self, parameter: &T) -> bool {
        match &self.guard {
            Some(guard) => guard(parameter),
            None => true,
        }
    }

    /// Invokes the wrapped action with `parameter`.
    pub fn execute(&self, parameter: &T) {
        (self.action)(parameter);
    }

    /// Registers one re-query callback and returns its removal handle.
    ///
    /// The view layer typically re-reads `can_execute` from inside the
    /// callback to refresh bound control state.
    pub fn subscribe_can_execute_changed(&mut self, observer: impl Fn() + 'static) -> ObserverId {
        let id = self.next_observer_id;
        self.next_observer_id += 1;
        self.requery_observers.push((id, Box::new(observer)));
        id
    }

    /// Removes one re-query callback by id.
    ///
    /// Returns `false` when the id is unknown or already removed.
    pub fn unsubscribe_can_execute_changed(&mut self, id: ObserverId) -> bool {
        let before = self.requery_observers.len();
        self.requery_observers
            .retain(|(observer_id, _)| *observer_id != id);
        self.requery_observers.len() != before
    }

    /// Signals subscribed callbacks that the guard's inputs may have changed.
    ///
    /// Called explicitly by the presentation layer for exactly the commands
    /// it has affected; callbacks run synchronously in subscription order.
    pub fn raise_can_execute_changed(&self) {
        for (_, observer) in &self.requery_observers {
            observer();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RelayCommand;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    #[test]
    fn execute_invokes_wrapped_action_with_parameter() {
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let command = RelayCommand::new(move |value: &String| {
            sink.borrow_mut().push(value.clone());
        });

        command.execute(&"save".to_string());
        command.execute(&"save again".to_string());

        assert_eq!(
            *received.borrow(),
            vec!["save".to_string(), "save again".to_string()]
        );
    }

    #[test]
    fn can_execute_defaults_to_true_without_guard() {
        let command = RelayCommand::new(|_: &u32| {});
        assert!(command.can_execute(&0));
        assert!(command.can_execute(&17));
    }

    #[test]
    fn can_execute_honors_guard_for_both_verdicts() {
        let command = RelayCommand::with_guard(|_: &u32| {}, |value: &u32| *value > 10);
        assert!(!command.can_execute(&3));
        assert!(command.can_execute(&11));
    }

    #[test]
    fn guard_rereads_shared_state_between_queries() {
        let enabled = Rc::new(Cell::new(false));
        let guard_state = Rc::clone(&enabled);
        let command = RelayCommand::with_guard(|_: &()| {}, move |_| guard_state.get());

        assert!(!command.can_execute(&()));
        enabled.set(true);
        assert!(command.can_execute(&()));
    }

    #[test]
    fn requery_signal_reaches_subscribers_until_unsubscribed() {
        let raised = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&raised);
        let mut command = RelayCommand::new(|_: &()| {});
        let id = command.subscribe_can_execute_changed(move || {
            counter.set(counter.get() + 1);
        });

        command.raise_can_execute_changed();
        command.raise_can_execute_changed();
        assert_eq!(raised.get(), 2);

        assert!(command.unsubscribe_can_execute_changed(id));
        assert!(!command.unsubscribe_can_execute_changed(id));
        command.raise_can_execute_changed();
        assert_eq!(raised.get(), 2);
    }

    #[test]
    fn requery_callbacks_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut command = RelayCommand::new(|_: &()| {});
        for tag in ["first", "second", "third"] {
            let sink = Rc::clone(&order);
            command.subscribe_can_execute_changed(move || sink.borrow_mut().push(tag));
        }

        command.raise_can_execute_changed();
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }
}
