//! Property-change notification for stateful presentation objects.
//!
//! Exposed as a composable capability (has-a): a view-model embeds a
//! [`change_notifier::ChangeNotifier`] instead of inheriting notification
//! plumbing from a base object.

pub mod change_notifier;
