//! Ready-or-pending results for validators, filters and input collection
//!
//! A user-supplied validator or filter either answers on the spot
//! ([`Outcome::Ready`]) or hands back a [`Pending`] result together with a
//! single-use [`Resolver`] that delivers the answer later, possibly from
//! another thread.

use futures::channel::oneshot;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

/// Result of a step that may finish now or later.
#[derive(Debug)]
pub enum Outcome<T> {
    Ready(T),
    Pending(Pending<T>),
}

impl<T> Outcome<T> {
    /// Wraps anything convertible into `T` as a ready outcome.
    pub fn ready(value: impl Into<T>) -> Self {
        Outcome::Ready(value.into())
    }

    /// Creates a pending outcome and the resolver that completes it.
    pub fn pending() -> (Self, Resolver<T>) {
        let (sender, receiver) = oneshot::channel();
        let resolver = Resolver { sender: Arc::new(Mutex::new(Some(sender))) };
        (Outcome::Pending(Pending { receiver }), resolver)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Outcome::Ready(_))
    }

    /// Waits for the value. `None` when the resolver was dropped unused.
    pub async fn resolve(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Pending(pending) => pending.await,
        }
    }
}

/// The receiving half of a pending outcome.
#[derive(Debug)]
pub struct Pending<T> {
    receiver: oneshot::Receiver<T>,
}

impl<T> Future for Pending<T> {
    type Output = Option<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.receiver).poll(cx).map(|received| match received {
            Ok(value) => Some(value),
            Err(oneshot::Canceled) => {
                log::warn!("Pending result abandoned: its resolver was dropped unresolved");
                None
            }
        })
    }
}

/// Single-use completion handle for a [`Pending`] outcome.
///
/// Clones share the same slot: only the first `resolve` across all of them
/// delivers a value.
pub struct Resolver<T> {
    sender: Arc<Mutex<Option<oneshot::Sender<T>>>>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self { sender: Arc::clone(&self.sender) }
    }
}

impl<T> std::fmt::Debug for Resolver<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver").field("resolved", &self.is_resolved()).finish()
    }
}

impl<T> Resolver<T> {
    /// Delivers `value`. Returns `false`, doing nothing, if already resolved.
    pub fn resolve(&self, value: T) -> bool {
        let sender = match self.sender.lock() {
            Ok(mut slot) => slot.take(),
            Err(poisoned) => poisoned.into_inner().take(),
        };

        match sender {
            Some(sender) => {
                if sender.send(value).is_err() {
                    log::debug!("Resolved a pending result nobody is waiting for");
                }
                true
            }
            None => {
                log::debug!("Ignoring repeated resolution of a single-use resolver");
                false
            }
        }
    }

    pub fn is_resolved(&self) -> bool {
        match self.sender.lock() {
            Ok(slot) => slot.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn ready_outcome_resolves_to_its_value() {
        let outcome: Outcome<u32> = Outcome::ready(7u32);
        assert!(outcome.is_ready());
        assert_eq!(block_on(outcome.resolve()), Some(7));
    }

    #[test]
    fn pending_outcome_resolves_to_first_value_only() {
        let (outcome, resolver) = Outcome::<&str>::pending();
        let second = resolver.clone();

        assert!(!outcome.is_ready());
        assert!(resolver.resolve("first"));
        assert!(!second.resolve("second"));
        assert!(second.is_resolved());
        assert_eq!(block_on(outcome.resolve()), Some("first"));
    }

    #[test]
    fn dropped_resolver_yields_none() {
        let (outcome, resolver) = Outcome::<u8>::pending();
        drop(resolver);
        assert_eq!(block_on(outcome.resolve()), None);
    }

    #[test]
    fn resolver_works_across_threads() {
        let (outcome, resolver) = Outcome::<String>::pending();
        let handle = std::thread::spawn(move || resolver.resolve("from thread".to_string()));
        assert_eq!(block_on(outcome.resolve()), Some("from thread".to_string()));
        assert!(handle.join().unwrap());
    }
}
