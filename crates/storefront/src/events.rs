//! Publish/subscribe channel for notifications between components.
//!
//! The channel lets a deeply nested component (the review form) notify a
//! component in another subtree (the tabs panel) without either holding a
//! reference to the other. It is owned by the page root and passed by
//! `&mut` to whoever publishes; it is never global.
//!
//! # Delivery model
//!
//! Handlers are named [`Endpoint`]s rather than closures. [`EventChannel::publish`]
//! queues one [`Delivery`] per matching subscription, in registration order,
//! and the owner drains the queue with [`EventChannel::next_delivery`] before
//! the user action that triggered the publication returns. A delivery that
//! publishes again lands behind the deliveries already queued, so every
//! handler observes events in the order they were published.

use std::collections::VecDeque;
use std::fmt::Debug;

use product_page_core::Review;

/// Topics that can be published on the page channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// A shopper completed the review form.
    ReviewSubmitted,
}

/// Components that can subscribe to the page channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    ProductTabs,
}

/// Payloads carried on the page channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    ReviewSubmitted(Review),
}

/// The channel type used by the product page.
pub type PageChannel = EventChannel<Topic, Endpoint, PageEvent>;

/// A payload on its way to one handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery<H, T> {
    pub handler: H,
    pub payload: T,
}

/// Ordered publish/subscribe registry with a pending-delivery queue.
///
/// Subscriptions last as long as the channel; there is no unsubscribe.
#[derive(Debug)]
pub struct EventChannel<K, H, T> {
    subscriptions: Vec<(K, H)>,
    pending: VecDeque<Delivery<H, T>>,
}

impl<K, H, T> Default for EventChannel<K, H, T> {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
            pending: VecDeque::new(),
        }
    }
}

impl<K, H, T> EventChannel<K, H, T>
where
    K: PartialEq + Debug,
    H: Copy + Debug,
    T: Clone,
{
    /// Create a channel with no subscribers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for `topic`.
    ///
    /// Registering the same handler twice means it receives every event twice.
    pub fn subscribe(&mut self, topic: K, handler: H) {
        tracing::debug!(?topic, ?handler, "channel subscription added");
        self.subscriptions.push((topic, handler));
    }

    /// Queue `payload` for every handler subscribed to `topic`.
    ///
    /// Returns how many handlers the payload was queued for; zero means
    /// nobody is listening and the payload is dropped.
    pub fn publish(&mut self, topic: K, payload: T) -> usize {
        let before = self.pending.len();

        for (_, handler) in self.subscriptions.iter().filter(|(t, _)| *t == topic) {
            self.pending.push_back(Delivery {
                handler: *handler,
                payload: payload.clone(),
            });
        }

        let reached = self.pending.len() - before;
        tracing::debug!(?topic, handlers = reached, "event published");
        reached
    }

    /// Take the oldest undelivered payload.
    pub fn next_delivery(&mut self) -> Option<Delivery<H, T>> {
        self.pending.pop_front()
    }

    /// Returns `true` if there are deliveries waiting to be drained.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Number of handlers registered for `topic`.
    #[must_use]
    pub fn subscriber_count(&self, topic: &K) -> usize {
        self.subscriptions.iter().filter(|(t, _)| t == topic).count()
    }
}
