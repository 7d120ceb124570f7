//! Change notification fan-out shared by the stores.

use {
    async_channel::{Receiver, Sender, unbounded},
    parking_lot::RwLock,
};

/// Set of live subscribers for one event type.
///
/// Every subscriber gets its own unbounded channel; closed channels are
/// dropped on the next broadcast.
#[derive(Debug)]
pub struct Subscribers<E> {
    senders: RwLock<Vec<Sender<E>>>,
}

impl<E> Default for Subscribers<E> {
    fn default() -> Self {
        Self {
            senders: RwLock::new(Vec::new()),
        }
    }
}

impl<E: Clone> Subscribers<E> {
    /// Registers a new subscriber.
    pub fn subscribe(&self) -> Receiver<E> {
        let (tx, rx) = unbounded();
        self.senders.write().push(tx);
        rx
    }

    /// Sends `event` to every live subscriber.
    ///
    /// # Returns
    ///
    /// The number of subscribers that received the event.
    pub fn broadcast(&self, event: &E) -> usize {
        let mut senders = self.senders.write();
        senders.retain(|tx| tx.try_send(event.clone()).is_ok());
        senders.len()
    }

    /// Number of registered subscribers, including ones not yet pruned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.senders.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.senders.read().is_empty()
    }
}
