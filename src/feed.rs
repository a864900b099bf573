//! Reactive roster feed. Every successful mutation publishes a fresh
//! full-replacement snapshot; subscribers swap their working copy on each
//! emission instead of patching it.

use crate::models::player::Player;
use tokio::sync::watch;

#[derive(Clone)]
pub struct RosterFeed {
    tx: watch::Sender<Vec<Player>>,
}

impl RosterFeed {
    pub fn new(initial: Vec<Player>) -> Self {
        let (tx, _) = watch::channel(initial);
        RosterFeed { tx }
    }

    pub fn publish(&self, snapshot: Vec<Player>) {
        self.tx.send_replace(snapshot);
    }

    /// Live receiver over the snapshot sequence. Late subscribers see the
    /// latest snapshot immediately.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Player>> {
        self.tx.subscribe()
    }

    pub fn current(&self) -> Vec<Player> {
        self.tx.borrow().clone()
    }
}
