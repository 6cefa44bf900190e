//! Halo exchange between neighboring tiles.
//!
//! Every directed tile link is a `sync_channel(1)`: one producer, one
//! consumer, one message per generation. A tile always sends its 8 messages
//! before it blocks on its own 8 receives, so the slot is guaranteed to be
//! empty when a send happens and the exchange can never deadlock.

use std::array;
use std::sync::mpsc::{sync_channel, Receiver, RecvTimeoutError, SyncSender};
use std::time::Duration;

use crate::direction::Direction;
use crate::error::{EngineError, Result};
use crate::tiling::Tiling;

/// Neighbor-count deltas crossing one tile edge or corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoundaryMessage {
    /// One delta per boundary cell, ordered along the edge.
    Edge(Vec<i8>),
    Corner(i8),
}

/// The 8 outgoing messages a tile accumulates while computing its ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Boundary {
    messages: [BoundaryMessage; 8],
}

impl Boundary {
    /// Zeroed messages for a `height` x `width` tile.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            messages: array::from_fn(|i| match Direction::ALL[i] {
                Direction::North | Direction::South => BoundaryMessage::Edge(vec![0; width]),
                Direction::East | Direction::West => BoundaryMessage::Edge(vec![0; height]),
                _ => BoundaryMessage::Corner(0),
            }),
        }
    }

    /// Accumulates `delta` for the neighbor tile in `dir`. `position` is the
    /// offset along the edge and is ignored for corners.
    #[inline]
    pub fn add(&mut self, dir: Direction, position: usize, delta: i8) {
        match &mut self.messages[dir.index()] {
            BoundaryMessage::Edge(deltas) => deltas[position] += delta,
            BoundaryMessage::Corner(total) => *total += delta,
        }
    }

    pub fn message(&self, dir: Direction) -> &BoundaryMessage {
        &self.messages[dir.index()]
    }

    pub fn into_messages(self) -> [BoundaryMessage; 8] {
        self.messages
    }
}

/// A tile's 8 inbound and 8 outbound endpoints.
///
/// `outbound[d]` feeds the `d.opposite()` inbox of the neighbor in `d`;
/// `inbound[d]` is fed by the neighbor in `d`.
pub struct Ports {
    inbound: [Receiver<BoundaryMessage>; 8],
    outbound: [SyncSender<BoundaryMessage>; 8],
}

impl Ports {
    /// Dispatches one message per direction.
    pub fn send_all(&self, tile: usize, messages: [BoundaryMessage; 8]) -> Result<()> {
        for (dir, message) in Direction::ALL.into_iter().zip(messages) {
            self.outbound[dir.index()]
                .send(message)
                .map_err(|_| EngineError::Disconnected {
                    tile,
                    direction: dir,
                })?;
        }
        Ok(())
    }

    /// Blocks until the neighbor in `dir` has delivered this generation's
    /// message. With a timeout the wait fails instead of hanging forever.
    pub fn receive(
        &self,
        tile: usize,
        dir: Direction,
        timeout: Option<Duration>,
    ) -> Result<BoundaryMessage> {
        let inbox = &self.inbound[dir.index()];
        match timeout {
            None => inbox.recv().map_err(|_| EngineError::Disconnected {
                tile,
                direction: dir,
            }),
            Some(limit) => inbox.recv_timeout(limit).map_err(|err| match err {
                RecvTimeoutError::Timeout => EngineError::ExchangeTimeout {
                    tile,
                    direction: dir,
                },
                RecvTimeoutError::Disconnected => EngineError::Disconnected {
                    tile,
                    direction: dir,
                },
            }),
        }
    }
}

#[cfg(test)]
impl Ports {
    /// Endpoints that are never written to. The returned senders keep the
    /// inboxes connected so receives wait, and the returned receivers absorb
    /// whatever the tile sends.
    pub(crate) fn silent() -> (
        Self,
        [SyncSender<BoundaryMessage>; 8],
        [Receiver<BoundaryMessage>; 8],
    ) {
        let inbox: [(SyncSender<BoundaryMessage>, Receiver<BoundaryMessage>); 8] =
            array::from_fn(|_| sync_channel(1));
        let outbox: [(SyncSender<BoundaryMessage>, Receiver<BoundaryMessage>); 8] =
            array::from_fn(|_| sync_channel(1));
        let feeders = inbox.each_ref().map(|(tx, _)| tx.clone());
        let outbound = outbox.each_ref().map(|(tx, _)| tx.clone());
        let ports = Self {
            inbound: inbox.map(|(_, rx)| rx),
            outbound,
        };
        (ports, feeders, outbox.map(|(_, rx)| rx))
    }
}

/// Builds the endpoints of every tile, indexed by tile id.
///
/// Each inbox gets exactly one producer: the temporary senders created here
/// are dropped once their single clone has been handed to the neighbor.
pub fn wire(tiling: &Tiling) -> Vec<Ports> {
    let count = tiling.tile_count();
    let mut senders = Vec::with_capacity(count);
    let mut receivers = Vec::with_capacity(count);
    for _ in 0..count {
        let links: [(SyncSender<BoundaryMessage>, Receiver<BoundaryMessage>); 8] =
            array::from_fn(|_| sync_channel(1));
        senders.push(links.each_ref().map(|(tx, _)| tx.clone()));
        receivers.push(links.map(|(_, rx)| rx));
    }

    receivers
        .into_iter()
        .enumerate()
        .map(|(id, inbound)| {
            let outbound = array::from_fn(|i| {
                let dir = Direction::ALL[i];
                let target = tiling.neighbor(id, dir);
                senders[target][dir.opposite().index()].clone()
            });
            Ports { inbound, outbound }
        })
        .collect()
}
