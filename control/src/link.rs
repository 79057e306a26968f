//! Passing attributes from the control loop to the DSP loop.
//!
//! Attributes travel through a single-producer single-consumer queue as
//! complete snapshots. Neither side ever blocks and the DSP loop never sees
//! a partially written set of attributes.

use heapless::spsc::{Consumer, Producer, Queue};

use peakcomp_dsp::processor::Attributes;

use crate::log;

// The queue holds one less item than its size.
const QUEUE_SIZE: usize = 4;

/// Storage of the queue. Split it to get both of its ends.
pub struct Link {
    queue: Queue<Attributes, QUEUE_SIZE>,
}

impl Default for Link {
    fn default() -> Self {
        Self::new()
    }
}

impl Link {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            queue: Queue::new(),
        }
    }

    pub fn split(&mut self) -> (AttributesSender<'_>, AttributesReceiver<'_>) {
        let (producer, consumer) = self.queue.split();
        (
            AttributesSender {
                producer,
                pending: None,
            },
            AttributesReceiver { consumer },
        )
    }
}

/// Control side of the link.
pub struct AttributesSender<'a> {
    producer: Producer<'a, Attributes, QUEUE_SIZE>,
    pending: Option<Attributes>,
}

impl AttributesSender<'_> {
    /// Send a new snapshot.
    ///
    /// If the queue is full, the snapshot waits and replaces any older
    /// waiting one. It is sent on the next `publish` or `flush`.
    pub fn publish(&mut self, attributes: Attributes) {
        self.pending = Some(attributes);
        self.flush();
    }

    /// Retry sending of a waiting snapshot. Returns true if nothing is left.
    pub fn flush(&mut self) -> bool {
        if let Some(attributes) = self.pending.take() {
            if let Err(attributes) = self.producer.enqueue(attributes) {
                log::info!("Attribute queue is full, postponing");
                self.pending = Some(attributes);
                return false;
            }
        }
        true
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// DSP side of the link.
pub struct AttributesReceiver<'a> {
    consumer: Consumer<'a, Attributes, QUEUE_SIZE>,
}

impl AttributesReceiver<'_> {
    /// Drain the queue and return the newest snapshot, if any arrived.
    pub fn latest(&mut self) -> Option<Attributes> {
        let mut latest = None;
        while let Some(attributes) = self.consumer.dequeue() {
            latest = Some(attributes);
        }
        latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attributes_with_makeup(makeup: f32) -> Attributes {
        Attributes {
            makeup,
            ..Attributes::default()
        }
    }

    #[test]
    fn nothing_is_received_before_publishing() {
        let mut link = Link::new();
        let (_sender, mut receiver) = link.split();
        assert_eq!(receiver.latest(), None);
    }

    #[test]
    fn only_the_newest_snapshot_is_received() {
        let mut link = Link::new();
        let (mut sender, mut receiver) = link.split();
        sender.publish(attributes_with_makeup(1.0));
        sender.publish(attributes_with_makeup(2.0));
        assert_eq!(receiver.latest(), Some(attributes_with_makeup(2.0)));
        assert_eq!(receiver.latest(), None);
    }

    #[test]
    fn snapshot_published_to_full_queue_arrives_after_flush() {
        let mut link = Link::new();
        let (mut sender, mut receiver) = link.split();
        for i in 0..QUEUE_SIZE + 2 {
            sender.publish(attributes_with_makeup(i as f32));
        }
        assert!(sender.has_pending());

        assert_eq!(
            receiver.latest(),
            Some(attributes_with_makeup((QUEUE_SIZE - 2) as f32))
        );
        assert!(sender.flush());
        assert!(!sender.has_pending());
        assert_eq!(
            receiver.latest(),
            Some(attributes_with_makeup((QUEUE_SIZE + 1) as f32))
        );
    }
}
