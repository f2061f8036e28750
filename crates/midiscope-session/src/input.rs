//! Transport seam: message producers per source, one consumer per session.

use chrono::{DateTime, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender, TryRecvError};

use midiscope_decode::{RawMessage, SourceDevice};

use crate::error::{Error, Result};

/// Producer side. Clone one per input port.
#[derive(Debug, Clone)]
pub struct InputSender {
    tx: Sender<RawMessage>,
}

impl InputSender {
    pub fn send(&self, message: RawMessage) -> Result<()> {
        self.tx.send(message).map_err(|_| Error::ChannelClosed)
    }

    /// Rejects empty byte sequences.
    pub fn push(
        &self,
        bytes: &[u8],
        timestamp: DateTime<Utc>,
        source: &SourceDevice,
    ) -> Result<()> {
        let message = RawMessage::new(bytes, timestamp, source.clone())?;
        self.send(message)
    }
}

/// Consumer side. Yields messages in the order they were sent.
#[derive(Debug)]
pub struct InputReceiver {
    rx: Receiver<RawMessage>,
}

impl InputReceiver {
    #[inline]
    pub fn try_recv(&self) -> Option<RawMessage> {
        match self.rx.try_recv() {
            Ok(message) => Some(message),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until a message arrives or every sender is dropped.
    pub fn recv(&self) -> Result<RawMessage> {
        self.rx.recv().map_err(|_| Error::ChannelClosed)
    }

    pub fn drain(&self) -> Vec<RawMessage> {
        self.rx.try_iter().collect()
    }

    #[inline]
    pub fn pending_count(&self) -> usize {
        self.rx.len()
    }
}

pub fn input_channel() -> (InputSender, InputReceiver) {
    let (tx, rx) = unbounded();
    (InputSender { tx }, InputReceiver { rx })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_arrival_order_per_source() {
        let (tx, rx) = input_channel();
        let source = SourceDevice::new("in-1", "Keys");
        for note in 0..10u8 {
            tx.push(&[0x90, note, 0x40], Utc::now(), &source).unwrap();
        }
        assert_eq!(rx.pending_count(), 10);
        let notes: Vec<u8> = rx.drain().iter().map(|m| m.bytes()[1]).collect();
        assert_eq!(notes, (0..10).collect::<Vec<_>>());
        assert!(rx.try_recv().is_none());
    }

    #[test]
    fn test_cloned_senders_across_threads() {
        let (tx, rx) = input_channel();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let tx = tx.clone();
                thread::spawn(move || {
                    let source = SourceDevice::new(format!("in-{i}"), "Port");
                    for _ in 0..25 {
                        tx.push(&[0xF8], Utc::now(), &source).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(rx.drain().len(), 100);
    }

    #[test]
    fn test_empty_rejected_and_closed_channel() {
        let (tx, rx) = input_channel();
        let source = SourceDevice::new("in", "Keys");
        assert!(matches!(
            tx.push(&[], Utc::now(), &source),
            Err(Error::Decode(_))
        ));
        drop(tx);
        assert!(matches!(rx.recv(), Err(Error::ChannelClosed)));
    }
}
