//! Last-write-wins gesture channel between the video-sample loop and the
//! render loop.
//!
//! Backed by a triple buffer: the publisher never blocks, the receiver
//! never sees a torn value, and an event is consumed at most once. Every
//! event is stamped with the stream generation it was produced under; the
//! receiver drops events from an older generation, so a gesture classified
//! just before Hand mode was torn down can never reach the camera.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::gesture::GestureEvent;

/// A gesture tagged with the stream generation that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StampedGesture {
    /// Stream generation at classification time.
    pub generation: u64,
    /// The classified gesture.
    pub event: GestureEvent,
}

/// Create a connected publisher/receiver pair at generation 0.
#[must_use]
pub fn gesture_channel() -> (GesturePublisher, GestureReceiver) {
    let (input, output) = triple_buffer::triple_buffer(&None);
    let generation = Arc::new(AtomicU64::new(0));
    (
        GesturePublisher {
            input,
            generation: Arc::clone(&generation),
        },
        GestureReceiver { output, generation },
    )
}

/// Writing half, owned by the hand tracker.
pub struct GesturePublisher {
    input: triple_buffer::Input<Option<StampedGesture>>,
    generation: Arc<AtomicU64>,
}

impl GesturePublisher {
    /// Publish `event` under the current generation, replacing any event
    /// the receiver has not taken yet.
    pub fn publish(&mut self, event: GestureEvent) {
        let generation = self.generation.load(Ordering::Acquire);
        self.input.write(Some(StampedGesture { generation, event }));
    }

    /// Invalidate everything published so far. Returns the new generation.
    pub fn bump_generation(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Current stream generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }
}

/// Reading half, owned by the render loop.
pub struct GestureReceiver {
    output: triple_buffer::Output<Option<StampedGesture>>,
    generation: Arc<AtomicU64>,
}

impl GestureReceiver {
    /// Take the most recent fresh gesture, if one arrived since the last
    /// take. Never blocks.
    pub fn take_latest(&mut self) -> Option<GestureEvent> {
        let _ = self.output.update();
        let stamped = self.output.output_buffer_mut().take()?;
        let current = self.generation.load(Ordering::Acquire);
        if stamped.generation == current {
            Some(stamped.event)
        } else {
            log::debug!(
                "Dropped stale {} gesture (generation {} < {current})",
                stamped.event.name(),
                stamped.generation,
            );
            None
        }
    }

    /// Discard any pending gesture.
    pub fn drain(&mut self) {
        let _ = self.output.update();
        let _ = self.output.output_buffer_mut().take();
    }
}
