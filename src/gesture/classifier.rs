//! Per-sample gesture classification with hysteresis.
//!
//! Rules are evaluated in priority order and the first match wins:
//!
//! 1. no hands: `None`, all retained state cleared
//! 2. two hands: zoom from the change in wrist separation
//! 3. open palm held continuously: one `ExitFocus` per hold
//! 4. peace sign: rotate from wrist movement
//! 5. pointing: focus cursor at the index fingertip
//! 6. anything else: `None`
//!
//! One-hand and two-hand gestures never blend: entering either clears the
//! other's retained state.

use glam::Vec2;

use super::event::GestureEvent;
use super::landmarks::{HandLandmarks, INDEX_TIP};
use super::pose::HandPose;
use crate::options::GestureOptions;

/// State retained between samples. Owned by exactly one classifier.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassifierState {
    /// Wrist position from the previous single-hand sample.
    pub last_hand_position: Option<Vec2>,
    /// Wrist separation from the previous two-hand sample.
    pub last_hand_distance: Option<f32>,
    /// Timestamp (ms) at which the current open-palm hold began.
    pub hold_start_ms: Option<f64>,
    /// Set once the current hold has fired `ExitFocus`; cleared when the
    /// palm closes.
    pub exit_latched: bool,
}

impl ClassifierState {
    /// Forget everything, as if no hand had ever been seen.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether nothing is retained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    fn clear_single_hand(&mut self) {
        self.last_hand_position = None;
        self.hold_start_ms = None;
        self.exit_latched = false;
    }
}

/// Classify one video sample.
///
/// `hands` holds the raw landmark sets reported for this sample (each
/// expected to carry 21 points). A malformed set degrades the whole
/// sample to [`GestureEvent::None`] and clears `state`. Beyond two hands,
/// only the first two are considered.
pub fn classify<H: AsRef<[Vec2]>>(
    state: &mut ClassifierState,
    options: &GestureOptions,
    hands: &[H],
    timestamp_ms: f64,
) -> GestureEvent {
    let mut parsed = hands
        .iter()
        .take(2)
        .map(|points| HandLandmarks::from_points(points.as_ref()));

    match (parsed.next(), parsed.next()) {
        (None, _) => {
            state.reset();
            GestureEvent::None
        }
        (Some(Some(first)), Some(Some(second))) => {
            classify_two_hands(state, options, &first, &second)
        }
        (Some(Some(hand)), None) => {
            classify_single_hand(state, options, &hand, timestamp_ms)
        }
        _ => {
            log::debug!("Malformed landmark set ignored");
            state.reset();
            GestureEvent::None
        }
    }
}

fn classify_two_hands(
    state: &mut ClassifierState,
    options: &GestureOptions,
    first: &HandLandmarks,
    second: &HandLandmarks,
) -> GestureEvent {
    state.clear_single_hand();

    let distance = first.wrist().distance(second.wrist());
    let previous = state.last_hand_distance.replace(distance);

    match previous {
        Some(previous) => {
            let delta = distance - previous;
            if delta.abs() > options.zoom_dead_zone {
                GestureEvent::Zoom {
                    delta: delta * options.two_hand_zoom_gain,
                }
            } else {
                GestureEvent::None
            }
        }
        None => GestureEvent::None,
    }
}

fn classify_single_hand(
    state: &mut ClassifierState,
    options: &GestureOptions,
    hand: &HandLandmarks,
    timestamp_ms: f64,
) -> GestureEvent {
    state.last_hand_distance = None;

    let wrist = hand.wrist();
    let previous = state.last_hand_position.replace(wrist);
    let pose = HandPose::of(hand);

    if pose == HandPose::OpenPalm {
        let start = *state.hold_start_ms.get_or_insert(timestamp_ms);
        if !state.exit_latched && timestamp_ms - start >= options.exit_hold_ms
        {
            state.exit_latched = true;
            state.hold_start_ms = Some(timestamp_ms);
            return GestureEvent::ExitFocus;
        }
        return GestureEvent::None;
    }

    state.hold_start_ms = None;
    state.exit_latched = false;

    match pose {
        HandPose::Peace => previous.map_or(GestureEvent::None, |previous| {
            let delta = wrist - previous;
            if delta.x.abs() > options.rotate_dead_zone
                || delta.y.abs() > options.rotate_dead_zone
            {
                GestureEvent::Rotate {
                    dx: delta.x,
                    dy: delta.y,
                }
            } else {
                GestureEvent::None
            }
        }),
        HandPose::Pointing => {
            let tip = hand.point(INDEX_TIP);
            let x = if options.mirror_cursor { 1.0 - tip.x } else { tip.x };
            GestureEvent::Focus { x, y: tip.y }
        }
        HandPose::OpenPalm | HandPose::Other => GestureEvent::None,
    }
}

/// A classifier bundling its own [`ClassifierState`] and tuning.
#[derive(Debug, Clone, Default)]
pub struct GestureClassifier {
    options: GestureOptions,
    state: ClassifierState,
}

impl GestureClassifier {
    /// Create a classifier with empty state.
    #[must_use]
    pub fn new(options: GestureOptions) -> Self {
        Self {
            options,
            state: ClassifierState::default(),
        }
    }

    /// Classify one video sample. See [`classify`].
    pub fn classify<H: AsRef<[Vec2]>>(
        &mut self,
        hands: &[H],
        timestamp_ms: f64,
    ) -> GestureEvent {
        classify(&mut self.state, &self.options, hands, timestamp_ms)
    }

    /// Retained state, for inspection.
    #[must_use]
    pub fn state(&self) -> &ClassifierState {
        &self.state
    }

    /// Current tuning.
    #[must_use]
    pub fn options(&self) -> &GestureOptions {
        &self.options
    }

    /// Replace tuning without touching retained state.
    pub fn set_options(&mut self, options: GestureOptions) {
        self.options = options;
    }

    /// Drop all retained state.
    pub fn reset(&mut self) {
        self.state.reset();
    }
}
