use super::channel::{gesture_channel, GesturePublisher, GestureReceiver};
use super::lifecycle::HandControllerLifecycle;
use super::source::LandmarkSource;
use crate::gesture::{GestureClassifier, GestureEvent};
use crate::options::GestureOptions;

/// Drives a [`LandmarkSource`] once per video sample, classifies the
/// result, and publishes it to the render loop.
///
/// The model is loaded once ([`initialize`](Self::initialize)); the stream
/// is opened on every [`start_stream`](Self::start_stream) and released by
/// [`teardown`](Self::teardown). While not streaming, video callbacks are
/// no-ops.
pub struct HandTracker {
    source: Box<dyn LandmarkSource>,
    classifier: GestureClassifier,
    publisher: GesturePublisher,
    lifecycle: HandControllerLifecycle,
    status: String,
    streaming: bool,
}

impl HandTracker {
    /// Create a tracker and the receiver its gestures are published to.
    #[must_use]
    pub fn new(
        source: Box<dyn LandmarkSource>,
        options: GestureOptions,
    ) -> (Self, GestureReceiver) {
        let (publisher, receiver) = gesture_channel();
        let tracker = Self {
            source,
            classifier: GestureClassifier::new(options),
            publisher,
            lifecycle: HandControllerLifecycle::Uninitialized,
            status: String::from("Hand tracking not started"),
            streaming: false,
        };
        (tracker, receiver)
    }

    /// Load the landmark model.
    ///
    /// Failure is not fatal: the tracker moves to
    /// [`HandControllerLifecycle::Error`] and records the reason in
    /// [`status`](Self::status). Calling again after success is a no-op.
    pub fn initialize(&mut self) -> HandControllerLifecycle {
        if self.lifecycle.is_ready() {
            return self.lifecycle;
        }
        self.set_lifecycle(HandControllerLifecycle::Loading);
        self.status = String::from("Loading hand tracking...");

        match self.source.load_model() {
            Ok(()) => {
                self.status = String::from("Hand tracking ready");
                self.set_lifecycle(HandControllerLifecycle::Ready);
            }
            Err(reason) => self.fail(&reason),
        }
        self.lifecycle
    }

    /// Open the camera stream and begin processing video samples under a
    /// fresh generation.
    ///
    /// Returns `false` (and stays idle) unless the tracker is ready and the
    /// stream opens. A stream failure moves the tracker to
    /// [`HandControllerLifecycle::Error`].
    pub fn start_stream(&mut self) -> bool {
        if !self.lifecycle.is_ready() {
            log::debug!("Hand stream not started: tracker is {}", self.lifecycle);
            return false;
        }
        if self.streaming {
            return true;
        }
        if let Err(reason) = self.source.open_stream() {
            self.fail(&reason);
            return false;
        }
        self.classifier.reset();
        self.streaming = true;
        self.status = String::from("Hand tracking active");
        log::debug!(
            "Hand stream started (generation {})",
            self.publisher.generation()
        );
        true
    }

    /// Stop processing: release the stream, invalidate every gesture
    /// published so far, and forget classifier history.
    pub fn teardown(&mut self) {
        if self.streaming {
            self.source.stop();
            self.streaming = false;
            self.status = String::from("Hand tracking ready");
        }
        let generation = self.publisher.bump_generation();
        self.classifier.reset();
        log::debug!("Hand stream torn down (generation {generation})");
    }

    /// Process one video sample. Returns the classified gesture, or `None`
    /// when the tracker is not streaming.
    pub fn on_video_frame(&mut self, timestamp_ms: f64) -> Option<GestureEvent> {
        if !self.streaming {
            return None;
        }
        let hands = self.source.detect(timestamp_ms);
        let event = self.classifier.classify(&hands, timestamp_ms);
        if !event.is_none() {
            log::trace!("Gesture {event:?} at {timestamp_ms:.0} ms");
        }
        self.publisher.publish(event);
        Some(event)
    }

    /// Current acquisition state.
    #[must_use]
    pub fn lifecycle(&self) -> HandControllerLifecycle {
        self.lifecycle
    }

    /// Human-readable status for UI display.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether video samples are currently being processed.
    #[must_use]
    pub fn is_streaming(&self) -> bool {
        self.streaming
    }

    /// The classifier, for inspecting retained state.
    #[must_use]
    pub fn classifier(&self) -> &GestureClassifier {
        &self.classifier
    }

    fn fail(&mut self, reason: &str) {
        log::warn!("Hand tracking unavailable: {reason}");
        self.status = format!("Hand tracking unavailable: {reason}");
        self.set_lifecycle(HandControllerLifecycle::Error);
    }

    fn set_lifecycle(&mut self, lifecycle: HandControllerLifecycle) {
        if self.lifecycle != lifecycle {
            log::info!("Hand tracker: {} -> {lifecycle}", self.lifecycle);
            self.lifecycle = lifecycle;
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted landmark source for tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use glam::Vec2;

    use super::LandmarkSource;

    /// Observable side effects of a [`ScriptedSource`].
    #[derive(Debug, Default)]
    pub(crate) struct SourceLog {
        pub(crate) models_loaded: u32,
        pub(crate) streams_opened: u32,
        pub(crate) stopped: u32,
        pub(crate) detected: u32,
        pub(crate) open: bool,
    }

    /// Replays queued samples while the stream is open; an empty queue or
    /// a closed stream reports no hands.
    pub(crate) struct ScriptedSource {
        pub(crate) model_error: Option<String>,
        pub(crate) stream_error: Option<String>,
        pub(crate) samples: Rc<RefCell<VecDeque<Vec<Vec<Vec2>>>>>,
        pub(crate) log: Rc<RefCell<SourceLog>>,
    }

    impl ScriptedSource {
        pub(crate) fn new() -> Self {
            Self {
                model_error: None,
                stream_error: None,
                samples: Rc::default(),
                log: Rc::default(),
            }
        }

        pub(crate) fn failing(reason: &str) -> Self {
            Self {
                model_error: Some(reason.to_owned()),
                ..Self::new()
            }
        }

        pub(crate) fn without_camera(reason: &str) -> Self {
            Self {
                stream_error: Some(reason.to_owned()),
                ..Self::new()
            }
        }
    }

    impl LandmarkSource for ScriptedSource {
        fn load_model(&mut self) -> Result<(), String> {
            self.log.borrow_mut().models_loaded += 1;
            self.model_error.clone().map_or(Ok(()), Err)
        }

        fn open_stream(&mut self) -> Result<(), String> {
            if let Some(reason) = &self.stream_error {
                return Err(reason.clone());
            }
            let mut log = self.log.borrow_mut();
            log.streams_opened += 1;
            log.open = true;
            Ok(())
        }

        fn detect(&mut self, _timestamp_ms: f64) -> Vec<Vec<Vec2>> {
            let mut log = self.log.borrow_mut();
            log.detected += 1;
            if !log.open {
                return Vec::new();
            }
            self.samples.borrow_mut().pop_front().unwrap_or_default()
        }

        fn stop(&mut self) {
            let mut log = self.log.borrow_mut();
            log.stopped += 1;
            log.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use glam::Vec2;

    use super::fake::ScriptedSource;
    use super::*;
    use crate::gesture::landmarks::fixtures::{fist, peace};

    #[test]
    fn initialize_reaches_ready() {
        let source = ScriptedSource::new();
        let log = Rc::clone(&source.log);
        let (mut tracker, _rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());

        assert_eq!(tracker.lifecycle(), HandControllerLifecycle::Uninitialized);
        assert_eq!(tracker.initialize(), HandControllerLifecycle::Ready);
        assert_eq!(tracker.status(), "Hand tracking ready");

        // Already ready: the model is not loaded twice, and no stream is
        // opened before Hand mode asks for one.
        let _ = tracker.initialize();
        assert_eq!(log.borrow().models_loaded, 1);
        assert_eq!(log.borrow().streams_opened, 0);
        assert!(!log.borrow().open);
    }

    #[test]
    fn acquisition_failure_is_reported_not_fatal() {
        let source = ScriptedSource::failing("camera permission denied");
        let (mut tracker, mut rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());

        assert_eq!(tracker.initialize(), HandControllerLifecycle::Error);
        assert!(tracker.status().contains("camera permission denied"));
        assert!(!tracker.start_stream());
        assert_eq!(tracker.on_video_frame(0.0), None);
        assert_eq!(rx.take_latest(), None);
    }

    #[test]
    fn frames_are_ignored_until_streaming() {
        let source = ScriptedSource::new();
        let log = Rc::clone(&source.log);
        let (mut tracker, _rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());
        let _ = tracker.initialize();

        assert_eq!(tracker.on_video_frame(0.0), None);
        assert_eq!(log.borrow().detected, 0);

        assert!(tracker.start_stream());
        assert_eq!(tracker.on_video_frame(33.0), Some(GestureEvent::None));
        assert_eq!(log.borrow().detected, 1);
    }

    #[test]
    fn classified_gestures_reach_the_receiver() {
        let source = ScriptedSource::new();
        let samples = Rc::clone(&source.samples);
        let (mut tracker, mut rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());
        let _ = tracker.initialize();
        let _ = tracker.start_stream();

        samples.borrow_mut().extend([
            vec![peace(Vec2::new(0.50, 0.5))],
            vec![peace(Vec2::new(0.60, 0.5))],
        ]);
        let _ = tracker.on_video_frame(0.0);
        let _ = tracker.on_video_frame(33.0);

        assert!(matches!(
            rx.take_latest(),
            Some(GestureEvent::Rotate { .. })
        ));
    }

    #[test]
    fn teardown_invalidates_in_flight_gestures() {
        let source = ScriptedSource::new();
        let samples = Rc::clone(&source.samples);
        let log = Rc::clone(&source.log);
        let (mut tracker, mut rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());
        let _ = tracker.initialize();
        let _ = tracker.start_stream();

        samples.borrow_mut().extend([
            vec![peace(Vec2::new(0.50, 0.5))],
            vec![peace(Vec2::new(0.60, 0.5))],
        ]);
        let _ = tracker.on_video_frame(0.0);
        let _ = tracker.on_video_frame(33.0);

        tracker.teardown();
        assert_eq!(log.borrow().stopped, 1);
        assert!(!tracker.is_streaming());
        assert!(tracker.classifier().state().is_empty());
        assert_eq!(rx.take_latest(), None);

        // Late callbacks after teardown do nothing.
        samples.borrow_mut().push_back(vec![fist(Vec2::new(0.5, 0.5))]);
        assert_eq!(tracker.on_video_frame(66.0), None);
        assert_eq!(rx.take_latest(), None);
    }

    #[test]
    fn restart_after_teardown_reopens_the_stream() {
        let source = ScriptedSource::new();
        let samples = Rc::clone(&source.samples);
        let log = Rc::clone(&source.log);
        let (mut tracker, mut rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());
        let _ = tracker.initialize();
        let _ = tracker.start_stream();
        tracker.teardown();
        assert!(!log.borrow().open);

        assert!(tracker.start_stream());
        assert!(log.borrow().open);
        assert_eq!(log.borrow().streams_opened, 2);
        assert_eq!(log.borrow().models_loaded, 1);
        assert_eq!(tracker.status(), "Hand tracking active");

        samples.borrow_mut().extend([
            vec![peace(Vec2::new(0.50, 0.5))],
            vec![peace(Vec2::new(0.40, 0.5))],
        ]);
        let _ = tracker.on_video_frame(100.0);
        let _ = tracker.on_video_frame(133.0);
        assert!(matches!(
            rx.take_latest(),
            Some(GestureEvent::Rotate { dx, .. }) if dx < 0.0
        ));
    }

    #[test]
    fn stream_failure_is_reported_not_fatal() {
        let source = ScriptedSource::without_camera("camera busy");
        let log = Rc::clone(&source.log);
        let (mut tracker, mut rx) =
            HandTracker::new(Box::new(source), GestureOptions::default());

        assert_eq!(tracker.initialize(), HandControllerLifecycle::Ready);
        assert!(!tracker.start_stream());
        assert_eq!(tracker.lifecycle(), HandControllerLifecycle::Error);
        assert!(tracker.status().contains("camera busy"));
        assert!(!tracker.is_streaming());

        assert_eq!(tracker.on_video_frame(0.0), None);
        assert_eq!(log.borrow().detected, 0);
        assert_eq!(rx.take_latest(), None);
    }
}
