use glam::Vec2;

/// Supplier of per-sample hand landmarks (a camera feed plus a landmark
/// model). Lives outside this crate; the tracker only drives it.
///
/// The model is loaded once; the camera stream is opened each time Hand
/// mode is entered and released when it is left.
///
/// Each detected hand is a list of normalized image-space points, expected
/// to hold 21 entries in wrist-then-fingers order. Counts are not trusted:
/// the classifier validates every set.
pub trait LandmarkSource {
    /// Load the landmark model. Called once, before any stream is opened.
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the model cannot be loaded.
    fn load_model(&mut self) -> Result<(), String>;

    /// Open the camera stream. Called on every entry into Hand mode, after
    /// a successful [`load_model`](Self::load_model).
    ///
    /// # Errors
    ///
    /// Returns a human-readable reason when the stream cannot be opened
    /// (camera permission denied, device busy, ...).
    fn open_stream(&mut self) -> Result<(), String>;

    /// Detect hands in the source's current video frame.
    ///
    /// Returns zero, one or two hands. Absence is not an error.
    fn detect(&mut self, timestamp_ms: f64) -> Vec<Vec<Vec2>>;

    /// Release the camera stream. Must tolerate repeated calls.
    fn stop(&mut self);
}
