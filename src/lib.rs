// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera control core for an interactive 3D solar-system viewer.
//!
//! Orrery turns four interchangeable input modalities (pointer drag,
//! keyboard, a scripted autopilot, and hand gestures from a camera feed)
//! into one smoothly updated camera pose. Rendering, the landmark model,
//! and UI widgets live outside this crate and talk to it through narrow
//! interfaces.
//!
//! # Key entry points
//!
//! - [`session::Session`] - owns every component and is driven once per
//!   render frame and once per video sample
//! - [`gesture::GestureClassifier`] - hand landmarks → [`GestureEvent`]
//! - [`camera::CameraController`] - the per-frame camera state machine
//! - [`orbit`] - parametric body positions shared with the renderer
//! - [`options::Options`] - runtime tuning (camera, gestures, keybindings)
//!
//! # Architecture
//!
//! Two loops run at uncorrelated rates. The video-sample loop feeds
//! landmarks through the [`hand::HandTracker`], which classifies them and
//! publishes the result into a lock-free triple buffer. The render loop
//! calls [`Session::update`](session::Session::update), which takes the
//! most recent fresh gesture (never blocking), applies mode and focus
//! changes, and advances the [`camera::CameraController`].

pub mod camera;
pub mod catalog;
pub mod control;
pub mod error;
pub mod gesture;
pub mod hand;
pub mod input;
pub mod options;
pub mod orbit;
pub mod session;
pub mod util;

pub use camera::{CameraController, CameraPose};
pub use catalog::{BodyCatalog, BodyId, CelestialBody};
pub use control::{ControlMode, ControlState};
pub use error::OrreryError;
pub use gesture::{GestureClassifier, GestureEvent};
pub use hand::{HandControllerLifecycle, HandTracker, LandmarkSource};
pub use input::{InputEvent, InputProcessor, KeyAction, MouseButton};
pub use session::{Command, Session};
