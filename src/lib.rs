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
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
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

//! Free-look camera controller for first-person 3D navigation.
//!
//! The camera turns relative mouse motion into pitch/yaw angles measured
//! against a configurable world up axis (`+X`, `+Y` or `+Z`), rebuilds a
//! unit view direction from them, integrates keyboard movement along the
//! resulting basis, and rebuilds its view matrix lazily.
//!
//! # Key entry points
//!
//! - [`FreeLookCamera`] - the camera entity and its orientation solver
//! - [`InputState`] / [`InputSnapshot`] - per-frame input the camera consumes
//! - [`Projection`] / [`CameraUniform`] - projection parameters and the
//!   packed transforms handed to a renderer
//! - [`Options`] - TOML-backed configuration (camera, keybindings, demo)
//!
//! # Frame loop
//!
//! ```
//! use freelook::{FreeLookCamera, InputEvent, InputState, Options};
//!
//! let options = Options::default();
//! let mut camera = FreeLookCamera::from_options(&options.camera)?;
//! let mut input = InputState::new();
//!
//! input.begin_frame();
//! input.handle_event(&InputEvent::key_down("ArrowUp"));
//! input.handle_event(&InputEvent::MouseMotion { dx: 12, dy: -3 });
//! camera.advance(&input.snapshot(&options.keybindings));
//!
//! let view = camera.view_matrix();
//! # let _ = view;
//! # Ok::<(), freelook::FreelookError>(())
//! ```

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::core::FreeLookCamera;
pub use camera::orientation::{SphericalAngles, UpAxis, PHI_MAX};
pub use camera::projection::{CameraUniform, Projection};
pub use error::FreelookError;
pub use input::{
    FrameInput, InputEvent, InputSnapshot, InputState, KeyAction, MouseButton,
    Movement,
};
pub use options::Options;
