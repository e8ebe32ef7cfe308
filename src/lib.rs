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
// Geometry math allowances: casts between float/int widths are intentional
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::float_cmp)]

//! Direction-indicator wedge mesh generation for biomolecular polymer
//! backbones.
//!
//! Polywedge walks the backbone of a protein or nucleic acid chain and, for
//! each residue, derives a local curve frame (tangent/normal/binormal) from
//! the surrounding backbone anchors, then orients and scales a fixed unit
//! wedge solid to match that frame. All emitted wedges accumulate into one
//! growable mesh buffer, tagged with a per-residue group id so that emitted
//! triangles can later be resolved back to their source residue for picking
//! and highlighting.
//!
//! # Key entry points
//!
//! - [`visual::direction_wedge::create_direction_wedge_mesh`] - the mesh
//!   generator
//! - [`visual::DirectionWedgeVisual`] - host-facing visual lifecycle glue
//! - [`structure::PolymerUnit`] - the backbone data model consumed by the
//!   generator
//! - [`options::Options`] - runtime configuration with TOML preset support
//!
//! # Execution model
//!
//! Generation is a synchronous, single-pass loop over the unit's backbone
//! elements. A [`progress::ProgressSink`] passed into the call is consulted
//! every 10 000 elements; it can report progress to a host runtime and abort
//! the build cooperatively. All mutable scratch (curve interpolation state,
//! the growing mesh) is owned by one generation call, so independent calls
//! can run concurrently without locks.

pub mod error;
pub mod geometry;
pub mod options;
pub mod picking;
pub mod progress;
pub mod structure;
pub mod theme;
pub mod util;
pub mod visual;
