//! Gallery Module - Random Image Reveal
//!
//! One component behind both hosts:
//! - Fetch the gallery index (a JSON array of `{"url": ...}` entries)
//! - Pick one entry uniformly at random
//! - Show it in the target, or hide the target on failure

mod client;
mod models;
mod picker;
mod reveal;
pub mod ui;

pub use client::{ClientConfig, GalleryClient, IndexSource};
pub use models::{IndexEntry, RevealError, RevealResult, TargetState};
pub use picker::{index_for_roll, pick_entry};
pub use reveal::{reveal_from, RevealSequencer};
pub use ui::{GalleryPanel, GalleryPanelEvent};
