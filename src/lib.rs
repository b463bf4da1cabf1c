//! Gallery Studio - Random Image Revealer
//!
//! Fetches a JSON gallery index, picks one entry uniformly at random, and
//! reveals it in a target image widget - hiding the target on failure.

pub mod config;
pub mod gallery;

// Re-export commonly used types
pub use config::StudioConfig;
pub use gallery::{
    index_for_roll, pick_entry, reveal_from, ClientConfig, GalleryClient, GalleryPanel,
    GalleryPanelEvent, IndexEntry, IndexSource, RevealError, RevealResult, RevealSequencer,
    TargetState,
};
