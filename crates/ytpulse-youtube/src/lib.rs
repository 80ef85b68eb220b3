//! YouTube Data API v3 client for ytpulse.
//!
//! Wraps `reqwest` with typed wire structs for the two list endpoints the
//! pipeline needs (`playlistItems.list` and `commentThreads.list`), a
//! page-token pagination loop, and the collector that flattens playlists
//! into one ordered comment-record sequence.

pub mod client;
pub mod collector;
pub mod error;
pub mod paging;
pub mod types;

pub use client::YoutubeClient;
pub use collector::{collect_comments, collect_playlist_comments, collect_video_ids};
pub use error::YoutubeError;
pub use paging::Page;
