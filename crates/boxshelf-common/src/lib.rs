//! Boxshelf-Common: Shared records, types, and utilities.
//!
//! This crate provides the data shared between the parser front-end and
//! the library views:
//!
//! - **Records**: the debrid listing entry ([`TorrentRecord`]) and the
//!   enriched library entry ([`MediaItem`])
//! - **Core Types**: media type and cache status enums
//! - **Listings**: loading the debrid listing JSON
//! - **Path Utilities**: Functions to detect file types by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use boxshelf_common::{MediaItem, MediaType, TorrentRecord};
//!
//! let record: TorrentRecord = serde_json::from_str(
//!     r#"{"id": 7, "name": "Heat.1995.1080p.BluRay.x264", "size": 1024}"#,
//! ).unwrap();
//!
//! let item = MediaItem::from_torrent(&record);
//! assert_eq!(item.id, "torbox-7");
//! assert_eq!(item.media_type, MediaType::Other);
//! assert_eq!(item.display_name(), "Heat.1995.1080p.BluRay.x264");
//! ```

pub mod error;
pub mod listing;
pub mod paths;
pub mod records;
pub mod types;

pub use error::{Error, Result};
pub use records::*;
pub use types::*;
