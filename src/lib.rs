//! Boxshelf - Release-name grouping for debrid download libraries
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod display;
pub mod grouping;
pub mod library;

pub use grouping::{group_items, group_items_with, MediaGroup};
pub use library::{LibraryQuery, SortBy};
