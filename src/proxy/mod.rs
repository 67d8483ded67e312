// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Fetch-and-rewrite pipeline
//!
//! ```text
//! URL → PageFetcher → raw HTML → transform → rewritten HTML
//! ```

pub mod config;
pub mod fetcher;
pub mod transformer;

pub use config::FetchConfig;
pub use fetcher::{FetchError, PageFetcher};
pub use transformer::{replace_term, transform, REPLACEMENT_TERM, SOURCE_TERM};
