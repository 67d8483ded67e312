// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Page proxy endpoint
//!
//! Provides `POST /fetch`: fetch a remote page and return it with the
//! visible text rewritten.

pub mod handler;
pub mod request;
pub mod response;

pub use handler::fetch_handler;
pub use request::FetchRequest;
pub use response::FetchResponse;
