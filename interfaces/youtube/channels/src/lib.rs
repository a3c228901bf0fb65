//! Thin client for the YouTube Data API v3 `channels.list` endpoint.

pub mod index;
pub mod response;
