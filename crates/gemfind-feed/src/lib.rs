//! Feed acquisition and normalization for gemfind.
//!
//! Turns a loosely-structured external feed (published-spreadsheet CSV or a
//! JSON export) into the canonical venue working set: fetch once, sniff the
//! body format, parse rows, resolve aliased column names, coerce values,
//! and deduplicate by case-insensitive name. Image references get their own
//! resolver because cloud-drive share links and hotlink-hostile hosts need
//! rewriting before they are usable.

pub mod client;
pub mod error;
pub mod image;
pub mod normalize;
pub mod tabular;

pub use client::FeedClient;
pub use error::FeedError;
pub use image::{proxied, resolve_image_url};
pub use normalize::normalize;
pub use tabular::{parse as parse_tabular, RawRow};
