//! Rill is a Rust library for the Rill chat & video platform API.
//!
//! The crate provides typed mappings of the objects the platform sends over
//! its HTTP and WebSocket surfaces, together with the event envelope decoders
//! that turn one raw JSON frame into exactly one strongly-typed event value.
//!
//! The two entry points are [`Event`] for the chat socket and [`VideoEvent`]
//! for the video/call socket. Both expose a `parse` constructor with typed
//! decode failures, plus ordinary serde implementations for embedding:
//!
//! ```rust
//! use rill::model::event::Event;
//!
//! let frame = r#"{
//!     "type": "typing.start",
//!     "channel_id": "general",
//!     "channel_type": "messaging",
//!     "cid": "messaging:general",
//!     "created_at": "2024-01-01T00:00:00Z"
//! }"#;
//!
//! let event = Event::from_json_str(frame).unwrap();
//! assert_eq!(event.event_type(), "typing.start");
//! ```
//!
//! Decoding is pure and touches no process-wide state, so frames may be
//! decoded from any number of threads without coordination. Transport,
//! reconnection and retry policy belong to the host application; a malformed
//! frame surfaces as a recoverable [`ModelError`] and never poisons the
//! decoding of subsequent frames.
//!
//! [`Event`]: crate::model::event::Event
//! [`VideoEvent`]: crate::model::video::VideoEvent
//! [`ModelError`]: crate::model::ModelError
#![doc(html_root_url = "https://docs.rs/rill/*")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![forbid(unsafe_code)]
#![warn(
    unused,
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::fallible_impl_from,
    clippy::let_underscore_must_use,
    clippy::pedantic
)]
#![allow(
    // Allowed as they are too pedantic
    clippy::module_name_repetitions,
    clippy::wildcard_imports,
    clippy::too_many_lines,
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::struct_excessive_bools
)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod error;
mod internal;
pub mod json;
pub mod model;
pub mod prelude;

pub use crate::error::{Error, Result};
