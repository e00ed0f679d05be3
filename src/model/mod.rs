//! Mappings of objects received from the API, with the event envelope
//! decoders that resolve raw frames into concrete typed values.
//!
//! Every type here mirrors one wire JSON shape: required fields are plain,
//! optional fields are `Option`s that are omitted again on serialization, and
//! equality is structural. Records are constructed either by decoding an
//! incoming payload or by application code building one to send; none of them
//! owns a resource or carries a close/dispose protocol.
//!
//! The two event unions live in [`event`] (chat socket) and [`video`]
//! (video/call socket). Their tag tables are deliberately kept separate; see
//! the module docs of each.

pub mod call;
pub mod channel;
pub mod error;
pub mod event;
pub mod message;
pub mod misc;
pub mod prelude;
pub mod timestamp;
pub mod user;
pub mod video;

pub use self::error::Error as ModelError;
pub use self::timestamp::Timestamp;
