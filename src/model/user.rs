//! User information-related models.

use serde::{Deserialize, Serialize};

use crate::internal::prelude::*;
use crate::model::channel::ChannelMute;
use crate::model::timestamp::Timestamp;

/// A user as embedded in channel, message and event payloads.
///
/// Only the `id` is guaranteed by the wire contract; everything else depends
/// on which surface produced the payload and on the user's own settings.
/// Application-defined extra data travels in [`Self::custom`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct User {
    /// The unique identifier of the user.
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub online: Option<bool>,
    /// The role assigned to the user by the platform's permission system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
    /// Application-defined extra data attached to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// The connected user's own state, as delivered on health-check and
/// mute-update payloads.
///
/// Unlike [`User`], this shape carries the private counters and collections
/// that are only ever sent to the user they belong to.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct OwnUser {
    pub channel_mutes: Vec<ChannelMute>,
    pub created_at: Timestamp,
    pub devices: Vec<Device>,
    pub id: String,
    pub language: String,
    pub mutes: Vec<UserMute>,
    pub role: String,
    pub total_unread_count: u64,
    pub unread_channels: u64,
    pub unread_count: u64,
    pub unread_threads: u64,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deactivated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invisible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_active: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest_hidden_channels: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub teams: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// A push-notification device registered by a user.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Device {
    pub created_at: Timestamp,
    /// The device token issued by the push provider.
    pub id: String,
    /// The push provider the token belongs to, e.g. `apn` or `firebase`.
    pub push_provider: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip: Option<bool>,
}

/// A mute of one user by another.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserMute {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// When the mute lapses on its own; a mute without an expiration lasts
    /// until it is removed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
