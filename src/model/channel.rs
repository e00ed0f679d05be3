//! Models relating to channels.

use serde::{Deserialize, Serialize};

use crate::internal::prelude::*;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;

/// A channel, as delivered inside channel-scoped event payloads and query
/// responses.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelResponse {
    /// The composite `{type}:{id}` identifier of the channel.
    pub cid: String,
    pub created_at: Timestamp,
    pub disabled: bool,
    pub frozen: bool,
    /// The channel identifier, unique within its channel type.
    pub id: String,
    /// The channel type, e.g. `messaging` or `livestream`.
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translation_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ChannelConfig>,
    /// Slow-mode interval in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hide_messages_before: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_count: Option<u64>,
    /// Only the page of members the server chose to embed; the full list is
    /// paged through the query-members endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<ChannelMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mute_expires_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub own_capabilities: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated_by: Option<User>,
    /// Application-defined extra data attached to the channel.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// The feature configuration of a channel type.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelConfig {
    pub automod: String,
    pub automod_behavior: String,
    pub commands: Vec<Command>,
    pub connect_events: bool,
    pub created_at: Timestamp,
    pub custom_events: bool,
    pub max_message_length: u64,
    /// Retention window, e.g. `infinite` or a duration like `30d`.
    pub message_retention: String,
    pub mutes: bool,
    pub name: String,
    pub polls: bool,
    pub push_notifications: bool,
    pub quotes: bool,
    pub reactions: bool,
    pub read_events: bool,
    pub reminders: bool,
    pub replies: bool,
    pub search: bool,
    pub typing_events: bool,
    pub updated_at: Timestamp,
    pub uploads: bool,
    pub url_enrichment: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocklist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocklist_behavior: Option<String>,
}

/// A slash command enabled on a channel type.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Command {
    /// Argument syntax hint, e.g. `[text]`.
    pub args: String,
    pub description: String,
    pub name: String,
    /// The command set the command ships in, e.g. `fun_set`.
    pub set: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

/// A user's membership of one channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelMember {
    pub banned: bool,
    /// The member's role within this channel, e.g. `member` or `moderator`.
    pub channel_role: String,
    pub created_at: Timestamp,
    pub notifications_muted: bool,
    pub shadow_banned: bool,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ban_expires: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_accepted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_rejected_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_moderator: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// A mute of a whole channel by the connected user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelMute {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}
