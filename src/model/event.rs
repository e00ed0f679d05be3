//! All the events the chat socket delivers, and the envelope decoder that
//! resolves them.
//!
//! A frame arrives as one self-contained JSON object whose `type` field names
//! the concrete payload shape. [`Event::parse`] reads that discriminator
//! first, dispatches through a fixed tag table, and decodes the full object
//! into exactly one variant of the closed [`Event`] union. Unknown tags are a
//! hard, typed failure ([`ModelError::UnknownEventType`]) and are never
//! routed to a default variant.
//!
//! Two tags deliberately alias: `connection.ok` decodes as
//! [`HealthCheckEvent`] alongside `health.check`, and
//! `notification.thread_message_new` decodes as [`MessageNewEvent`]. The
//! video socket resolves an overlapping but *not* identical tag table — see
//! [`super::video`] for the differences, which are preserved per surface
//! rather than merged.

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
#[cfg(feature = "simd-json")]
use simd_json::ValueAccess;

use crate::internal::prelude::*;
use crate::model::channel::{ChannelMember, ChannelResponse};
use crate::model::error::Error as ModelError;
use crate::model::message::{Message, Reaction, Thread};
use crate::model::timestamp::Timestamp;
use crate::model::user::{OwnUser, User};

/// Event data for the creation of a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelCreatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the deletion of a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelDeletedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel being frozen by a moderator.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelFrozenEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a channel being hidden from the connected user's list.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelHiddenEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    /// Whether the message history was cleared along with the hide.
    pub clear_history: bool,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user being kicked out of a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelKickedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel's history being truncated.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelTruncatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    /// The optional system message left in place of the truncated history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel being unfrozen.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelUnfrozenEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for an update to a channel.
///
/// This is fired both for data updates (name, image, extra data) and for
/// moderation toggles that do not have a dedicated event.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelUpdatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a previously hidden channel becoming visible again.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ChannelVisibleEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A custom event: the generic escape hatch for application-defined payloads
/// sent with the `custom` tag.
///
/// Note the capitalized `Custom` wire key for the payload body; the mapping
/// is part of the wire contract and preserved as-is.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct AnyEvent {
    pub created_at: Timestamp,
    /// The application-defined payload body.
    #[serde(rename = "Custom")]
    pub custom: JsonMap,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the periodic connection liveness confirmation.
///
/// This is fired:
///
/// - under the `health.check` tag, periodically while the socket is healthy
/// - under the legacy `connection.ok` alias, once after connecting
///
/// Both tags decode to this type; the literal tag received is retained in
/// [`Self::kind`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HealthCheckEvent {
    /// A wildcard `*` outside of any one channel.
    pub cid: String,
    pub connection_id: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    /// The connected user's own state; present on the first frame of a
    /// connection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me: Option<OwnUser>,
}

/// Event data for a member joining a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MemberAddedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a member leaving, or being removed from, a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MemberRemovedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for an update to a channel membership.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MemberUpdatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the deletion of a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageDeletedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    /// Whether the message was irrecoverably deleted rather than soft-deleted.
    pub hard_delete: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_participants: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a new message.
///
/// This is fired when a message lands in a watched channel, and — under the
/// `notification.thread_message_new` alias — when a reply lands in a watched
/// thread.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageNewEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub watcher_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_participants: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel being marked read.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageReadEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<Thread>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a soft-deleted message being restored.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageUndeletedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for an edit to a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct MessageUpdatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user being added to a channel they were not
/// watching.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationAddedToChannelEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the deletion of a channel the connected user is a member
/// of but not watching.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationChannelDeletedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a change to the connected user's channel mutes.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationChannelMutesUpdatedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me: Option<OwnUser>,
}

/// Event data for the truncation of a channel the connected user is a member
/// of but not watching.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationChannelTruncatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel invite being accepted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationInviteAcceptedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a channel invite being rejected.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationInviteRejectedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user being invited to a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationInvitedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user's unread counts after marking a channel
/// read.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationMarkReadEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    pub total_unread_count: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub unread_channels: u64,
    pub unread_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user marking a message as the first unread
/// one.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationMarkUnreadEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    pub first_unread_message_id: String,
    pub last_read_at: Timestamp,
    pub total_unread_count: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub unread_channels: u64,
    pub unread_count: u64,
    /// Unread messages within the affected channel only.
    pub unread_messages: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a new message in a channel the connected user is a member
/// of but not watching.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationNewMessageEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a change to the connected user's user mutes.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationMutesUpdatedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me: Option<OwnUser>,
}

/// Event data for the connected user being removed from a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct NotificationRemovedFromChannelEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ChannelMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a reaction being removed from a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReactionDeletedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_participants: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a reaction being added to a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReactionNewEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_participants: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a reaction's score changing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ReactionUpdatedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reaction: Option<Reaction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for an update to a thread.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ThreadUpdatedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread: Option<Thread>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user starting to type.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypingStartEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    /// Set when the user is typing inside a thread.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user stopping typing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct TypingStopEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user being banned from a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserBannedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    /// The moderator who issued the ban.
    pub created_by: User,
    /// Whether the ban is a shadow ban, invisible to the banned user.
    pub shadow: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user account being deactivated.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserDeactivatedEvent {
    pub created_at: Timestamp,
    pub created_by: User,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user account being deleted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserDeletedEvent {
    pub created_at: Timestamp,
    pub delete_conversation_channels: bool,
    pub hard_delete: bool,
    pub mark_messages_deleted: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for the connected user muting another user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserMutedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user's presence changing, e.g. online to offline.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserPresenceChangedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a deactivated user account being reactivated.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserReactivatedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a ban being lifted.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserUnbannedEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    pub shadow: bool,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for an update to a user.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserUpdatedEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user starting to watch a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserWatchingStartEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub watcher_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for a user no longer watching a channel.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserWatchingStopEvent {
    pub channel_id: String,
    pub channel_type: String,
    pub cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub watcher_count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A chat socket event, resolved to its concrete payload.
///
/// The union is closed: every tag the surface supports maps to exactly one
/// variant here, and anything else fails decoding with
/// [`ModelError::UnknownEventType`].
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Event {
    ChannelCreated(ChannelCreatedEvent),
    ChannelDeleted(ChannelDeletedEvent),
    ChannelFrozen(ChannelFrozenEvent),
    ChannelHidden(ChannelHiddenEvent),
    ChannelKicked(ChannelKickedEvent),
    ChannelTruncated(ChannelTruncatedEvent),
    ChannelUnfrozen(ChannelUnfrozenEvent),
    ChannelUpdated(ChannelUpdatedEvent),
    ChannelVisible(ChannelVisibleEvent),
    Any(AnyEvent),
    HealthCheck(HealthCheckEvent),
    MemberAdded(MemberAddedEvent),
    MemberRemoved(MemberRemovedEvent),
    MemberUpdated(MemberUpdatedEvent),
    MessageDeleted(MessageDeletedEvent),
    MessageNew(MessageNewEvent),
    MessageRead(MessageReadEvent),
    MessageUndeleted(MessageUndeletedEvent),
    MessageUpdated(MessageUpdatedEvent),
    NotificationAddedToChannel(NotificationAddedToChannelEvent),
    NotificationChannelDeleted(NotificationChannelDeletedEvent),
    NotificationChannelMutesUpdated(NotificationChannelMutesUpdatedEvent),
    NotificationChannelTruncated(NotificationChannelTruncatedEvent),
    NotificationInviteAccepted(NotificationInviteAcceptedEvent),
    NotificationInviteRejected(NotificationInviteRejectedEvent),
    NotificationInvited(NotificationInvitedEvent),
    NotificationMarkRead(NotificationMarkReadEvent),
    NotificationMarkUnread(NotificationMarkUnreadEvent),
    NotificationNewMessage(NotificationNewMessageEvent),
    NotificationMutesUpdated(NotificationMutesUpdatedEvent),
    NotificationRemovedFromChannel(NotificationRemovedFromChannelEvent),
    ReactionDeleted(ReactionDeletedEvent),
    ReactionNew(ReactionNewEvent),
    ReactionUpdated(ReactionUpdatedEvent),
    ThreadUpdated(ThreadUpdatedEvent),
    TypingStart(TypingStartEvent),
    TypingStop(TypingStopEvent),
    UserBanned(UserBannedEvent),
    UserDeactivated(UserDeactivatedEvent),
    UserDeleted(UserDeletedEvent),
    UserMuted(UserMutedEvent),
    UserPresenceChanged(UserPresenceChangedEvent),
    UserReactivated(UserReactivatedEvent),
    UserUnbanned(UserUnbannedEvent),
    UserUpdated(UserUpdatedEvent),
    UserWatchingStart(UserWatchingStartEvent),
    UserWatchingStop(UserWatchingStopEvent),
}

impl Event {
    /// Decodes one raw frame into a concrete event.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedEnvelope`] if the frame has no string
    /// `type` field, [`ModelError::UnknownEventType`] if the tag is not in
    /// the dispatch table, and [`ModelError::FieldDecode`] if a payload field
    /// is missing or mistyped.
    pub fn parse(value: Value) -> Result<Self> {
        let tag = discriminant(&value)?;
        deserialize_event_with_tag(&tag, value)
    }

    /// Decodes one raw frame from its JSON text.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let mut owned = input.to_owned();
        let value: Value = crate::json::from_str(&mut owned)?;
        Self::parse(value)
    }

    /// Returns the literal wire tag the event was decoded from.
    ///
    /// For aliased tags this is the tag actually received, not the canonical
    /// one: a `connection.ok` frame reports `connection.ok` here even though
    /// it decodes to the same payload type as `health.check`.
    #[must_use]
    pub fn event_type(&self) -> &str {
        match self {
            Self::ChannelCreated(e) => &e.kind,
            Self::ChannelDeleted(e) => &e.kind,
            Self::ChannelFrozen(e) => &e.kind,
            Self::ChannelHidden(e) => &e.kind,
            Self::ChannelKicked(e) => &e.kind,
            Self::ChannelTruncated(e) => &e.kind,
            Self::ChannelUnfrozen(e) => &e.kind,
            Self::ChannelUpdated(e) => &e.kind,
            Self::ChannelVisible(e) => &e.kind,
            Self::Any(e) => &e.kind,
            Self::HealthCheck(e) => &e.kind,
            Self::MemberAdded(e) => &e.kind,
            Self::MemberRemoved(e) => &e.kind,
            Self::MemberUpdated(e) => &e.kind,
            Self::MessageDeleted(e) => &e.kind,
            Self::MessageNew(e) => &e.kind,
            Self::MessageRead(e) => &e.kind,
            Self::MessageUndeleted(e) => &e.kind,
            Self::MessageUpdated(e) => &e.kind,
            Self::NotificationAddedToChannel(e) => &e.kind,
            Self::NotificationChannelDeleted(e) => &e.kind,
            Self::NotificationChannelMutesUpdated(e) => &e.kind,
            Self::NotificationChannelTruncated(e) => &e.kind,
            Self::NotificationInviteAccepted(e) => &e.kind,
            Self::NotificationInviteRejected(e) => &e.kind,
            Self::NotificationInvited(e) => &e.kind,
            Self::NotificationMarkRead(e) => &e.kind,
            Self::NotificationMarkUnread(e) => &e.kind,
            Self::NotificationNewMessage(e) => &e.kind,
            Self::NotificationMutesUpdated(e) => &e.kind,
            Self::NotificationRemovedFromChannel(e) => &e.kind,
            Self::ReactionDeleted(e) => &e.kind,
            Self::ReactionNew(e) => &e.kind,
            Self::ReactionUpdated(e) => &e.kind,
            Self::ThreadUpdated(e) => &e.kind,
            Self::TypingStart(e) => &e.kind,
            Self::TypingStop(e) => &e.kind,
            Self::UserBanned(e) => &e.kind,
            Self::UserDeactivated(e) => &e.kind,
            Self::UserDeleted(e) => &e.kind,
            Self::UserMuted(e) => &e.kind,
            Self::UserPresenceChanged(e) => &e.kind,
            Self::UserReactivated(e) => &e.kind,
            Self::UserUnbanned(e) => &e.kind,
            Self::UserUpdated(e) => &e.kind,
            Self::UserWatchingStart(e) => &e.kind,
            Self::UserWatchingStop(e) => &e.kind,
        }
    }

    /// Returns when the server emitted the event.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        match self {
            Self::ChannelCreated(e) => e.created_at,
            Self::ChannelDeleted(e) => e.created_at,
            Self::ChannelFrozen(e) => e.created_at,
            Self::ChannelHidden(e) => e.created_at,
            Self::ChannelKicked(e) => e.created_at,
            Self::ChannelTruncated(e) => e.created_at,
            Self::ChannelUnfrozen(e) => e.created_at,
            Self::ChannelUpdated(e) => e.created_at,
            Self::ChannelVisible(e) => e.created_at,
            Self::Any(e) => e.created_at,
            Self::HealthCheck(e) => e.created_at,
            Self::MemberAdded(e) => e.created_at,
            Self::MemberRemoved(e) => e.created_at,
            Self::MemberUpdated(e) => e.created_at,
            Self::MessageDeleted(e) => e.created_at,
            Self::MessageNew(e) => e.created_at,
            Self::MessageRead(e) => e.created_at,
            Self::MessageUndeleted(e) => e.created_at,
            Self::MessageUpdated(e) => e.created_at,
            Self::NotificationAddedToChannel(e) => e.created_at,
            Self::NotificationChannelDeleted(e) => e.created_at,
            Self::NotificationChannelMutesUpdated(e) => e.created_at,
            Self::NotificationChannelTruncated(e) => e.created_at,
            Self::NotificationInviteAccepted(e) => e.created_at,
            Self::NotificationInviteRejected(e) => e.created_at,
            Self::NotificationInvited(e) => e.created_at,
            Self::NotificationMarkRead(e) => e.created_at,
            Self::NotificationMarkUnread(e) => e.created_at,
            Self::NotificationNewMessage(e) => e.created_at,
            Self::NotificationMutesUpdated(e) => e.created_at,
            Self::NotificationRemovedFromChannel(e) => e.created_at,
            Self::ReactionDeleted(e) => e.created_at,
            Self::ReactionNew(e) => e.created_at,
            Self::ReactionUpdated(e) => e.created_at,
            Self::ThreadUpdated(e) => e.created_at,
            Self::TypingStart(e) => e.created_at,
            Self::TypingStop(e) => e.created_at,
            Self::UserBanned(e) => e.created_at,
            Self::UserDeactivated(e) => e.created_at,
            Self::UserDeleted(e) => e.created_at,
            Self::UserMuted(e) => e.created_at,
            Self::UserPresenceChanged(e) => e.created_at,
            Self::UserReactivated(e) => e.created_at,
            Self::UserUnbanned(e) => e.created_at,
            Self::UserUpdated(e) => e.created_at,
            Self::UserWatchingStart(e) => e.created_at,
            Self::UserWatchingStop(e) => e.created_at,
        }
    }

    /// Returns the composite channel identifier for channel-scoped events,
    /// or `None` for user- and connection-scoped ones.
    #[must_use]
    pub fn cid(&self) -> Option<&str> {
        match self {
            Self::ChannelCreated(e) => Some(&e.cid),
            Self::ChannelDeleted(e) => Some(&e.cid),
            Self::ChannelFrozen(e) => Some(&e.cid),
            Self::ChannelHidden(e) => Some(&e.cid),
            Self::ChannelKicked(e) => Some(&e.cid),
            Self::ChannelTruncated(e) => Some(&e.cid),
            Self::ChannelUnfrozen(e) => Some(&e.cid),
            Self::ChannelUpdated(e) => Some(&e.cid),
            Self::ChannelVisible(e) => Some(&e.cid),
            Self::HealthCheck(e) => Some(&e.cid),
            Self::MemberAdded(e) => Some(&e.cid),
            Self::MemberRemoved(e) => Some(&e.cid),
            Self::MemberUpdated(e) => Some(&e.cid),
            Self::MessageDeleted(e) => Some(&e.cid),
            Self::MessageNew(e) => Some(&e.cid),
            Self::MessageRead(e) => Some(&e.cid),
            Self::MessageUndeleted(e) => Some(&e.cid),
            Self::MessageUpdated(e) => Some(&e.cid),
            Self::NotificationAddedToChannel(e) => Some(&e.cid),
            Self::NotificationChannelDeleted(e) => Some(&e.cid),
            Self::NotificationChannelTruncated(e) => Some(&e.cid),
            Self::NotificationInviteAccepted(e) => Some(&e.cid),
            Self::NotificationInviteRejected(e) => Some(&e.cid),
            Self::NotificationInvited(e) => Some(&e.cid),
            Self::NotificationMarkRead(e) => Some(&e.cid),
            Self::NotificationMarkUnread(e) => Some(&e.cid),
            Self::NotificationNewMessage(e) => Some(&e.cid),
            Self::NotificationRemovedFromChannel(e) => Some(&e.cid),
            Self::ReactionDeleted(e) => Some(&e.cid),
            Self::ReactionNew(e) => Some(&e.cid),
            Self::ReactionUpdated(e) => Some(&e.cid),
            Self::ThreadUpdated(e) => e.cid.as_deref(),
            Self::TypingStart(e) => Some(&e.cid),
            Self::TypingStop(e) => Some(&e.cid),
            Self::UserBanned(e) => Some(&e.cid),
            Self::UserUnbanned(e) => Some(&e.cid),
            Self::UserWatchingStart(e) => Some(&e.cid),
            Self::UserWatchingStop(e) => Some(&e.cid),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::parse(value).map_err(DeError::custom)
    }
}

/// Extracts the `type` discriminator alone, independently of the rest of the
/// payload shape.
pub(crate) fn discriminant(value: &Value) -> Result<String> {
    value
        .get("type")
        .and_then(|v| v.as_str())
        .map(ToOwned::to_owned)
        .ok_or(Error::Model(ModelError::MalformedEnvelope))
}

pub(crate) fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T> {
    crate::json::from_value_raw(value).map_err(|e| Error::Model(ModelError::field_decode(&e)))
}

/// Deserializes a frame already known to carry the given tag.
///
/// The tag table below is the wire contract of the chat surface. Several
/// tags intentionally route to one payload type; the table must be read as
/// many-to-one, not one-to-one.
pub fn deserialize_event_with_tag(tag: &str, value: Value) -> Result<Event> {
    Ok(match tag {
        "channel.created" => Event::ChannelCreated(decode(value)?),
        "channel.deleted" => Event::ChannelDeleted(decode(value)?),
        "channel.frozen" => Event::ChannelFrozen(decode(value)?),
        "channel.hidden" => Event::ChannelHidden(decode(value)?),
        "channel.kicked" => Event::ChannelKicked(decode(value)?),
        "channel.truncated" => Event::ChannelTruncated(decode(value)?),
        "channel.unfrozen" => Event::ChannelUnfrozen(decode(value)?),
        "channel.updated" => Event::ChannelUpdated(decode(value)?),
        "channel.visible" => Event::ChannelVisible(decode(value)?),
        "custom" => Event::Any(decode(value)?),
        "health.check" | "connection.ok" => Event::HealthCheck(decode(value)?),
        "member.added" => Event::MemberAdded(decode(value)?),
        "member.removed" => Event::MemberRemoved(decode(value)?),
        "member.updated" => Event::MemberUpdated(decode(value)?),
        "message.deleted" => Event::MessageDeleted(decode(value)?),
        "message.new" => Event::MessageNew(decode(value)?),
        "message.read" => Event::MessageRead(decode(value)?),
        "message.undeleted" => Event::MessageUndeleted(decode(value)?),
        "message.updated" => Event::MessageUpdated(decode(value)?),
        "notification.added_to_channel" => Event::NotificationAddedToChannel(decode(value)?),
        "notification.channel_deleted" => Event::NotificationChannelDeleted(decode(value)?),
        "notification.channel_mutes_updated" => {
            Event::NotificationChannelMutesUpdated(decode(value)?)
        },
        "notification.channel_truncated" => Event::NotificationChannelTruncated(decode(value)?),
        "notification.invite_accepted" => Event::NotificationInviteAccepted(decode(value)?),
        "notification.invite_rejected" => Event::NotificationInviteRejected(decode(value)?),
        "notification.invited" => Event::NotificationInvited(decode(value)?),
        "notification.mark_read" => Event::NotificationMarkRead(decode(value)?),
        "notification.mark_unread" => Event::NotificationMarkUnread(decode(value)?),
        "notification.message_new" => Event::NotificationNewMessage(decode(value)?),
        "notification.mutes_updated" => Event::NotificationMutesUpdated(decode(value)?),
        "notification.removed_from_channel" => {
            Event::NotificationRemovedFromChannel(decode(value)?)
        },
        "notification.thread_message_new" => Event::MessageNew(decode(value)?),
        "reaction.deleted" => Event::ReactionDeleted(decode(value)?),
        "reaction.new" => Event::ReactionNew(decode(value)?),
        "reaction.updated" => Event::ReactionUpdated(decode(value)?),
        "thread.updated" => Event::ThreadUpdated(decode(value)?),
        "typing.start" => Event::TypingStart(decode(value)?),
        "typing.stop" => Event::TypingStop(decode(value)?),
        "user.banned" => Event::UserBanned(decode(value)?),
        "user.deactivated" => Event::UserDeactivated(decode(value)?),
        "user.deleted" => Event::UserDeleted(decode(value)?),
        "user.muted" => Event::UserMuted(decode(value)?),
        "user.presence.changed" => Event::UserPresenceChanged(decode(value)?),
        "user.reactivated" => Event::UserReactivated(decode(value)?),
        "user.unbanned" => Event::UserUnbanned(decode(value)?),
        "user.updated" => Event::UserUpdated(decode(value)?),
        "user.watching.start" => Event::UserWatchingStart(decode(value)?),
        "user.watching.stop" => Event::UserWatchingStop(decode(value)?),
        _ => {
            tracing::debug!(tag, "refusing to decode unrecognised chat event tag");

            return Err(Error::Model(ModelError::UnknownEventType(tag.to_owned())));
        },
    })
}
