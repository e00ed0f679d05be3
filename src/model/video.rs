//! All the events the video socket delivers, and the envelope decoder that
//! resolves them.
//!
//! The video surface shares most chat-shaped payloads with [`super::event`],
//! but resolves its own tag table, and the two tables have drifted apart;
//! they are kept separate on purpose rather than merged, since neither is
//! authoritative for the other surface. Relative to the chat table, this one:
//!
//! - adds the whole `call.*` family and `connection.error`,
//! - decodes `connection.ok` as its own [`ConnectedEvent`] rather than as a
//!   health-check alias,
//! - does not know `thread.updated` or `message.undeleted`,
//! - knows `user.unread_message_reminder`,
//! - aliases `notification.thread_message_new` to
//!   [`NotificationNewMessageEvent`] instead of [`MessageNewEvent`].
//!
//! [`MessageNewEvent`]: super::event::MessageNewEvent
//! [`NotificationNewMessageEvent`]: super::event::NotificationNewMessageEvent

use std::collections::HashMap;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use url::Url;

use crate::internal::prelude::*;
use crate::model::call::{CallMember, CallParticipant, CallReaction, CallRecording, CallResponse};
use crate::model::error::Error as ModelError;
use crate::model::event::{
    decode, discriminant, AnyEvent, ChannelCreatedEvent, ChannelDeletedEvent, ChannelFrozenEvent,
    ChannelHiddenEvent, ChannelKickedEvent, ChannelTruncatedEvent, ChannelUnfrozenEvent,
    ChannelUpdatedEvent, ChannelVisibleEvent, HealthCheckEvent, MemberAddedEvent,
    MemberRemovedEvent, MemberUpdatedEvent, MessageDeletedEvent, MessageNewEvent,
    MessageReadEvent, MessageUpdatedEvent, NotificationAddedToChannelEvent,
    NotificationChannelDeletedEvent, NotificationChannelMutesUpdatedEvent,
    NotificationChannelTruncatedEvent, NotificationInviteAcceptedEvent,
    NotificationInviteRejectedEvent, NotificationInvitedEvent, NotificationMarkReadEvent,
    NotificationMarkUnreadEvent, NotificationMutesUpdatedEvent, NotificationNewMessageEvent,
    NotificationRemovedFromChannelEvent, ReactionDeletedEvent, ReactionNewEvent,
    ReactionUpdatedEvent, TypingStartEvent, TypingStopEvent, UserBannedEvent,
    UserDeactivatedEvent, UserDeletedEvent, UserMutedEvent, UserPresenceChangedEvent,
    UserReactivatedEvent, UserUnbannedEvent, UserUpdatedEvent, UserWatchingStartEvent,
    UserWatchingStopEvent,
};
use crate::model::misc::ApiError;
use crate::model::timestamp::Timestamp;
use crate::model::user::{OwnUser, User};

/// Event data for a callee accepting a ringing call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallAcceptedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for a user being blocked from a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct BlockedUserEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    /// The user who was blocked.
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_by_user: Option<User>,
}

/// Event data for the creation of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallCreatedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub members: Vec<CallMember>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for the deletion of a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallDeletedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call being ended for everyone.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallEndedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    /// The user who ended the call, absent when the server did.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// Event data for an HLS broadcast failing to start or aborting.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallHlsBroadcastingFailedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for an HLS broadcast going live.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallHlsBroadcastingStartedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub hls_playlist_url: Url,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for an HLS broadcast being stopped.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallHlsBroadcastingStoppedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a backstage call going live.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallLiveStartedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for members being added to a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallMemberAddedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    /// The memberships that were created.
    pub members: Vec<CallMember>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for members being removed from a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallMemberRemovedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    /// The ids of the removed members.
    pub members: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for updates to call memberships.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallMemberUpdatedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub members: Vec<CallMember>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for call membership roles changing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallMemberUpdatedPermissionEvent {
    pub call: CallResponse,
    pub call_cid: String,
    /// The updated capability set of every affected role.
    pub capabilities_by_role: HashMap<String, Vec<String>>,
    pub created_at: Timestamp,
    pub members: Vec<CallMember>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call notification sent to an unringed member.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallNotificationEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub members: Vec<CallMember>,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for a participant requesting extra call permissions.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PermissionRequestEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    /// The permissions being requested, e.g. `send-audio`.
    pub permissions: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for the connected user's own call capabilities changing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UpdatedCallPermissionsEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub own_capabilities: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for a reaction sent into a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallReactionEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub reaction: CallReaction,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call recording failing.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRecordingFailedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a finished call recording becoming available.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRecordingReadyEvent {
    pub call_cid: String,
    pub call_recording: CallRecording,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call recording starting.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRecordingStartedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call recording being stopped.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRecordingStoppedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a callee rejecting a ringing call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRejectedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for an incoming ringing call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallRingEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub members: Vec<CallMember>,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for a call session ending.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallSessionEndedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a participant joining a call session.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallSessionParticipantJoinedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub participant: CallParticipant,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a participant leaving a call session.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallSessionParticipantLeftEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub participant: CallParticipant,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a call session starting.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallSessionStartedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub created_at: Timestamp,
    pub session_id: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a blocked user being unblocked on a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UnblockedUserEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: User,
}

/// Event data for an update to a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallUpdatedEvent {
    pub call: CallResponse,
    pub call_cid: String,
    pub capabilities_by_role: HashMap<String, Vec<String>>,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for a participant being muted inside a call.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct CallUserMutedEvent {
    pub call_cid: String,
    pub created_at: Timestamp,
    pub from_user_id: String,
    pub muted_user_ids: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for the handshake confirmation after connecting.
///
/// On this surface `connection.ok` resolves here, not to
/// [`HealthCheckEvent`].
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConnectedEvent {
    pub connection_id: String,
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub me: Option<OwnUser>,
}

/// Event data for the server refusing or dropping a connection.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct ConnectionErrorEvent {
    pub connection_id: String,
    pub created_at: Timestamp,
    pub error: ApiError,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Event data for the periodic reminder about unread messages.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct UserUnreadReminderEvent {
    pub created_at: Timestamp,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
}

/// A video socket event, resolved to its concrete payload.
///
/// The union is closed in the same way as [`super::event::Event`]; the two
/// surfaces simply close over different tag sets.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum VideoEvent {
    CallAccepted(CallAcceptedEvent),
    CallBlockedUser(BlockedUserEvent),
    CallCreated(CallCreatedEvent),
    CallDeleted(CallDeletedEvent),
    CallEnded(CallEndedEvent),
    CallHlsBroadcastingFailed(CallHlsBroadcastingFailedEvent),
    CallHlsBroadcastingStarted(CallHlsBroadcastingStartedEvent),
    CallHlsBroadcastingStopped(CallHlsBroadcastingStoppedEvent),
    CallLiveStarted(CallLiveStartedEvent),
    CallMemberAdded(CallMemberAddedEvent),
    CallMemberRemoved(CallMemberRemovedEvent),
    CallMemberUpdated(CallMemberUpdatedEvent),
    CallMemberUpdatedPermission(CallMemberUpdatedPermissionEvent),
    CallNotification(CallNotificationEvent),
    CallPermissionRequest(PermissionRequestEvent),
    CallPermissionsUpdated(UpdatedCallPermissionsEvent),
    CallReactionNew(CallReactionEvent),
    CallRecordingFailed(CallRecordingFailedEvent),
    CallRecordingReady(CallRecordingReadyEvent),
    CallRecordingStarted(CallRecordingStartedEvent),
    CallRecordingStopped(CallRecordingStoppedEvent),
    CallRejected(CallRejectedEvent),
    CallRing(CallRingEvent),
    CallSessionEnded(CallSessionEndedEvent),
    CallSessionParticipantJoined(CallSessionParticipantJoinedEvent),
    CallSessionParticipantLeft(CallSessionParticipantLeftEvent),
    CallSessionStarted(CallSessionStartedEvent),
    CallUnblockedUser(UnblockedUserEvent),
    CallUpdated(CallUpdatedEvent),
    CallUserMuted(CallUserMutedEvent),
    ChannelCreated(ChannelCreatedEvent),
    ChannelDeleted(ChannelDeletedEvent),
    ChannelFrozen(ChannelFrozenEvent),
    ChannelHidden(ChannelHiddenEvent),
    ChannelKicked(ChannelKickedEvent),
    ChannelTruncated(ChannelTruncatedEvent),
    ChannelUnfrozen(ChannelUnfrozenEvent),
    ChannelUpdated(ChannelUpdatedEvent),
    ChannelVisible(ChannelVisibleEvent),
    ConnectionError(ConnectionErrorEvent),
    Connected(ConnectedEvent),
    Any(AnyEvent),
    HealthCheck(HealthCheckEvent),
    MemberAdded(MemberAddedEvent),
    MemberRemoved(MemberRemovedEvent),
    MemberUpdated(MemberUpdatedEvent),
    MessageDeleted(MessageDeletedEvent),
    MessageNew(MessageNewEvent),
    MessageRead(MessageReadEvent),
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
    TypingStart(TypingStartEvent),
    TypingStop(TypingStopEvent),
    UserBanned(UserBannedEvent),
    UserDeactivated(UserDeactivatedEvent),
    UserDeleted(UserDeletedEvent),
    UserMuted(UserMutedEvent),
    UserPresenceChanged(UserPresenceChangedEvent),
    UserReactivated(UserReactivatedEvent),
    UserUnbanned(UserUnbannedEvent),
    UserUnreadReminder(UserUnreadReminderEvent),
    UserUpdated(UserUpdatedEvent),
    UserWatchingStart(UserWatchingStartEvent),
    UserWatchingStop(UserWatchingStopEvent),
}

impl VideoEvent {
    /// Decodes one raw frame into a concrete event.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::MalformedEnvelope`] if the frame has no string
    /// `type` field, [`ModelError::UnknownEventType`] if the tag is not in
    /// this surface's dispatch table, and [`ModelError::FieldDecode`] if a
    /// payload field is missing or mistyped.
    pub fn parse(value: Value) -> Result<Self> {
        let tag = discriminant(&value)?;
        deserialize_video_event_with_tag(&tag, value)
    }

    /// Decodes one raw frame from its JSON text.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let mut owned = input.to_owned();
        let value: Value = crate::json::from_str(&mut owned)?;
        Self::parse(value)
    }

    /// Returns the literal wire tag the event was decoded from.
    #[must_use]
    pub fn event_type(&self) -> &str {
        match self {
            Self::CallAccepted(e) => &e.kind,
            Self::CallBlockedUser(e) => &e.kind,
            Self::CallCreated(e) => &e.kind,
            Self::CallDeleted(e) => &e.kind,
            Self::CallEnded(e) => &e.kind,
            Self::CallHlsBroadcastingFailed(e) => &e.kind,
            Self::CallHlsBroadcastingStarted(e) => &e.kind,
            Self::CallHlsBroadcastingStopped(e) => &e.kind,
            Self::CallLiveStarted(e) => &e.kind,
            Self::CallMemberAdded(e) => &e.kind,
            Self::CallMemberRemoved(e) => &e.kind,
            Self::CallMemberUpdated(e) => &e.kind,
            Self::CallMemberUpdatedPermission(e) => &e.kind,
            Self::CallNotification(e) => &e.kind,
            Self::CallPermissionRequest(e) => &e.kind,
            Self::CallPermissionsUpdated(e) => &e.kind,
            Self::CallReactionNew(e) => &e.kind,
            Self::CallRecordingFailed(e) => &e.kind,
            Self::CallRecordingReady(e) => &e.kind,
            Self::CallRecordingStarted(e) => &e.kind,
            Self::CallRecordingStopped(e) => &e.kind,
            Self::CallRejected(e) => &e.kind,
            Self::CallRing(e) => &e.kind,
            Self::CallSessionEnded(e) => &e.kind,
            Self::CallSessionParticipantJoined(e) => &e.kind,
            Self::CallSessionParticipantLeft(e) => &e.kind,
            Self::CallSessionStarted(e) => &e.kind,
            Self::CallUnblockedUser(e) => &e.kind,
            Self::CallUpdated(e) => &e.kind,
            Self::CallUserMuted(e) => &e.kind,
            Self::ChannelCreated(e) => &e.kind,
            Self::ChannelDeleted(e) => &e.kind,
            Self::ChannelFrozen(e) => &e.kind,
            Self::ChannelHidden(e) => &e.kind,
            Self::ChannelKicked(e) => &e.kind,
            Self::ChannelTruncated(e) => &e.kind,
            Self::ChannelUnfrozen(e) => &e.kind,
            Self::ChannelUpdated(e) => &e.kind,
            Self::ChannelVisible(e) => &e.kind,
            Self::ConnectionError(e) => &e.kind,
            Self::Connected(e) => &e.kind,
            Self::Any(e) => &e.kind,
            Self::HealthCheck(e) => &e.kind,
            Self::MemberAdded(e) => &e.kind,
            Self::MemberRemoved(e) => &e.kind,
            Self::MemberUpdated(e) => &e.kind,
            Self::MessageDeleted(e) => &e.kind,
            Self::MessageNew(e) => &e.kind,
            Self::MessageRead(e) => &e.kind,
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
            Self::TypingStart(e) => &e.kind,
            Self::TypingStop(e) => &e.kind,
            Self::UserBanned(e) => &e.kind,
            Self::UserDeactivated(e) => &e.kind,
            Self::UserDeleted(e) => &e.kind,
            Self::UserMuted(e) => &e.kind,
            Self::UserPresenceChanged(e) => &e.kind,
            Self::UserReactivated(e) => &e.kind,
            Self::UserUnbanned(e) => &e.kind,
            Self::UserUnreadReminder(e) => &e.kind,
            Self::UserUpdated(e) => &e.kind,
            Self::UserWatchingStart(e) => &e.kind,
            Self::UserWatchingStop(e) => &e.kind,
        }
    }

    /// Returns when the server emitted the event.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        match self {
            Self::CallAccepted(e) => e.created_at,
            Self::CallBlockedUser(e) => e.created_at,
            Self::CallCreated(e) => e.created_at,
            Self::CallDeleted(e) => e.created_at,
            Self::CallEnded(e) => e.created_at,
            Self::CallHlsBroadcastingFailed(e) => e.created_at,
            Self::CallHlsBroadcastingStarted(e) => e.created_at,
            Self::CallHlsBroadcastingStopped(e) => e.created_at,
            Self::CallLiveStarted(e) => e.created_at,
            Self::CallMemberAdded(e) => e.created_at,
            Self::CallMemberRemoved(e) => e.created_at,
            Self::CallMemberUpdated(e) => e.created_at,
            Self::CallMemberUpdatedPermission(e) => e.created_at,
            Self::CallNotification(e) => e.created_at,
            Self::CallPermissionRequest(e) => e.created_at,
            Self::CallPermissionsUpdated(e) => e.created_at,
            Self::CallReactionNew(e) => e.created_at,
            Self::CallRecordingFailed(e) => e.created_at,
            Self::CallRecordingReady(e) => e.created_at,
            Self::CallRecordingStarted(e) => e.created_at,
            Self::CallRecordingStopped(e) => e.created_at,
            Self::CallRejected(e) => e.created_at,
            Self::CallRing(e) => e.created_at,
            Self::CallSessionEnded(e) => e.created_at,
            Self::CallSessionParticipantJoined(e) => e.created_at,
            Self::CallSessionParticipantLeft(e) => e.created_at,
            Self::CallSessionStarted(e) => e.created_at,
            Self::CallUnblockedUser(e) => e.created_at,
            Self::CallUpdated(e) => e.created_at,
            Self::CallUserMuted(e) => e.created_at,
            Self::ChannelCreated(e) => e.created_at,
            Self::ChannelDeleted(e) => e.created_at,
            Self::ChannelFrozen(e) => e.created_at,
            Self::ChannelHidden(e) => e.created_at,
            Self::ChannelKicked(e) => e.created_at,
            Self::ChannelTruncated(e) => e.created_at,
            Self::ChannelUnfrozen(e) => e.created_at,
            Self::ChannelUpdated(e) => e.created_at,
            Self::ChannelVisible(e) => e.created_at,
            Self::ConnectionError(e) => e.created_at,
            Self::Connected(e) => e.created_at,
            Self::Any(e) => e.created_at,
            Self::HealthCheck(e) => e.created_at,
            Self::MemberAdded(e) => e.created_at,
            Self::MemberRemoved(e) => e.created_at,
            Self::MemberUpdated(e) => e.created_at,
            Self::MessageDeleted(e) => e.created_at,
            Self::MessageNew(e) => e.created_at,
            Self::MessageRead(e) => e.created_at,
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
            Self::TypingStart(e) => e.created_at,
            Self::TypingStop(e) => e.created_at,
            Self::UserBanned(e) => e.created_at,
            Self::UserDeactivated(e) => e.created_at,
            Self::UserDeleted(e) => e.created_at,
            Self::UserMuted(e) => e.created_at,
            Self::UserPresenceChanged(e) => e.created_at,
            Self::UserReactivated(e) => e.created_at,
            Self::UserUnbanned(e) => e.created_at,
            Self::UserUnreadReminder(e) => e.created_at,
            Self::UserUpdated(e) => e.created_at,
            Self::UserWatchingStart(e) => e.created_at,
            Self::UserWatchingStop(e) => e.created_at,
        }
    }

    /// Returns the composite call identifier for call-scoped events, or
    /// `None` for chat- and connection-scoped ones.
    #[must_use]
    pub fn call_cid(&self) -> Option<&str> {
        match self {
            Self::CallAccepted(e) => Some(&e.call_cid),
            Self::CallBlockedUser(e) => Some(&e.call_cid),
            Self::CallCreated(e) => Some(&e.call_cid),
            Self::CallDeleted(e) => Some(&e.call_cid),
            Self::CallEnded(e) => Some(&e.call_cid),
            Self::CallHlsBroadcastingFailed(e) => Some(&e.call_cid),
            Self::CallHlsBroadcastingStarted(e) => Some(&e.call_cid),
            Self::CallHlsBroadcastingStopped(e) => Some(&e.call_cid),
            Self::CallLiveStarted(e) => Some(&e.call_cid),
            Self::CallMemberAdded(e) => Some(&e.call_cid),
            Self::CallMemberRemoved(e) => Some(&e.call_cid),
            Self::CallMemberUpdated(e) => Some(&e.call_cid),
            Self::CallMemberUpdatedPermission(e) => Some(&e.call_cid),
            Self::CallNotification(e) => Some(&e.call_cid),
            Self::CallPermissionRequest(e) => Some(&e.call_cid),
            Self::CallPermissionsUpdated(e) => Some(&e.call_cid),
            Self::CallReactionNew(e) => Some(&e.call_cid),
            Self::CallRecordingFailed(e) => Some(&e.call_cid),
            Self::CallRecordingReady(e) => Some(&e.call_cid),
            Self::CallRecordingStarted(e) => Some(&e.call_cid),
            Self::CallRecordingStopped(e) => Some(&e.call_cid),
            Self::CallRejected(e) => Some(&e.call_cid),
            Self::CallRing(e) => Some(&e.call_cid),
            Self::CallSessionEnded(e) => Some(&e.call_cid),
            Self::CallSessionParticipantJoined(e) => Some(&e.call_cid),
            Self::CallSessionParticipantLeft(e) => Some(&e.call_cid),
            Self::CallSessionStarted(e) => Some(&e.call_cid),
            Self::CallUnblockedUser(e) => Some(&e.call_cid),
            Self::CallUpdated(e) => Some(&e.call_cid),
            Self::CallUserMuted(e) => Some(&e.call_cid),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for VideoEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> StdResult<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::parse(value).map_err(DeError::custom)
    }
}

/// Deserializes a frame already known to carry the given tag, using the
/// video surface's tag table.
pub fn deserialize_video_event_with_tag(tag: &str, value: Value) -> Result<VideoEvent> {
    Ok(match tag {
        "call.accepted" => VideoEvent::CallAccepted(decode(value)?),
        "call.blocked_user" => VideoEvent::CallBlockedUser(decode(value)?),
        "call.created" => VideoEvent::CallCreated(decode(value)?),
        "call.deleted" => VideoEvent::CallDeleted(decode(value)?),
        "call.ended" => VideoEvent::CallEnded(decode(value)?),
        "call.hls_broadcasting_failed" => VideoEvent::CallHlsBroadcastingFailed(decode(value)?),
        "call.hls_broadcasting_started" => VideoEvent::CallHlsBroadcastingStarted(decode(value)?),
        "call.hls_broadcasting_stopped" => VideoEvent::CallHlsBroadcastingStopped(decode(value)?),
        "call.live_started" => VideoEvent::CallLiveStarted(decode(value)?),
        "call.member_added" => VideoEvent::CallMemberAdded(decode(value)?),
        "call.member_removed" => VideoEvent::CallMemberRemoved(decode(value)?),
        "call.member_updated" => VideoEvent::CallMemberUpdated(decode(value)?),
        "call.member_updated_permission" => {
            VideoEvent::CallMemberUpdatedPermission(decode(value)?)
        },
        "call.notification" => VideoEvent::CallNotification(decode(value)?),
        "call.permission_request" => VideoEvent::CallPermissionRequest(decode(value)?),
        "call.permissions_updated" => VideoEvent::CallPermissionsUpdated(decode(value)?),
        "call.reaction_new" => VideoEvent::CallReactionNew(decode(value)?),
        "call.recording_failed" => VideoEvent::CallRecordingFailed(decode(value)?),
        "call.recording_ready" => VideoEvent::CallRecordingReady(decode(value)?),
        "call.recording_started" => VideoEvent::CallRecordingStarted(decode(value)?),
        "call.recording_stopped" => VideoEvent::CallRecordingStopped(decode(value)?),
        "call.rejected" => VideoEvent::CallRejected(decode(value)?),
        "call.ring" => VideoEvent::CallRing(decode(value)?),
        "call.session_ended" => VideoEvent::CallSessionEnded(decode(value)?),
        "call.session_participant_joined" => {
            VideoEvent::CallSessionParticipantJoined(decode(value)?)
        },
        "call.session_participant_left" => VideoEvent::CallSessionParticipantLeft(decode(value)?),
        "call.session_started" => VideoEvent::CallSessionStarted(decode(value)?),
        "call.unblocked_user" => VideoEvent::CallUnblockedUser(decode(value)?),
        "call.updated" => VideoEvent::CallUpdated(decode(value)?),
        "call.user_muted" => VideoEvent::CallUserMuted(decode(value)?),
        "channel.created" => VideoEvent::ChannelCreated(decode(value)?),
        "channel.deleted" => VideoEvent::ChannelDeleted(decode(value)?),
        "channel.frozen" => VideoEvent::ChannelFrozen(decode(value)?),
        "channel.hidden" => VideoEvent::ChannelHidden(decode(value)?),
        "channel.kicked" => VideoEvent::ChannelKicked(decode(value)?),
        "channel.truncated" => VideoEvent::ChannelTruncated(decode(value)?),
        "channel.unfrozen" => VideoEvent::ChannelUnfrozen(decode(value)?),
        "channel.updated" => VideoEvent::ChannelUpdated(decode(value)?),
        "channel.visible" => VideoEvent::ChannelVisible(decode(value)?),
        "connection.error" => VideoEvent::ConnectionError(decode(value)?),
        "connection.ok" => VideoEvent::Connected(decode(value)?),
        "custom" => VideoEvent::Any(decode(value)?),
        "health.check" => VideoEvent::HealthCheck(decode(value)?),
        "member.added" => VideoEvent::MemberAdded(decode(value)?),
        "member.removed" => VideoEvent::MemberRemoved(decode(value)?),
        "member.updated" => VideoEvent::MemberUpdated(decode(value)?),
        "message.deleted" => VideoEvent::MessageDeleted(decode(value)?),
        "message.new" => VideoEvent::MessageNew(decode(value)?),
        "message.read" => VideoEvent::MessageRead(decode(value)?),
        "message.updated" => VideoEvent::MessageUpdated(decode(value)?),
        "notification.added_to_channel" => VideoEvent::NotificationAddedToChannel(decode(value)?),
        "notification.channel_deleted" => VideoEvent::NotificationChannelDeleted(decode(value)?),
        "notification.channel_mutes_updated" => {
            VideoEvent::NotificationChannelMutesUpdated(decode(value)?)
        },
        "notification.channel_truncated" => {
            VideoEvent::NotificationChannelTruncated(decode(value)?)
        },
        "notification.invite_accepted" => VideoEvent::NotificationInviteAccepted(decode(value)?),
        "notification.invite_rejected" => VideoEvent::NotificationInviteRejected(decode(value)?),
        "notification.invited" => VideoEvent::NotificationInvited(decode(value)?),
        "notification.mark_read" => VideoEvent::NotificationMarkRead(decode(value)?),
        "notification.mark_unread" => VideoEvent::NotificationMarkUnread(decode(value)?),
        "notification.message_new" | "notification.thread_message_new" => {
            VideoEvent::NotificationNewMessage(decode(value)?)
        },
        "notification.mutes_updated" => VideoEvent::NotificationMutesUpdated(decode(value)?),
        "notification.removed_from_channel" => {
            VideoEvent::NotificationRemovedFromChannel(decode(value)?)
        },
        "reaction.deleted" => VideoEvent::ReactionDeleted(decode(value)?),
        "reaction.new" => VideoEvent::ReactionNew(decode(value)?),
        "reaction.updated" => VideoEvent::ReactionUpdated(decode(value)?),
        "typing.start" => VideoEvent::TypingStart(decode(value)?),
        "typing.stop" => VideoEvent::TypingStop(decode(value)?),
        "user.banned" => VideoEvent::UserBanned(decode(value)?),
        "user.deactivated" => VideoEvent::UserDeactivated(decode(value)?),
        "user.deleted" => VideoEvent::UserDeleted(decode(value)?),
        "user.muted" => VideoEvent::UserMuted(decode(value)?),
        "user.presence.changed" => VideoEvent::UserPresenceChanged(decode(value)?),
        "user.reactivated" => VideoEvent::UserReactivated(decode(value)?),
        "user.unbanned" => VideoEvent::UserUnbanned(decode(value)?),
        "user.unread_message_reminder" => VideoEvent::UserUnreadReminder(decode(value)?),
        "user.updated" => VideoEvent::UserUpdated(decode(value)?),
        "user.watching.start" => VideoEvent::UserWatchingStart(decode(value)?),
        "user.watching.stop" => VideoEvent::UserWatchingStop(decode(value)?),
        _ => {
            tracing::debug!(tag, "refusing to decode unrecognised video event tag");

            return Err(Error::Model(ModelError::UnknownEventType(tag.to_owned())));
        },
    })
}
