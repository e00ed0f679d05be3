//! Models relating to messages, reactions and threads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::internal::prelude::*;
use crate::model::channel::ChannelResponse;
use crate::model::timestamp::Timestamp;
use crate::model::user::User;

/// A message inside a channel.
///
/// The embedded [`User`], [`Reaction`] and quoted-message values are plain
/// value containment: copies that travelled with the payload, not live
/// references into any other record.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Message {
    pub attachments: Vec<Attachment>,
    pub cid: String,
    pub created_at: Timestamp,
    /// The number of replies that have been soft-deleted.
    pub deleted_reply_count: u64,
    /// The server-rendered HTML form of [`Self::text`].
    pub html: String,
    pub id: String,
    /// The most recent reactions, newest first.
    pub latest_reactions: Vec<Reaction>,
    pub mentioned_users: Vec<User>,
    /// The connected user's own reactions to the message.
    pub own_reactions: Vec<Reaction>,
    pub pinned: bool,
    pub reaction_counts: HashMap<String, u64>,
    pub reaction_scores: HashMap<String, u64>,
    pub reply_count: u64,
    pub shadowed: bool,
    pub silent: bool,
    pub text: String,
    /// The message type, e.g. `regular`, `system` or `deleted`.
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before_message_send_failed: Option<bool>,
    /// The slash command that produced the message, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    /// Per-language translations of the text, keyed by language code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub i18n: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_labels: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mml: Option<String>,
    /// Set when the message is a thread reply.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_expires: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quoted_message_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_channel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_participants: Option<Vec<User>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    /// Application-defined extra data attached to the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// A file, image or link preview attached to a message.
///
/// Every field is optional; which ones are set depends entirely on the
/// attachment type.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Plain-text summary shown by clients that cannot render the attachment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<AttachmentField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub og_scrape_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_height: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_width: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretext: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title_link: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// One table row of an [`Attachment`].
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct AttachmentField {
    pub short: bool,
    pub title: String,
    pub value: String,
}

/// A reaction left on a message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Reaction {
    pub created_at: Timestamp,
    pub message_id: String,
    /// The weight of the reaction; plain reactions score 1.
    pub score: u64,
    /// The reaction type, e.g. `like` or `haha`.
    #[serde(rename = "type")]
    pub kind: String,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<JsonMap>,
}

/// A message thread rooted at one parent message.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct Thread {
    pub channel_cid: String,
    pub created_at: Timestamp,
    pub parent_message_id: String,
    pub title: String,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<ChannelResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_message_at: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_message: Option<Box<Message>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub participant_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_count: Option<u64>,
}
