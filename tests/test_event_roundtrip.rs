//! The round-trip laws: `decode(encode(v)) == v`, and `encode(decode(p))` is
//! wire-equivalent to `p` modulo key ordering.

use rill::model::event::Event;
use rill::model::video::VideoEvent;
use serde_json::{json, Value};

fn assert_chat_roundtrip(payload: Value) {
    let event = Event::parse(payload.clone()).unwrap();

    let encoded = serde_json::to_value(&event).unwrap();
    assert_eq!(encoded, payload);

    let reparsed = Event::parse(encoded).unwrap();
    assert_eq!(reparsed, event);
}

fn assert_video_roundtrip(payload: Value) {
    let event = VideoEvent::parse(payload.clone()).unwrap();

    let encoded = serde_json::to_value(&event).unwrap();
    assert_eq!(encoded, payload);

    let reparsed = VideoEvent::parse(encoded).unwrap();
    assert_eq!(reparsed, event);
}

#[test]
fn message_new_with_embedded_message() {
    assert_chat_roundtrip(json!({
        "type": "message.new",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
        "watcher_count": 7,
        "message": {
            "attachments": [],
            "cid": "messaging:general",
            "created_at": "2024-01-01T00:00:00Z",
            "deleted_reply_count": 0,
            "html": "<p>hi</p>",
            "id": "m1",
            "latest_reactions": [],
            "mentioned_users": [],
            "own_reactions": [],
            "pinned": false,
            "reaction_counts": {"like": 2},
            "reaction_scores": {"like": 2},
            "reply_count": 0,
            "shadowed": false,
            "silent": false,
            "text": "hi",
            "type": "regular",
            "updated_at": "2024-01-01T00:00:00Z",
            "user": {"id": "jo", "name": "Jo", "online": true},
        },
        "user": {"id": "jo", "name": "Jo", "online": true},
    }));
}

#[test]
fn user_banned_with_optionals() {
    assert_chat_roundtrip(json!({
        "type": "user.banned",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
        "created_by": {"id": "moderator"},
        "shadow": true,
        "expiration": "2024-02-01T00:00:00Z",
        "reason": "spam",
        "team": "blue",
        "user": {"id": "troll"},
    }));
}

#[test]
fn custom_event_payload_body_survives() {
    assert_chat_roundtrip(json!({
        "type": "custom",
        "created_at": "2024-01-01T00:00:00Z",
        "Custom": {"poll": {"question": "lunch?", "votes": [1, 2, 3]}},
    }));
}

#[test]
fn health_check_with_own_user() {
    assert_chat_roundtrip(json!({
        "type": "health.check",
        "cid": "*",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
        "me": {
            "channel_mutes": [],
            "created_at": "2023-06-01T09:30:00Z",
            "devices": [{
                "created_at": "2023-06-01T09:30:00Z",
                "id": "token-1",
                "push_provider": "apn",
            }],
            "id": "jo",
            "language": "en",
            "mutes": [],
            "role": "user",
            "total_unread_count": 4,
            "unread_channels": 1,
            "unread_count": 4,
            "unread_threads": 0,
            "updated_at": "2024-01-01T00:00:00Z",
        },
    }));
}

#[test]
fn notification_mark_unread_counters_survive() {
    assert_chat_roundtrip(json!({
        "type": "notification.mark_unread",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
        "first_unread_message_id": "m77",
        "last_read_at": "2023-12-31T23:00:00Z",
        "total_unread_count": 4,
        "unread_channels": 1,
        "unread_count": 4,
        "unread_messages": 4,
        "thread_id": "m70",
    }));
}

#[test]
fn call_created_with_full_call_object() {
    assert_video_roundtrip(json!({
        "type": "call.created",
        "call_cid": "default:standup",
        "created_at": "2024-01-01T00:00:00Z",
        "call": {
            "backstage": false,
            "blocked_user_ids": [],
            "cid": "default:standup",
            "created_at": "2024-01-01T00:00:00Z",
            "created_by": {"id": "host"},
            "current_session_id": "s1",
            "custom": {"agenda": "retro"},
            "egress": {
                "broadcasting": true,
                "hls": {"playlist_url": "https://cdn.example.com/hls/standup.m3u8"},
            },
            "id": "standup",
            "ingress": {"rtmp": {"address": "rtmp://ingest.example.com/standup"}},
            "recording": false,
            "settings": {
                "audio": {
                    "access_request_enabled": true,
                    "default_device": "speaker",
                    "mic_default_on": true,
                    "opus_dtx_enabled": false,
                    "redundant_coding_enabled": false,
                    "speaker_default_on": true,
                },
                "backstage": {"enabled": false},
                "ring": {
                    "auto_cancel_timeout_ms": 30000,
                    "incoming_call_timeout_ms": 15000,
                },
            },
            "transcribing": false,
            "type": "default",
            "updated_at": "2024-01-01T00:00:00Z",
        },
        "members": [{
            "created_at": "2024-01-01T00:00:00Z",
            "custom": {},
            "updated_at": "2024-01-01T00:00:00Z",
            "user": {"id": "callee"},
            "user_id": "callee",
            "role": "call_member",
        }],
    }));
}

#[test]
fn connection_error_roundtrips_the_api_error() {
    assert_video_roundtrip(json!({
        "type": "connection.error",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
        "error": {
            "code": 40,
            "duration": "0.00ms",
            "message": "token expired",
            "more_info": "https://docs.example.com/errors/40",
            "StatusCode": 401,
            "unrecoverable": true,
        },
    }));
}

// The alias tag survives a round trip: the event re-encodes under the tag it
// arrived with, not the canonical one.
#[test]
fn alias_tag_is_retained_on_encode() {
    assert_chat_roundtrip(json!({
        "type": "connection.ok",
        "cid": "*",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
    }));
}
