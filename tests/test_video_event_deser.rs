//! Deserialization of the video socket's tag table, including the points
//! where it deliberately diverges from the chat table.

use rill::model::error::Error as ModelError;
use rill::model::video::VideoEvent;
use rill::Error;
use serde_json::{json, Value};

/// A minimal valid call object, as embedded in most `call.*` payloads.
fn call_response() -> Value {
    json!({
        "backstage": false,
        "blocked_user_ids": [],
        "cid": "default:standup",
        "created_at": "2024-01-01T00:00:00Z",
        "created_by": {"id": "host"},
        "current_session_id": "s1",
        "custom": {},
        "egress": {"broadcasting": false},
        "id": "standup",
        "ingress": {"rtmp": {"address": "rtmp://ingest.example.com/standup"}},
        "recording": false,
        "settings": {},
        "transcribing": false,
        "type": "default",
        "updated_at": "2024-01-01T00:00:00Z",
    })
}

fn call_member() -> Value {
    json!({
        "created_at": "2024-01-01T00:00:00Z",
        "custom": {},
        "updated_at": "2024-01-01T00:00:00Z",
        "user": {"id": "callee"},
        "user_id": "callee",
    })
}

/// The shared base of call-scoped payloads.
fn call_event(tag: &str) -> Value {
    json!({
        "type": tag,
        "call_cid": "default:standup",
        "created_at": "2024-01-01T00:00:00Z",
    })
}

fn assert_tag(payload: Value) -> VideoEvent {
    let tag = payload["type"].as_str().unwrap().to_owned();
    let event = VideoEvent::parse(payload).unwrap();
    assert_eq!(event.event_type(), tag);
    event
}

#[test]
fn call_accepted() {
    let mut payload = call_event("call.accepted");
    payload["call"] = call_response();
    payload["user"] = json!({"id": "callee"});
    let event = assert_tag(payload);
    assert_eq!(event.call_cid(), Some("default:standup"));
}

#[test]
fn call_blocked_user() {
    let mut payload = call_event("call.blocked_user");
    payload["user"] = json!({"id": "troll"});
    assert_tag(payload);
}

#[test]
fn call_created() {
    let mut payload = call_event("call.created");
    payload["call"] = call_response();
    payload["members"] = json!([call_member()]);
    assert_tag(payload);
}

#[test]
fn call_deleted() {
    let mut payload = call_event("call.deleted");
    payload["call"] = call_response();
    assert_tag(payload);
}

#[test]
fn call_ended() {
    let mut payload = call_event("call.ended");
    payload["call"] = call_response();
    assert_tag(payload);
}

#[test]
fn call_hls_broadcasting_failed() {
    assert_tag(call_event("call.hls_broadcasting_failed"));
}

#[test]
fn call_hls_broadcasting_started() {
    let mut payload = call_event("call.hls_broadcasting_started");
    payload["hls_playlist_url"] = json!("https://cdn.example.com/hls/standup.m3u8");
    assert_tag(payload);
}

#[test]
fn call_hls_broadcasting_stopped() {
    assert_tag(call_event("call.hls_broadcasting_stopped"));
}

#[test]
fn call_live_started() {
    let mut payload = call_event("call.live_started");
    payload["call"] = call_response();
    assert_tag(payload);
}

#[test]
fn call_member_added() {
    let mut payload = call_event("call.member_added");
    payload["call"] = call_response();
    payload["members"] = json!([call_member()]);
    assert_tag(payload);
}

#[test]
fn call_member_removed() {
    let mut payload = call_event("call.member_removed");
    payload["call"] = call_response();
    payload["members"] = json!(["callee"]);
    assert_tag(payload);
}

#[test]
fn call_member_updated() {
    let mut payload = call_event("call.member_updated");
    payload["call"] = call_response();
    payload["members"] = json!([call_member()]);
    assert_tag(payload);
}

#[test]
fn call_member_updated_permission() {
    let mut payload = call_event("call.member_updated_permission");
    payload["call"] = call_response();
    payload["capabilities_by_role"] = json!({"host": ["send-audio", "send-video"]});
    payload["members"] = json!([call_member()]);
    assert_tag(payload);
}

#[test]
fn call_notification() {
    let mut payload = call_event("call.notification");
    payload["call"] = call_response();
    payload["members"] = json!([call_member()]);
    payload["session_id"] = json!("s1");
    payload["user"] = json!({"id": "host"});
    assert_tag(payload);
}

#[test]
fn call_permission_request() {
    let mut payload = call_event("call.permission_request");
    payload["permissions"] = json!(["send-audio"]);
    payload["user"] = json!({"id": "viewer"});
    assert_tag(payload);
}

#[test]
fn call_permissions_updated() {
    let mut payload = call_event("call.permissions_updated");
    payload["own_capabilities"] = json!(["send-audio"]);
    payload["user"] = json!({"id": "viewer"});
    assert_tag(payload);
}

#[test]
fn call_reaction_new() {
    let mut payload = call_event("call.reaction_new");
    payload["reaction"] = json!({"type": "raised-hand", "user": {"id": "viewer"}});
    assert_tag(payload);
}

#[test]
fn call_recording_failed() {
    assert_tag(call_event("call.recording_failed"));
}

#[test]
fn call_recording_ready() {
    let mut payload = call_event("call.recording_ready");
    payload["call_recording"] = json!({
        "end_time": "2024-01-01T01:00:00Z",
        "filename": "standup.mp4",
        "start_time": "2024-01-01T00:00:00Z",
        "url": "https://cdn.example.com/recordings/standup.mp4",
    });
    assert_tag(payload);
}

#[test]
fn call_recording_started() {
    assert_tag(call_event("call.recording_started"));
}

#[test]
fn call_recording_stopped() {
    assert_tag(call_event("call.recording_stopped"));
}

#[test]
fn call_rejected() {
    let mut payload = call_event("call.rejected");
    payload["call"] = call_response();
    payload["user"] = json!({"id": "callee"});
    assert_tag(payload);
}

#[test]
fn call_ring() {
    let mut payload = call_event("call.ring");
    payload["call"] = call_response();
    payload["members"] = json!([call_member()]);
    payload["session_id"] = json!("s1");
    payload["user"] = json!({"id": "host"});
    assert_tag(payload);
}

#[test]
fn call_session_ended() {
    let mut payload = call_event("call.session_ended");
    payload["call"] = call_response();
    payload["session_id"] = json!("s1");
    assert_tag(payload);
}

#[test]
fn call_session_participant_joined() {
    let mut payload = call_event("call.session_participant_joined");
    payload["participant"] = json!({
        "joined_at": "2024-01-01T00:00:10Z",
        "role": "user",
        "user": {"id": "viewer"},
        "user_session_id": "us1",
    });
    payload["session_id"] = json!("s1");
    assert_tag(payload);
}

#[test]
fn call_session_participant_left() {
    let mut payload = call_event("call.session_participant_left");
    payload["participant"] = json!({
        "joined_at": "2024-01-01T00:00:10Z",
        "role": "user",
        "user": {"id": "viewer"},
        "user_session_id": "us1",
    });
    payload["session_id"] = json!("s1");
    assert_tag(payload);
}

#[test]
fn call_session_started() {
    let mut payload = call_event("call.session_started");
    payload["call"] = call_response();
    payload["session_id"] = json!("s1");
    assert_tag(payload);
}

#[test]
fn call_unblocked_user() {
    let mut payload = call_event("call.unblocked_user");
    payload["user"] = json!({"id": "troll"});
    assert_tag(payload);
}

#[test]
fn call_updated() {
    let mut payload = call_event("call.updated");
    payload["call"] = call_response();
    payload["capabilities_by_role"] = json!({"host": ["send-audio"]});
    assert_tag(payload);
}

#[test]
fn call_user_muted() {
    let mut payload = call_event("call.user_muted");
    payload["from_user_id"] = json!("host");
    payload["muted_user_ids"] = json!(["viewer"]);
    assert_tag(payload);
}

#[test]
fn connection_error() {
    let event = assert_tag(json!({
        "type": "connection.error",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
        "error": {
            "code": 40,
            "duration": "0.00ms",
            "message": "token expired",
            "more_info": "https://docs.example.com/errors/40",
            "StatusCode": 401,
        },
    }));

    match event {
        VideoEvent::ConnectionError(event) => {
            assert_eq!(event.error.status_code, 401);
            assert_eq!(event.error.message, "token expired");
        },
        other => panic!("expected a connection error, got {other:?}"),
    }
}

// On this surface `connection.ok` is its own handshake event, not a
// health-check alias.
#[test]
fn connection_ok_is_a_distinct_connected_event() {
    let event = assert_tag(json!({
        "type": "connection.ok",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
    }));

    match event {
        VideoEvent::Connected(event) => assert!(event.me.is_none()),
        other => panic!("expected a connected event, got {other:?}"),
    }
}

#[test]
fn health_check() {
    let event = assert_tag(json!({
        "type": "health.check",
        "cid": "*",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
    }));

    assert!(matches!(event, VideoEvent::HealthCheck(_)));
}

#[test]
fn user_unread_message_reminder() {
    let event = assert_tag(json!({
        "type": "user.unread_message_reminder",
        "created_at": "2024-01-01T00:00:00Z",
        "user": {"id": "viewer"},
    }));

    assert!(matches!(event, VideoEvent::UserUnreadReminder(_)));
}

// The chat surface routes this tag to a new-message payload; here it lands
// on the notification-family variant instead.
#[test]
fn notification_thread_message_new_aliases_to_notification_new_message() {
    let event = assert_tag(json!({
        "type": "notification.thread_message_new",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
    }));

    assert!(matches!(event, VideoEvent::NotificationNewMessage(_)));
}

#[test]
fn chat_shaped_tags_still_resolve() {
    let event = assert_tag(json!({
        "type": "message.new",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
        "watcher_count": 3,
    }));

    assert!(matches!(event, VideoEvent::MessageNew(_)));
}

// Tags the chat table knows but this one dropped.
#[test]
fn thread_updated_is_unknown_here() {
    let payload = json!({
        "type": "thread.updated",
        "created_at": "2024-01-01T00:00:00Z",
    });

    match VideoEvent::parse(payload) {
        Err(Error::Model(ModelError::UnknownEventType(tag))) => {
            assert_eq!(tag, "thread.updated");
        },
        other => panic!("expected an unknown-event failure, got {other:?}"),
    }
}

#[test]
fn message_undeleted_is_unknown_here() {
    let payload = json!({
        "type": "message.undeleted",
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
    });

    match VideoEvent::parse(payload) {
        Err(Error::Model(ModelError::UnknownEventType(tag))) => {
            assert_eq!(tag, "message.undeleted");
        },
        other => panic!("expected an unknown-event failure, got {other:?}"),
    }
}

#[test]
fn missing_call_field_names_the_field() {
    // call.accepted without its `call` object.
    let mut payload = call_event("call.accepted");
    payload["user"] = json!({"id": "callee"});

    match VideoEvent::parse(payload) {
        Err(Error::Model(ModelError::FieldDecode {
            field,
            ..
        })) => assert_eq!(field.as_deref(), Some("call")),
        other => panic!("expected a field-decode failure, got {other:?}"),
    }
}
