//! DTO-level behavior: wire-key overrides, structural equality, hashing.

use std::collections::HashSet;

use rill::model::prelude::*;
use serde_json::json;

#[test]
fn api_error_uses_the_capitalized_status_code_key() {
    let error: ApiError = serde_json::from_value(json!({
        "code": 9,
        "duration": "1.21ms",
        "message": "rate limited",
        "more_info": "https://docs.example.com/errors/9",
        "StatusCode": 429,
    }))
    .unwrap();

    assert_eq!(error.status_code, 429);

    let encoded = serde_json::to_value(&error).unwrap();
    assert_eq!(encoded["StatusCode"], json!(429));
    assert!(encoded.get("status_code").is_none());
}

#[test]
fn any_event_uses_the_capitalized_custom_key() {
    let event: AnyEvent = serde_json::from_value(json!({
        "type": "custom",
        "created_at": "2024-01-01T00:00:00Z",
        "Custom": {"score": 10},
    }))
    .unwrap();

    assert_eq!(event.custom["score"], json!(10));

    let encoded = serde_json::to_value(&event).unwrap();
    assert_eq!(encoded["Custom"], json!({"score": 10}));
    assert!(encoded.get("custom").is_none());
}

#[test]
fn devices_work_as_set_keys() {
    let device: Device = serde_json::from_value(json!({
        "created_at": "2023-06-01T09:30:00Z",
        "id": "token-1",
        "push_provider": "apn",
    }))
    .unwrap();

    let mut set = HashSet::new();
    set.insert(device.clone());
    set.insert(device);
    assert_eq!(set.len(), 1);
}

#[test]
fn record_equality_is_structural() {
    let raw = json!({
        "created_at": "2024-01-01T00:00:00Z",
        "message_id": "m1",
        "score": 1,
        "type": "like",
        "updated_at": "2024-01-01T00:00:00Z",
        "user_id": "jo",
    });

    let a: Reaction = serde_json::from_value(raw.clone()).unwrap();
    let b: Reaction = serde_json::from_value(raw).unwrap();
    assert_eq!(a, b);

    let mut c = b.clone();
    c.score = 2;
    assert_ne!(a, c);
}

#[test]
fn absent_optionals_are_not_serialized() {
    let user: User = serde_json::from_value(json!({"id": "jo"})).unwrap();
    let encoded = serde_json::to_value(&user).unwrap();

    assert_eq!(encoded, json!({"id": "jo"}));
}

#[test]
fn message_decodes_reaction_maps() {
    let message: Message = serde_json::from_value(json!({
        "attachments": [{"type": "image", "image_url": "https://cdn.example.com/a.png"}],
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
        "deleted_reply_count": 0,
        "html": "<p>hi</p>",
        "id": "m1",
        "latest_reactions": [],
        "mentioned_users": [],
        "own_reactions": [],
        "pinned": false,
        "reaction_counts": {"like": 2, "haha": 1},
        "reaction_scores": {"like": 2, "haha": 1},
        "reply_count": 0,
        "shadowed": false,
        "silent": false,
        "text": "hi",
        "type": "regular",
        "updated_at": "2024-01-01T00:00:00Z",
    }))
    .unwrap();

    assert_eq!(message.reaction_counts["like"], 2);
    assert_eq!(message.attachments[0].kind.as_deref(), Some("image"));
    assert!(message.user.is_none());
}

#[test]
fn channel_member_requires_its_role() {
    let result: Result<ChannelMember, _> = serde_json::from_value(json!({
        "banned": false,
        "created_at": "2024-01-01T00:00:00Z",
        "notifications_muted": false,
        "shadow_banned": false,
        "updated_at": "2024-01-01T00:00:00Z",
    }));

    let message = result.unwrap_err().to_string();
    assert!(message.contains("channel_role"), "unexpected error: {message}");
}
