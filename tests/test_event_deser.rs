//! Deserialization of every tag the chat socket resolves, and the failure
//! taxonomy around it.

use rill::model::error::Error as ModelError;
use rill::model::event::Event;
use rill::Error;
use serde_json::{json, Value};

/// The shared base of channel-scoped payloads.
fn channel_event(tag: &str) -> Value {
    json!({
        "type": tag,
        "channel_id": "general",
        "channel_type": "messaging",
        "cid": "messaging:general",
        "created_at": "2024-01-01T00:00:00Z",
    })
}

/// The shared base of user- and connection-scoped payloads.
fn user_event(tag: &str) -> Value {
    json!({
        "type": tag,
        "created_at": "2024-01-01T00:00:00Z",
    })
}

fn assert_tag(payload: Value) -> Event {
    let tag = payload["type"].as_str().unwrap().to_owned();
    let event = Event::parse(payload).unwrap();
    assert_eq!(event.event_type(), tag);
    event
}

#[test]
fn channel_created() {
    assert_tag(channel_event("channel.created"));
}

#[test]
fn channel_deleted() {
    assert_tag(channel_event("channel.deleted"));
}

#[test]
fn channel_frozen() {
    assert_tag(channel_event("channel.frozen"));
}

#[test]
fn channel_hidden() {
    let mut payload = channel_event("channel.hidden");
    payload["clear_history"] = json!(false);
    assert_tag(payload);
}

#[test]
fn channel_kicked() {
    assert_tag(channel_event("channel.kicked"));
}

#[test]
fn channel_truncated() {
    assert_tag(channel_event("channel.truncated"));
}

#[test]
fn channel_unfrozen() {
    assert_tag(channel_event("channel.unfrozen"));
}

#[test]
fn channel_updated() {
    assert_tag(channel_event("channel.updated"));
}

#[test]
fn channel_visible() {
    assert_tag(channel_event("channel.visible"));
}

#[test]
fn custom() {
    let event = assert_tag(json!({
        "type": "custom",
        "created_at": "2024-01-01T00:00:00Z",
        "Custom": {"votes": 3},
    }));

    match event {
        Event::Any(any) => assert_eq!(any.custom["votes"], json!(3)),
        other => panic!("expected a custom event, got {other:?}"),
    }
}

#[test]
fn health_check() {
    let mut payload = user_event("health.check");
    payload["cid"] = json!("*");
    payload["connection_id"] = json!("7f5c9a");
    assert_tag(payload);
}

#[test]
fn member_added() {
    assert_tag(channel_event("member.added"));
}

#[test]
fn member_removed() {
    assert_tag(channel_event("member.removed"));
}

#[test]
fn member_updated() {
    assert_tag(channel_event("member.updated"));
}

#[test]
fn message_deleted() {
    let mut payload = channel_event("message.deleted");
    payload["hard_delete"] = json!(false);
    assert_tag(payload);
}

#[test]
fn message_new() {
    let mut payload = channel_event("message.new");
    payload["watcher_count"] = json!(1);
    assert_tag(payload);
}

#[test]
fn message_read() {
    assert_tag(channel_event("message.read"));
}

#[test]
fn message_undeleted() {
    assert_tag(channel_event("message.undeleted"));
}

#[test]
fn message_updated() {
    assert_tag(channel_event("message.updated"));
}

#[test]
fn notification_added_to_channel() {
    assert_tag(channel_event("notification.added_to_channel"));
}

#[test]
fn notification_channel_deleted() {
    assert_tag(channel_event("notification.channel_deleted"));
}

#[test]
fn notification_channel_mutes_updated() {
    assert_tag(user_event("notification.channel_mutes_updated"));
}

#[test]
fn notification_channel_truncated() {
    assert_tag(channel_event("notification.channel_truncated"));
}

#[test]
fn notification_invite_accepted() {
    assert_tag(channel_event("notification.invite_accepted"));
}

#[test]
fn notification_invite_rejected() {
    assert_tag(channel_event("notification.invite_rejected"));
}

#[test]
fn notification_invited() {
    assert_tag(channel_event("notification.invited"));
}

#[test]
fn notification_mark_read() {
    let mut payload = channel_event("notification.mark_read");
    payload["total_unread_count"] = json!(0);
    payload["unread_channels"] = json!(0);
    payload["unread_count"] = json!(0);
    assert_tag(payload);
}

#[test]
fn notification_mark_unread() {
    let mut payload = channel_event("notification.mark_unread");
    payload["first_unread_message_id"] = json!("m77");
    payload["last_read_at"] = json!("2024-01-01T00:00:00Z");
    payload["total_unread_count"] = json!(4);
    payload["unread_channels"] = json!(1);
    payload["unread_count"] = json!(4);
    payload["unread_messages"] = json!(4);
    assert_tag(payload);
}

#[test]
fn notification_message_new() {
    assert_tag(channel_event("notification.message_new"));
}

#[test]
fn notification_mutes_updated() {
    assert_tag(user_event("notification.mutes_updated"));
}

#[test]
fn notification_removed_from_channel() {
    assert_tag(channel_event("notification.removed_from_channel"));
}

#[test]
fn reaction_deleted() {
    assert_tag(channel_event("reaction.deleted"));
}

#[test]
fn reaction_new() {
    assert_tag(channel_event("reaction.new"));
}

#[test]
fn reaction_updated() {
    assert_tag(channel_event("reaction.updated"));
}

#[test]
fn thread_updated() {
    assert_tag(user_event("thread.updated"));
}

#[test]
fn typing_start() {
    assert_tag(channel_event("typing.start"));
}

#[test]
fn typing_stop() {
    assert_tag(channel_event("typing.stop"));
}

#[test]
fn user_banned() {
    let mut payload = channel_event("user.banned");
    payload["created_by"] = json!({"id": "moderator"});
    payload["shadow"] = json!(false);
    assert_tag(payload);
}

#[test]
fn user_deactivated() {
    let mut payload = user_event("user.deactivated");
    payload["created_by"] = json!({"id": "admin"});
    assert_tag(payload);
}

#[test]
fn user_deleted() {
    let mut payload = user_event("user.deleted");
    payload["delete_conversation_channels"] = json!(false);
    payload["hard_delete"] = json!(false);
    payload["mark_messages_deleted"] = json!(true);
    assert_tag(payload);
}

#[test]
fn user_muted() {
    assert_tag(user_event("user.muted"));
}

#[test]
fn user_presence_changed() {
    assert_tag(user_event("user.presence.changed"));
}

#[test]
fn user_reactivated() {
    assert_tag(user_event("user.reactivated"));
}

#[test]
fn user_unbanned() {
    let mut payload = channel_event("user.unbanned");
    payload["shadow"] = json!(false);
    assert_tag(payload);
}

#[test]
fn user_updated() {
    assert_tag(user_event("user.updated"));
}

#[test]
fn user_watching_start() {
    let mut payload = channel_event("user.watching.start");
    payload["watcher_count"] = json!(2);
    assert_tag(payload);
}

#[test]
fn user_watching_stop() {
    let mut payload = channel_event("user.watching.stop");
    payload["watcher_count"] = json!(1);
    assert_tag(payload);
}

// The `connection.ok` tag is a legacy alias: it must resolve to the same
// payload type as `health.check` while retaining its own tag string.
#[test]
fn connection_ok_aliases_to_health_check() {
    let base = json!({
        "cid": "*",
        "connection_id": "7f5c9a",
        "created_at": "2024-01-01T00:00:00Z",
    });

    let mut health = base.clone();
    health["type"] = json!("health.check");
    let mut ok = base;
    ok["type"] = json!("connection.ok");

    let (health, ok) = match (Event::parse(health).unwrap(), Event::parse(ok).unwrap()) {
        (Event::HealthCheck(h), Event::HealthCheck(o)) => (h, o),
        other => panic!("expected two health checks, got {other:?}"),
    };

    assert_eq!(health.kind, "health.check");
    assert_eq!(ok.kind, "connection.ok");

    let mut retagged = ok;
    retagged.kind = health.kind.clone();
    assert_eq!(health, retagged);
}

// Thread replies are delivered under their own tag but carry a new-message
// payload.
#[test]
fn notification_thread_message_new_aliases_to_message_new() {
    let mut payload = channel_event("notification.thread_message_new");
    payload["watcher_count"] = json!(1);

    match Event::parse(payload).unwrap() {
        Event::MessageNew(event) => {
            assert_eq!(event.kind, "notification.thread_message_new");
        },
        other => panic!("expected a new-message event, got {other:?}"),
    }
}

#[test]
fn message_new_minimal_scenario() {
    let event = Event::parse(json!({
        "type": "message.new",
        "channel_id": "c1",
        "channel_type": "messaging",
        "cid": "messaging:c1",
        "created_at": "2024-01-01T00:00:00Z",
        "watcher_count": 3,
    }))
    .unwrap();

    assert_eq!(event.event_type(), "message.new");
    assert_eq!(event.cid(), Some("messaging:c1"));

    match event {
        Event::MessageNew(event) => {
            assert_eq!(event.channel_id, "c1");
            assert_eq!(event.watcher_count, 3);
            assert!(event.message.is_none());
        },
        other => panic!("expected a new-message event, got {other:?}"),
    }
}

#[test]
fn unknown_tag_is_a_typed_failure() {
    match Event::parse(json!({"type": "bogus.event"})) {
        Err(Error::Model(ModelError::UnknownEventType(tag))) => assert_eq!(tag, "bogus.event"),
        other => panic!("expected an unknown-event failure, got {other:?}"),
    }
}

// The video surface knows this tag; the chat surface must refuse it rather
// than borrow the other table.
#[test]
fn unread_message_reminder_is_unknown_here() {
    match Event::parse(user_event("user.unread_message_reminder")) {
        Err(Error::Model(ModelError::UnknownEventType(tag))) => {
            assert_eq!(tag, "user.unread_message_reminder");
        },
        other => panic!("expected an unknown-event failure, got {other:?}"),
    }
}

#[test]
fn missing_discriminator_is_malformed() {
    match Event::parse(json!({"channel_id": "general"})) {
        Err(Error::Model(ModelError::MalformedEnvelope)) => {},
        other => panic!("expected a malformed-envelope failure, got {other:?}"),
    }
}

#[test]
fn non_string_discriminator_is_malformed() {
    match Event::parse(json!({"type": 42})) {
        Err(Error::Model(ModelError::MalformedEnvelope)) => {},
        other => panic!("expected a malformed-envelope failure, got {other:?}"),
    }
}

#[test]
fn missing_required_field_names_the_field() {
    match Event::parse(json!({"type": "user.banned", "user": null})) {
        Err(Error::Model(ModelError::FieldDecode {
            field,
            ..
        })) => {
            assert_eq!(field.as_deref(), Some("channel_id"));
        },
        other => panic!("expected a field-decode failure, got {other:?}"),
    }
}

#[test]
fn mistyped_required_field_fails() {
    let mut payload = channel_event("message.new");
    payload["watcher_count"] = json!("three");

    match Event::parse(payload) {
        Err(Error::Model(ModelError::FieldDecode {
            ..
        })) => {},
        other => panic!("expected a field-decode failure, got {other:?}"),
    }
}

#[test]
fn parse_via_serde_entry_point() {
    let mut payload = channel_event("typing.start");
    payload["parent_id"] = json!("m1");

    let event: Event = serde_json::from_value(payload).unwrap();
    assert_eq!(event.event_type(), "typing.start");
    assert_eq!(event.created_at().to_string(), "2024-01-01T00:00:00Z");
}
