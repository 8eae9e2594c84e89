use crate::event::{MemberEvent, MembershipFlags, MembershipStatus};

#[test]
fn test_classify_joined() {
    let flags = MembershipFlags {
        user_joined: true,
        ..Default::default()
    };
    assert_eq!(
        MembershipStatus::classify(flags),
        Some(MembershipStatus::Joined)
    );
}

#[test]
fn test_classify_added() {
    let flags = MembershipFlags {
        user_added: true,
        ..Default::default()
    };
    assert_eq!(
        MembershipStatus::classify(flags),
        Some(MembershipStatus::Joined)
    );
}

#[test]
fn test_classify_left() {
    let flags = MembershipFlags {
        user_left: true,
        ..Default::default()
    };
    assert_eq!(
        MembershipStatus::classify(flags),
        Some(MembershipStatus::Left)
    );
}

#[test]
fn test_classify_kicked() {
    let flags = MembershipFlags {
        user_kicked: true,
        ..Default::default()
    };
    assert_eq!(
        MembershipStatus::classify(flags),
        Some(MembershipStatus::Left)
    );
}

#[test]
fn test_classify_no_flags_is_dropped() {
    assert_eq!(MembershipStatus::classify(MembershipFlags::default()), None);
}

#[test]
fn test_classify_join_flags_take_precedence() {
    // Should never happen on the wire, but the classification is total
    let flags = MembershipFlags {
        user_joined: true,
        user_left: true,
        ..Default::default()
    };
    assert_eq!(
        MembershipStatus::classify(flags),
        Some(MembershipStatus::Joined)
    );
}

#[test]
fn test_status_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&MembershipStatus::Joined).unwrap(),
        "\"joined\""
    );
    assert_eq!(
        serde_json::to_string(&MembershipStatus::Left).unwrap(),
        "\"left\""
    );
}

#[test]
fn test_record_wire_shape() {
    let record = MemberEvent {
        id: 1,
        username: Some("a".to_string()),
        first_name: Some("Ada".to_string()),
        last_name: None,
        phone: None,
        is_bot: false,
        timestamp: "2025-06-15T09:00:00".to_string(),
        channel_name: "X".to_string(),
        status: MembershipStatus::Joined,
    };

    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "id": 1,
            "username": "a",
            "first_name": "Ada",
            "last_name": null,
            "phone": null,
            "is_bot": false,
            "timestamp": "2025-06-15T09:00:00",
            "channel_name": "X",
            "status": "joined",
        })
    );
}
