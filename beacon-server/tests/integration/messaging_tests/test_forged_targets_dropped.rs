use beacon_core::{ConnectionId, SignalMessage};

use crate::integration::{create_test_relay, init_tracing, join_peer};

#[tokio::test]
async fn test_cross_room_target_never_receives() {
    init_tracing();
    let (relay, mock) = create_test_relay(6);

    let a = join_peer(&relay, "abc", "alice").await;
    let _b = join_peer(&relay, "abc", "bob").await;
    let c = join_peer(&relay, "xyz", "carol").await;
    mock.clear().await;

    // Target in another room, named under the sender's room.
    relay
        .handle_message(
            a,
            SignalMessage::Offer {
                room: "abc".into(),
                to: c,
                from: None,
                payload: serde_json::json!({"sdp": "v=0"}),
            },
        )
        .await;

    // Target's real room, but the sender is not a member of it.
    relay
        .handle_message(
            a,
            SignalMessage::Offer {
                room: "xyz".into(),
                to: c,
                from: None,
                payload: serde_json::json!({"sdp": "v=0"}),
            },
        )
        .await;

    assert!(mock.messages_for(&c).await.is_empty());
    assert_eq!(mock.count().await, 0, "nothing may be delivered or echoed");
}

#[tokio::test]
async fn test_unknown_target_is_dropped() {
    init_tracing();
    let (relay, mock) = create_test_relay(6);

    let a = join_peer(&relay, "abc", "alice").await;
    mock.clear().await;

    let ghost = ConnectionId::new();
    relay
        .handle_message(
            a,
            SignalMessage::Answer {
                room: "abc".into(),
                to: ghost,
                from: None,
                payload: serde_json::json!({"sdp": "v=0"}),
            },
        )
        .await;

    assert_eq!(mock.count().await, 0);
}

#[tokio::test]
async fn test_unjoined_sender_cannot_relay() {
    init_tracing();
    let (relay, mock) = create_test_relay(6);

    let a = join_peer(&relay, "abc", "alice").await;
    let outsider = relay.connections().register();
    mock.clear().await;

    relay
        .handle_message(
            outsider,
            SignalMessage::IceCandidate {
                room: "abc".into(),
                to: a,
                from: None,
                payload: serde_json::json!({"candidate": ""}),
            },
        )
        .await;

    assert!(mock.messages_for(&a).await.is_empty());
}
