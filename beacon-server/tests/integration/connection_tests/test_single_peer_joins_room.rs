use beacon_core::SignalMessage;

use crate::integration::{create_test_relay, init_tracing, join_peer};

#[tokio::test]
async fn test_single_peer_joins_room() {
    init_tracing();
    let (relay, mock) = create_test_relay(6);

    let a = join_peer(&relay, "abc", "alice").await;

    let msgs = mock.messages_for(&a).await;
    assert_eq!(msgs.len(), 1);
    match &msgs[0] {
        SignalMessage::JoinAccepted { room, peers } => {
            assert_eq!(room.0, "abc");
            assert!(peers.is_empty(), "first joiner sees no existing peers");
        }
        other => panic!("expected join-accepted, got {:?}", other),
    }

    assert_eq!(relay.registry().members_of(&"abc".into()).await, vec![a]);
}

#[tokio::test]
async fn test_join_without_name_gets_placeholder() {
    init_tracing();
    let (relay, _mock) = create_test_relay(6);

    let a = relay.connections().register();
    relay
        .handle_message(
            a,
            SignalMessage::Join {
                room: "abc".into(),
                name: None,
            },
        )
        .await;

    let occupants = relay.registry().occupants(&"abc".into()).await;
    assert_eq!(occupants.len(), 1);
    assert!(occupants[0].name.starts_with("guest-"));
}
