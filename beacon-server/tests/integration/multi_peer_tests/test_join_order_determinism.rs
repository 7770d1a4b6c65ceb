use beacon_core::SignalMessage;

use crate::integration::{create_test_relay, init_tracing, join_peer};

#[tokio::test]
async fn test_peer_lists_follow_join_order() {
    init_tracing();
    let (relay, mock) = create_test_relay(6);

    let a = join_peer(&relay, "abc", "alice").await;
    let b = join_peer(&relay, "abc", "bob").await;
    let c = join_peer(&relay, "abc", "carol").await;

    // Bob saw exactly [alice]; Carol saw [alice, bob] in join order, so the
    // newest joiner always knows whom to send offers to.
    let bob_msgs = mock.messages_for(&b).await;
    match &bob_msgs[0] {
        SignalMessage::JoinAccepted { peers, .. } => {
            assert_eq!(peers.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a]);
        }
        other => panic!("expected join-accepted, got {:?}", other),
    }

    let carol_msgs = mock.messages_for(&c).await;
    match &carol_msgs[0] {
        SignalMessage::JoinAccepted { peers, .. } => {
            assert_eq!(peers.iter().map(|p| p.id).collect::<Vec<_>>(), vec![a, b]);
            assert_eq!(
                peers.iter().map(|p| p.name.as_str()).collect::<Vec<_>>(),
                vec!["alice", "bob"]
            );
        }
        other => panic!("expected join-accepted, got {:?}", other),
    }

    // Alice heard a peer-joined for each later arrival, in arrival order.
    let alice_msgs = mock.messages_for(&a).await;
    let joined: Vec<_> = alice_msgs
        .iter()
        .filter_map(|m| match m {
            SignalMessage::PeerJoined { peer, .. } => Some(peer.id),
            _ => None,
        })
        .collect();
    assert_eq!(joined, vec![b, c]);
}
