use grammers_session::types::PeerKind;

use crate::peer_from_bot_api_id;

#[test]
fn test_supergroup_id_maps_to_channel_kind() {
    let peer = peer_from_bot_api_id(-1001234567890);

    assert_eq!(peer.kind(), PeerKind::Channel);
    assert_eq!(peer.bare_id(), 1234567890);
}

#[test]
fn test_negative_id_maps_to_basic_group() {
    let peer = peer_from_bot_api_id(-4321);

    assert_eq!(peer.kind(), PeerKind::Group);
    assert_eq!(peer.bare_id(), 4321);
}

#[test]
fn test_positive_id_maps_to_user() {
    let peer = peer_from_bot_api_id(7);

    assert_eq!(peer.kind(), PeerKind::User);
    assert_eq!(peer.bare_id(), 7);
}

#[test]
fn test_bare_channel_id_keeps_its_value() {
    // A channel id configured without the Bot API prefix still filters
    // correctly, since only the bare id is compared against updates
    assert_eq!(peer_from_bot_api_id(1234567890).bare_id(), 1234567890);
}
