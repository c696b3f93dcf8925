//! Serde representation of channels and channel sets.
//!
//! Run with: `cargo test --features serde`

#![cfg(feature = "serde")]

use chatroute_proto::{ChatChannel, ChatMask, SelectChannel, SelectMask};

#[test]
fn channels_serialize_as_lowercase_names() {
    let json = serde_json::to_string(&SelectChannel::Ooc).expect("serialize");
    assert_eq!(json, r#""ooc""#);

    let channel: ChatChannel = serde_json::from_str(r#""server""#).expect("deserialize");
    assert_eq!(channel, ChatChannel::Server);
}

#[test]
fn masks_serialize_as_lists() {
    let mask: SelectMask = [SelectChannel::Radio, SelectChannel::Local].into_iter().collect();
    let json = serde_json::to_string(&mask).expect("serialize");
    assert_eq!(json, r#"["local","radio"]"#);

    let back: SelectMask = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, mask);
}

#[test]
fn duplicate_entries_collapse() {
    let mask: ChatMask = serde_json::from_str(r#"["ooc","ooc","dead"]"#).expect("deserialize");
    assert_eq!(mask.len(), 2);
}

#[test]
fn unknown_channel_is_an_error() {
    assert!(serde_json::from_str::<ChatMask>(r#"["console"]"#).is_err());
}
