//! Proxy metadata keys and flags used together, the way the reactive runtime stores them

use pretty_assertions::assert_eq;
use rhtmx_state::*;
use rstest::rstest;
use std::collections::HashMap;
use std::thread;

#[test]
fn test_keys_do_not_collide_with_user_properties() {
    #[derive(Debug, PartialEq, Eq, Hash)]
    enum Slot {
        Meta(ProxyKey),
        Prop(String),
    }

    let mut slots: HashMap<Slot, u8> = HashMap::new();
    slots.insert(Slot::Prop("proxy flags".to_string()), 1);
    slots.insert(Slot::Meta(*PROXY_FLAGS), ProxyFlags::RECURSIVE.bits());

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[&Slot::Meta(*PROXY_FLAGS)], 0b01);
}

#[test]
fn test_keys_are_shared_across_threads() {
    let here = (*PROXY_TARGET, *PROXY_MANAGER);
    let there = thread::spawn(|| (*PROXY_TARGET, *PROXY_MANAGER))
        .join()
        .unwrap();
    assert_eq!(here, there);
}

#[rstest]
#[case(ProxyFlags::empty(), false, false)]
#[case(ProxyFlags::RECURSIVE, true, false)]
#[case(ProxyFlags::IMMUTABLE, false, true)]
#[case(ProxyFlags::RECURSIVE | ProxyFlags::IMMUTABLE, true, true)]
fn test_flags_round_trip_through_bits(
    #[case] flags: ProxyFlags,
    #[case] recursive: bool,
    #[case] immutable: bool,
) {
    let stored = flags.bits();
    let restored = ProxyFlags::from_bits(stored).unwrap();
    assert_eq!(restored.is_recursive(), recursive);
    assert_eq!(restored.is_immutable(), immutable);
}
