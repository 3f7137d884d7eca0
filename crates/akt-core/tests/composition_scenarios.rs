//! # Composition Scenarios
//!
//! End-to-end checks of the public API: flag values in, identifiers and
//! filters (or errors) out, exactly as a command handler would use it.

use akt_core::{
    AddressDecoder, AddressError, Bech32Codec, MarketFlags, SequenceField, ValidationError,
};

/// A valid `akash1...` address with a fixed 20-byte payload.
fn akash_address(fill: u8) -> String {
    Bech32Codec::akash()
        .encode(&[fill; 20])
        .expect("20-byte payload encodes")
        .to_string()
}

#[test]
fn full_bid_id_from_valid_flags() {
    let owner = akash_address(0x11);
    let provider = akash_address(0x22);
    let flags = MarketFlags {
        owner: owner.clone(),
        dseq: 5,
        gseq: 2,
        oseq: 3,
        provider: provider.clone(),
        ..MarketFlags::default()
    };

    let bid = flags.bid_id(&Bech32Codec::akash()).unwrap();

    let json = serde_json::to_value(&bid).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "owner": owner,
            "dseq": 5,
            "gseq": 2,
            "oseq": 3,
            "provider": provider,
        })
    );
}

#[test]
fn gseq_of_two_to_the_32_fails_group_id() {
    let flags = MarketFlags::for_deployment(akash_address(1), 1).with_gseq(4_294_967_296);
    let err = flags.group_id().unwrap_err();
    assert_eq!(
        err,
        ValidationError::SequenceOutOfRange {
            field: SequenceField::Group,
            value: 4_294_967_296,
        }
    );
    assert_eq!(err.to_string(), "gseq out of uint32 range: 4294967296");
}

#[test]
fn max_u32_sequences_are_accepted() {
    let flags = MarketFlags::for_deployment(akash_address(1), u64::MAX)
        .with_gseq(u64::from(u32::MAX))
        .with_oseq(u64::from(u32::MAX));
    let order = flags.order_id().unwrap();
    assert_eq!(order.dseq(), u64::MAX);
    assert_eq!(order.gseq(), u32::MAX);
    assert_eq!(order.oseq(), u32::MAX);
}

#[test]
fn bad_provider_in_filter_context_fails() {
    let flags = MarketFlags::default().with_provider("not-an-address");
    let err = flags.bid_filters(&Bech32Codec::akash()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidAddress {
            ref value,
            reason: AddressError::Decode(_),
        } if value == "not-an-address"
    ));
}

#[test]
fn empty_provider_in_filter_context_is_unset() {
    let filters = MarketFlags::default()
        .bid_filters(&Bech32Codec::akash())
        .unwrap();
    assert!(filters.provider().is_unset());
    assert_eq!(filters.provider().as_str(), "");
}

#[test]
fn lease_filters_equal_bid_filters() {
    let codec = Bech32Codec::akash();
    let flags = MarketFlags::for_deployment(akash_address(3), 8)
        .with_state("active")
        .with_provider(akash_address(4));
    let bid = flags.bid_filters(&codec).unwrap();
    let lease = flags.lease_filters(&codec).unwrap();
    assert_eq!(lease.bid_filters(), &bid);
    assert_eq!(
        serde_json::to_value(&lease).unwrap(),
        serde_json::to_value(&bid).unwrap()
    );
}

#[test]
fn provider_from_another_chain_is_rejected() {
    let cosmos = Bech32Codec::new("cosmos").unwrap();
    let foreign = cosmos.encode(&[7; 20]).unwrap().to_string();
    let flags = MarketFlags::for_deployment(akash_address(1), 1).with_provider(foreign);
    let err = flags.bid_id(&Bech32Codec::akash()).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::InvalidAddress {
            reason: AddressError::PrefixMismatch { .. },
            ..
        }
    ));
}

/// Checksum-valid `akash` strings that are not the encoding of any byte
/// string: one extra zero group, and non-zero padding bits.
const BADLY_PADDED: [&str; 2] = [
    "akash1qurswpc8qurswpc8qurswpc8qurswpc8qlsjgdc",
    "akash1qurswpc8qurswpc8qurswpc8qurswpc8qarhfw2v",
];

#[test]
fn badly_padded_provider_fails_bid_and_lease_id() {
    let codec = Bech32Codec::akash();
    for provider in BADLY_PADDED {
        let flags = MarketFlags::for_deployment(akash_address(1), 1).with_provider(provider);
        for err in [
            flags.bid_id(&codec).unwrap_err(),
            flags.lease_id(&codec).unwrap_err(),
        ] {
            assert!(matches!(
                err,
                ValidationError::InvalidAddress {
                    reason: AddressError::InvalidPadding,
                    ..
                }
            ));
        }
    }
}

#[test]
fn badly_padded_provider_fails_filters() {
    let codec = Bech32Codec::akash();
    for provider in BADLY_PADDED {
        let flags = MarketFlags::default().with_provider(provider);
        assert!(flags.bid_filters(&codec).is_err());
        assert!(flags.lease_filters(&codec).is_err());
    }
}

#[test]
fn decoded_provider_is_the_canonical_encoding() {
    let codec = Bech32Codec::akash();
    let provider = akash_address(5);
    let flags =
        MarketFlags::for_deployment(akash_address(1), 1).with_provider(provider.to_uppercase());
    let bid = flags.bid_id(&codec).unwrap();
    assert_eq!(bid.provider().as_str(), provider);
}

#[test]
fn composers_accept_trait_objects() {
    let codec = Bech32Codec::akash();
    let decoder: &dyn AddressDecoder = &codec;
    let flags = MarketFlags::for_deployment(akash_address(1), 1).with_provider(akash_address(2));
    assert!(flags.bid_id(decoder).is_ok());
    assert!(flags.lease_filters(decoder).is_ok());
}
