//! Test vectors are from GM/T 0004-2012
use digest::Digest;
use hex_literal::hex;
use proptest::prelude::*;
use sm3::Sm3;

#[test]
fn sm3_example_1() {
    let string = "abc".to_owned();
    let s = string.as_bytes();

    let mut hasher = Sm3::new();
    hasher.input(s);
    assert_eq!(
        format!("{:x}", hasher.result()),
        "66c7f0f462eeedd9d1f2d46bdc10e4e24167c4875cf2f7a2297da02b8f4ba8e0"
    );
}

#[test]
fn sm3_example_2() {
    let string = "abcd".repeat(16);

    let mut hasher = Sm3::new();
    hasher.write(&string);
    assert_eq!(
        hasher.finalize().unwrap(),
        hex!("debe9ff92275b8a138604889c18e5a4d6fdb70e5387e5765293dcba39c0c5732")
    );
}

#[test]
fn sm3_long_input() {
    assert_eq!(
        sm3::sum_hex(&"abcd".repeat(47)).unwrap(),
        "6888fa292df4b51341e82e3072fbdd63598439c64eda318a81756ca71a7a6c15"
    );
    assert_eq!(
        sm3::sum(&"abcd".repeat(48)).unwrap(),
        hex!("fc79d8057fb1affd59f060a81e7a2d066f04e2c56e0863e45b5297c6ac87bdf2")
    );
}

#[test]
fn text_and_bytes_hash_alike() {
    assert_eq!(sm3::sum(&[97u8, 98, 99]).unwrap(), sm3::sum("abc").unwrap());
    assert_eq!(
        sm3::sum_hex("héllo 世界").unwrap(),
        "d3c7a947447b09067fa517664baed965d37df517379d160cf518afe789e773b9"
    );
}

#[test]
fn digest_trait_matches_inherent_api() {
    let data: Vec<u8> = (0..1000u32).map(|i| (i % 256) as u8).collect();
    let expected = hex!("e1043d6f7910a57e49c10eb042760c060d07ea26866cb067cc5eecb42f9056a3");

    assert_eq!(Sm3::digest(&data)[..], expected[..]);
    assert_eq!(sm3::sum(&data).unwrap(), expected);

    let mut hasher = sm3::create();
    hasher.input(&data[..500]);
    hasher.update(&data[500..]);
    assert_eq!(hasher.result_reset()[..], expected[..]);
    assert_eq!(hasher.finalize().unwrap(), sm3::sum("").unwrap());
}

#[test]
fn clone_is_independent() {
    let mut original = Sm3::new();
    original.write("abc");
    let mut fork = original.clone();
    fork.write("def");

    assert_eq!(original.finalize().unwrap(), sm3::sum("abc").unwrap());
    assert_eq!(fork.finalize().unwrap(), sm3::sum("abcdef").unwrap());

    original.write("xyz");
    assert_eq!(fork.finalize().unwrap(), sm3::sum("abcdef").unwrap());
    assert_eq!(original.finalize().unwrap(), sm3::sum("abcxyz").unwrap());
}

#[test]
fn hex_helpers() {
    let digest = sm3::sum("abc").unwrap();
    let encoded = sm3::to_hex(digest);
    assert_eq!(sm3::from_hex(&encoded).unwrap(), digest);
    assert!(matches!(
        sm3::from_hex("abc"),
        Err(sm3::Error::InvalidFormat(_))
    ));
}

#[test]
fn kdf_reference() {
    let z = sm3::from_hex(
        "64D20D27D0632957F8028C1E024F6B02EDF23102A566C932AE8BD613A8E865FE\
         58D225ECA784AE300A81A2D48281A828E1CEDF11C4219099840265375077BF78",
    )
    .unwrap();
    assert_eq!(
        sm3::to_hex(sm3::kdf(&z, 19).unwrap()),
        "006e30dae231b071dfad8aa379e90264491603"
    );
    assert_eq!(sm3::kdf(&[0u8, 0, 0, 0x94], 1), Err(sm3::Error::KdfExhausted));
}

proptest! {
    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..300)) {
        prop_assert_eq!(sm3::sum(&data).unwrap(), sm3::sum(&data).unwrap());
    }

    #[test]
    fn streaming_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..400),
        cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Sm3::new();
        let mut start = 0;
        for &p in &points {
            hasher.write(&data[start..p]);
            start = p;
        }
        hasher.write(&data[start..]);

        prop_assert_eq!(hasher.finalize().unwrap(), sm3::sum(&data).unwrap());
    }

    #[test]
    fn clone_snapshot_survives_writes(
        head in proptest::collection::vec(any::<u8>(), 0..200),
        tail in proptest::collection::vec(any::<u8>(), 1..200),
    ) {
        let mut hasher = Sm3::new();
        hasher.write(&head);
        let snapshot = hasher.clone();
        hasher.write(&tail);

        prop_assert_eq!(snapshot.finalize().unwrap(), sm3::sum(&head).unwrap());
        let mut whole = head.clone();
        whole.extend_from_slice(&tail);
        prop_assert_eq!(hasher.finalize().unwrap(), sm3::sum(&whole).unwrap());
    }

    #[test]
    fn hex_roundtrip(bytes in proptest::collection::vec(any::<u8>(), 0..64)) {
        let s = sm3::to_hex(&bytes);
        prop_assert_eq!(sm3::to_hex(sm3::from_hex(&s).unwrap()), s);
    }

    #[test]
    fn kdf_prefix_property(secret in proptest::collection::vec(any::<u8>(), 1..64), len in 33usize..100) {
        let long = sm3::kdf(&secret, len);
        let short = sm3::kdf(&secret, 32);
        if let (Ok(long), Ok(short)) = (long, short) {
            prop_assert_eq!(&long[..32], &short[..]);
        }
    }
}
