use chainbytes::crypto::{
    Ed25519PrivateKey, Ed25519PublicKey, Ed25519Signature, KeyMaterial, PrivateKey, PublicKey,
    Signature, SignatureScheme,
};
use chainbytes::ser::{Deserializable, Deserializer, SerError, SerKind};
use chainbytes::{deserialize, deserialize_exact, serialize, Error, ValidationError};
use insta::assert_snapshot;
use proptest::prelude::*;

// RFC 8032, section 7.1, test 1.
const RFC_SEED: &str = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";
const RFC_PUBLIC_KEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";
const RFC_SIGNATURE: &str = "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e065224901555fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b";

fn rfc_private_key() -> Ed25519PrivateKey {
    Ed25519PrivateKey::from_hex(RFC_SEED).expect("rfc seed")
}

fn invalid_length(err: ValidationError) -> (usize, usize) {
    match err {
        ValidationError::InvalidLength {
            expected, actual, ..
        } => (expected, actual),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn rfc8032_empty_message_vector() {
    let private_key = rfc_private_key();
    let public_key = private_key.public_key();
    assert_eq!(public_key.to_string(), format!("0x{RFC_PUBLIC_KEY}"));

    let signature = private_key.sign(&[]);
    assert_eq!(signature.to_string(), format!("0x{RFC_SIGNATURE}"));
    assert!(public_key.verify_signature(&[], &signature));
    assert!(!public_key.verify_signature(&[0x00], &signature));
}

#[test]
fn public_key_length_is_enforced() {
    assert_eq!(
        invalid_length(Ed25519PublicKey::from_bytes(&[0u8; 31]).unwrap_err()),
        (32, 31)
    );
    assert!(Ed25519PublicKey::from_bytes(&[0u8; 32]).is_ok());
    assert_eq!(
        invalid_length(Ed25519PublicKey::from_bytes(&[0u8; 33]).unwrap_err()),
        (32, 33)
    );
}

#[test]
fn private_key_length_is_enforced() {
    assert_eq!(
        invalid_length(Ed25519PrivateKey::from_bytes(&[1u8; 31]).unwrap_err()),
        (32, 31)
    );
    assert!(Ed25519PrivateKey::from_bytes(&[1u8; 32]).is_ok());
    assert_eq!(
        invalid_length(Ed25519PrivateKey::from_bytes(&[1u8; 33]).unwrap_err()),
        (32, 33)
    );
}

#[test]
fn signature_length_is_enforced() {
    assert_eq!(
        invalid_length(Ed25519Signature::from_bytes(&[0u8; 63]).unwrap_err()),
        (64, 63)
    );
    assert!(Ed25519Signature::from_bytes(&[0u8; 64]).is_ok());
    assert_eq!(
        invalid_length(Ed25519Signature::from_bytes(&[0u8; 65]).unwrap_err()),
        (64, 65)
    );
}

#[test]
fn generated_keys_sign_and_verify() {
    let private_key = Ed25519PrivateKey::generate();
    let public_key = private_key.public_key();
    let messages: [&[u8]; 3] = [b"", b"hello", &[0u8; 1024]];
    for message in messages {
        let signature = private_key.sign(message);
        assert!(public_key.verify_signature(message, &signature));
    }
    let other = Ed25519PrivateKey::generate().public_key();
    let signature = private_key.sign(b"hello");
    assert!(!other.verify_signature(b"hello", &signature));
}

#[test]
fn signing_is_deterministic() {
    let private_key = rfc_private_key();
    assert_eq!(private_key.sign(b"abc"), private_key.sign(b"abc"));
}

#[test]
fn private_key_bytes_roundtrip() {
    let private_key = rfc_private_key();
    let restored = Ed25519PrivateKey::from_bytes(&private_key.to_bytes()).unwrap();
    assert_eq!(restored, private_key);
    assert_eq!(restored.to_hex().to_string_without_prefix(), RFC_SEED);
}

#[test]
fn concrete_keys_encode_with_length_prefix() {
    let private_key = rfc_private_key();
    let public_key = private_key.public_key();
    let signature = private_key.sign(b"payload");

    let key_bytes = serialize(&public_key).unwrap();
    assert_eq!(key_bytes.len(), 33);
    assert_eq!(key_bytes[0], 0x20);
    assert_eq!(deserialize_exact::<Ed25519PublicKey>(&key_bytes).unwrap(), public_key);

    let signature_bytes = serialize(&signature).unwrap();
    assert_eq!(signature_bytes.len(), 65);
    assert_eq!(signature_bytes[0], 0x40);
    assert_eq!(deserialize_exact::<Ed25519Signature>(&signature_bytes).unwrap(), signature);

    let seed_bytes = serialize(&private_key).unwrap();
    assert_eq!(seed_bytes[0], 0x20);
    assert_eq!(deserialize_exact::<Ed25519PrivateKey>(&seed_bytes).unwrap(), private_key);
}

#[test]
fn wrong_encoded_length_is_a_validation_error() {
    let mut bytes = vec![0x1f];
    bytes.extend_from_slice(&[0u8; 31]);
    let err = deserialize::<Ed25519PublicKey>(&bytes).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::InvalidLength {
            what: "Ed25519 public key",
            expected: 32,
            actual: 31,
        })
    );
}

#[test]
fn truncated_key_payload_is_a_deserialization_error() {
    let bytes = [0x20, 0x01, 0x02];
    let err = deserialize::<Ed25519PublicKey>(&bytes).unwrap_err();
    assert!(matches!(
        err,
        Error::Deserialization(SerError::InvalidLength {
            kind: SerKind::PublicKey,
            declared: 32,
            remaining: 2,
            ..
        })
    ));
}

#[test]
fn tagged_public_key_snapshot() {
    let public_key = PublicKey::from(rfc_private_key().public_key());
    let bytes = serialize(&public_key).unwrap();
    assert_snapshot!(
        hex::encode(&bytes),
        @"0020d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a"
    );
    assert_eq!(deserialize_exact::<PublicKey>(&bytes).unwrap(), public_key);
}

#[test]
fn tagged_family_roundtrip() {
    let private_key = PrivateKey::generate(SignatureScheme::Ed25519);
    assert_eq!(private_key.scheme(), SignatureScheme::Ed25519);
    let public_key = private_key.public_key();
    let signature = private_key.sign(b"family");
    assert_eq!(signature.scheme(), SignatureScheme::Ed25519);
    assert!(public_key.verify_signature(b"family", &signature));

    let restored: PrivateKey = deserialize_exact(&serialize(&private_key).unwrap()).unwrap();
    assert_eq!(restored, private_key);
    let restored: Signature = deserialize_exact(&serialize(&signature).unwrap()).unwrap();
    assert_eq!(restored, signature);
}

#[test]
fn unknown_scheme_index_is_rejected() {
    let mut bytes = vec![0x07, 0x20];
    bytes.extend_from_slice(&[0u8; 32]);
    let err = deserialize::<PublicKey>(&bytes).unwrap_err();
    assert_eq!(
        err,
        Error::Validation(ValidationError::UnknownScheme {
            what: "public key",
            index: 7,
        })
    );
}

#[test]
fn signs_canonical_bytes_of_a_value() {
    let private_key = PrivateKey::from(rfc_private_key());
    let value = (42u64, "memo".to_owned());
    let signature = private_key.sign_serializable(&value).unwrap();
    let public_key = private_key.public_key();
    assert!(public_key.verify_serializable(&value, &signature).unwrap());
    assert!(!public_key
        .verify_serializable(&(43u64, "memo".to_owned()), &signature)
        .unwrap());
    assert!(public_key.verify_signature(&serialize(&value).unwrap(), &signature));
}

#[test]
fn hex_and_json_interchange() {
    let public_key = rfc_private_key().public_key();
    let parsed: Ed25519PublicKey = format!("0x{RFC_PUBLIC_KEY}").parse().unwrap();
    assert_eq!(parsed, public_key);
    let bare: Ed25519PublicKey = RFC_PUBLIC_KEY.parse().unwrap();
    assert_eq!(bare, public_key);

    let json = serde_json::to_string(&public_key).unwrap();
    assert_eq!(json, format!("\"0x{RFC_PUBLIC_KEY}\""));
    let restored: Ed25519PublicKey = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, public_key);

    assert!(serde_json::from_str::<Ed25519Signature>("\"0x00\"").is_err());
}

#[test]
fn debug_output_redacts_private_key() {
    let rendered = format!("{:?}", rfc_private_key());
    assert!(!rendered.contains(RFC_SEED));
}

#[test]
fn rejected_key_payloads_leave_position_untouched() {
    let mut short_key = vec![0x1f];
    short_key.extend_from_slice(&[0u8; 31]);
    let mut deserializer = Deserializer::new(&short_key);
    assert!(<Ed25519PublicKey as Deserializable>::deserialize(&mut deserializer).is_err());
    assert_eq!(deserializer.position(), 0);

    let mut unknown_scheme = vec![0x07, 0x20];
    unknown_scheme.extend_from_slice(&[0u8; 32]);
    let mut deserializer = Deserializer::new(&unknown_scheme);
    assert!(<PublicKey as Deserializable>::deserialize(&mut deserializer).is_err());
    assert_eq!(deserializer.position(), 0);

    let mut truncated_signature = vec![0x00, 0x40];
    truncated_signature.extend_from_slice(&[0u8; 10]);
    let mut deserializer = Deserializer::new(&truncated_signature);
    assert!(<Signature as Deserializable>::deserialize(&mut deserializer).is_err());
    assert_eq!(deserializer.position(), 0);
}

#[test]
fn all_zero_public_key_rejects_everything() {
    let public_key = Ed25519PublicKey::from_bytes(&[0u8; 32]).unwrap();
    let signature = rfc_private_key().sign(b"msg");
    assert!(!public_key.verify_signature(b"msg", &signature));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn any_bit_flip_breaks_the_signature(
        message in prop::collection::vec(any::<u8>(), 0..128),
        bit in 0usize..(64 * 8),
    ) {
        let private_key = rfc_private_key();
        let public_key = private_key.public_key();
        let signature = private_key.sign(&message);
        prop_assert!(public_key.verify_signature(&message, &signature));

        let mut bytes = signature.to_bytes();
        bytes[bit / 8] ^= 1 << (bit % 8);
        let tampered = Ed25519Signature::from_bytes(&bytes).unwrap();
        prop_assert!(!public_key.verify_signature(&message, &tampered));
    }

    #[test]
    fn any_message_change_breaks_the_signature(
        message in prop::collection::vec(any::<u8>(), 1..128),
        index in any::<prop::sample::Index>(),
    ) {
        let private_key = rfc_private_key();
        let signature = private_key.sign(&message);
        let mut altered = message.clone();
        let position = index.index(altered.len());
        altered[position] ^= 0x01;
        prop_assert!(!private_key.public_key().verify_signature(&altered, &signature));
    }
}
