use chainbytes::client::{ApiType, ClientConfig, MimeType, PostRequest, RequestError};
use chainbytes::crypto::{Ed25519PrivateKey, KeyMaterial};
use chainbytes::ser::{IntWidth, RangeReason};

const CONFIG: &str = r#"
fullnode = "https://node.example/v1/"
faucet = "https://faucet.example"

[headers]
x-client = "chainbytes-tests"
"#;

#[test]
fn config_loads_from_toml() {
    let config = ClientConfig::from_toml_str(CONFIG).unwrap();
    assert_eq!(config.endpoint(ApiType::Fullnode), Some("https://node.example/v1/"));
    assert_eq!(config.endpoint(ApiType::Indexer), None);
    assert_eq!(
        config.request_url(ApiType::Fullnode).unwrap(),
        "https://node.example/v1"
    );
    assert_eq!(config.headers["x-client"], "chainbytes-tests");
}

#[test]
fn malformed_toml_is_reported() {
    let err = ClientConfig::from_toml_str("fullnode = [").unwrap_err();
    assert!(matches!(err, RequestError::Config(_)));
}

#[test]
fn bcs_request_carries_canonical_body() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();

    let config = ClientConfig::from_toml_str(CONFIG).unwrap();
    let key = Ed25519PrivateKey::from_bytes(&[7u8; 32]).unwrap();
    let payload = (key.public_key(), 10u64);
    let request = PostRequest::bcs(
        &config,
        ApiType::Fullnode,
        "submitTransaction",
        "/transactions",
        &payload,
    )
    .unwrap()
    .with_content_type(MimeType::BcsSignedTransaction)
    .with_header("x-request", "1");

    assert_eq!(request.url(), "https://node.example/v1/transactions");
    assert_eq!(request.content_type.as_str(), "application/x.aptos.signed_transaction+bcs");
    assert_eq!(request.accept_type, MimeType::Json);
    assert_eq!(request.body, chainbytes::serialize(&payload).unwrap());
    assert_eq!(request.body.len(), 1 + 32 + 8);
    assert_eq!(request.headers.len(), 2);
    assert_eq!(request.origin_method, "submitTransaction");
}

#[test]
fn request_without_endpoint_fails() {
    let config = ClientConfig::from_toml_str(CONFIG).unwrap();
    let err = PostRequest::bcs(&config, ApiType::Indexer, "query", "", &1u8).unwrap_err();
    assert!(matches!(
        err,
        RequestError::MissingEndpoint {
            api: ApiType::Indexer
        }
    ));
}

#[test]
fn oversized_body_surfaces_range_error() {
    struct TooWide;

    impl chainbytes::Serializable for TooWide {
        fn serialize(
            &self,
            serializer: &mut chainbytes::Serializer,
        ) -> chainbytes::ser::RangeResult<()> {
            serializer.serialize_uint(IntWidth::U8, 300u32)?;
            Ok(())
        }
    }

    let err = PostRequest::bcs(&ClientConfig::local(), ApiType::Fullnode, "view", "view", &TooWide)
        .unwrap_err();
    match err {
        RequestError::Encode(range) => {
            assert_eq!(range.width, IntWidth::U8);
            assert_eq!(range.reason, RangeReason::Overflow);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn mime_and_api_names() {
    assert_eq!(MimeType::Bcs.to_string(), "application/x-bcs");
    assert_eq!(MimeType::Json.to_string(), "application/json");
    assert_eq!(ApiType::Faucet.to_string(), "faucet");
}
