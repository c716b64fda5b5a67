//! Cache key tests

use apicache_domain::value_objects::CacheKey;

#[test]
fn test_key_is_kept_verbatim() {
    let key = CacheKey::new("/items/articles?limit=10");
    assert_eq!(key.as_str(), "/items/articles?limit=10");
    assert_eq!(key.to_string(), "/items/articles?limit=10");
}

#[test]
fn test_digest_is_fixed_width_hex() {
    for path in ["", "/items", "/items/articles?filter[status][_eq]=published"] {
        let digest = CacheKey::new(path).digest();
        assert_eq!(digest.len(), 128);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }
}

#[test]
fn test_digest_is_deterministic_and_distinct() {
    let a = CacheKey::from("/items");
    let b = CacheKey::from("/items/");

    assert_eq!(a.digest(), CacheKey::from("/items".to_string()).digest());
    assert_ne!(a.digest(), b.digest());
}

#[test]
fn test_known_digest() {
    // sha512("abc")
    assert_eq!(
        CacheKey::new("abc").digest(),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_key_serializes_as_plain_string() {
    let json = serde_json::to_string(&CacheKey::new("/items")).unwrap();
    assert_eq!(json, "\"/items\"");
}
