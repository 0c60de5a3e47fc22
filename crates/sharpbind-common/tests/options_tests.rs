//! Tests for resolver option loading.

use sharpbind_common::ResolverOptions;
use sharpbind_common::limits;

#[test]
fn test_default_options_use_central_limits() {
    let options = ResolverOptions::default();
    assert!(!options.memoize);
    assert_eq!(options.max_base_chain_depth, limits::MAX_BASE_CHAIN_DEPTH);
    assert_eq!(
        options.max_type_argument_nesting,
        limits::MAX_TYPE_ARGUMENT_NESTING
    );
}

#[test]
fn test_partial_json_keeps_defaults() {
    let options = ResolverOptions::from_json(r#"{ "memoize": true }"#).unwrap();
    assert!(options.memoize);
    assert_eq!(options.max_base_chain_depth, limits::MAX_BASE_CHAIN_DEPTH);
}

#[test]
fn test_camel_case_fields() {
    let options = ResolverOptions::from_json(
        r#"{ "maxBaseChainDepth": 8, "maxTypeArgumentNesting": 3 }"#,
    )
    .unwrap();
    assert_eq!(options.max_base_chain_depth, 8);
    assert_eq!(options.max_type_argument_nesting, 3);
}

#[test]
fn test_malformed_json_is_an_error() {
    assert!(ResolverOptions::from_json("{ memoize: yes").is_err());
}

#[test]
fn test_with_memoization_builder() {
    let options = ResolverOptions::default().with_memoization(true);
    assert!(options.memoize);
}
