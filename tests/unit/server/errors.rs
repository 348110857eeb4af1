use super::*;
use crate::foundation::error::FetchError;

#[test]
fn fatal_errors_map_to_500_with_original_messages() {
    let account = ApiError::from(CardError::Account(FetchError::Status(404)));
    assert_eq!(account.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(account.message, "Failed to fetch player info");

    let bg = ApiError::from(CardError::Background(FetchError::Decode("x".into())));
    assert_eq!(bg.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(bg.message, "Failed to fetch background image");

    let enc = ApiError::from(CardError::encode("x"));
    assert_eq!(enc.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn empty_params_count_as_missing() {
    assert_eq!(non_empty(Some(String::new())), None);
    assert_eq!(non_empty(None), None);
    assert_eq!(non_empty(Some("1".into())), Some("1".to_string()));
}

#[test]
fn repeated_query_params_keep_first_occurrence() {
    let pairs = [
        ("uid", "42"),
        ("uid", "7"),
        ("lang", "en"),
        ("region", "ind"),
        ("key", "k"),
        ("region", "br"),
    ]
    .map(|(k, v)| (k.to_string(), v.to_string()));

    let q = OutfitQuery::from_pairs(pairs);
    assert_eq!(q.uid.as_deref(), Some("42"));
    assert_eq!(q.region.as_deref(), Some("ind"));
    assert_eq!(q.key.as_deref(), Some("k"));
    assert_eq!(OutfitQuery::from_pairs(Vec::new()), OutfitQuery::default());
}
