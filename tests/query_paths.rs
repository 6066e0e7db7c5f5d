//! Both query front-ends over a shared store: structured parameters and
//! natural-language phrases must agree, since they feed one evaluator.

use strand::{Error, QueryParams, Strand};

fn seeded() -> Strand {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let db = Strand::ephemeral();
    for value in ["racecar", "hello world", "a", "noon"] {
        db.create_string(value).unwrap();
    }
    db
}

fn values(records: &[strand::StringRecord]) -> Vec<&str> {
    records.iter().map(|r| r.value.as_str()).collect()
}

#[test]
fn test_filter_palindromes_insertion_order() {
    let db = seeded();
    let resp = db
        .list_strings(QueryParams {
            is_palindrome: Some(true),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(values(&resp.records), vec!["racecar", "a", "noon"]);
    assert_eq!(resp.count, 3);
}

#[test]
fn test_length_bounds_inclusive_both_ends() {
    let db = seeded();
    let resp = db
        .list_strings(QueryParams {
            min_length: Some(5),
            max_length: Some(10),
            ..Default::default()
        })
        .unwrap();

    // "a" (1) and "noon" (4) fall below the minimum; "hello world" (11)
    // exceeds the maximum; "racecar" (7) is inside [5, 10].
    assert_eq!(values(&resp.records), vec!["racecar"]);

    // Exact boundary lengths are included on both ends
    db.create_string("12345").unwrap();
    db.create_string("1234567890").unwrap();
    let resp = db
        .list_strings(QueryParams {
            min_length: Some(5),
            max_length: Some(10),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(values(&resp.records), vec!["racecar", "12345", "1234567890"]);
}

#[test]
fn test_empty_filters_list_everything() {
    let db = seeded();
    let resp = db.list_strings(QueryParams::default()).unwrap();
    assert_eq!(resp.count, 4);
    assert!(resp.filters_applied.is_empty());
}

#[test]
fn test_contains_character_case_sensitive() {
    let db = seeded();
    db.create_string("Zebra").unwrap();

    let by_upper = db
        .list_strings(QueryParams {
            contains_character: Some("Z".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(values(&by_upper.records), vec!["Zebra"]);

    let by_lower = db
        .list_strings(QueryParams {
            contains_character: Some("z".to_string()),
            ..Default::default()
        })
        .unwrap();
    assert_eq!(by_lower.count, 0);
}

#[test]
fn test_phrase_and_structured_paths_agree() {
    let db = seeded();

    let by_phrase = db
        .list_strings_by_phrase("all single word palindromic strings")
        .unwrap();
    let by_params = db
        .list_strings(QueryParams {
            word_count: Some(1),
            is_palindrome: Some(true),
            ..Default::default()
        })
        .unwrap();

    assert_eq!(by_phrase.records, by_params.records);
    assert_eq!(by_phrase.interpreted.predicate, by_params.filters_applied);
}

#[test]
fn test_phrase_longer_than_is_strict() {
    let db = seeded();
    let resp = db
        .list_strings_by_phrase("strings longer than 4 characters")
        .unwrap();

    // min_length becomes 5: "noon" (4) is excluded
    assert_eq!(resp.interpreted.predicate.min_length, Some(5));
    assert_eq!(values(&resp.records), vec!["racecar", "hello world"]);
}

#[test]
fn test_phrase_first_vowel() {
    let db = seeded();
    let resp = db
        .list_strings_by_phrase("palindromic strings that contain the first vowel")
        .unwrap();

    // is_palindrome = true AND contains 'a'
    assert_eq!(values(&resp.records), vec!["racecar", "a"]);
}

#[test]
fn test_unparseable_phrase_is_an_error_not_empty() {
    let db = seeded();
    let err = db.list_strings_by_phrase("xyzzy plugh").unwrap_err();
    assert!(matches!(err, Error::Unparseable(_)));
    assert!(err.is_client_error());
}
