use looking_for_chars_core::{CountError, CountOptions, count, count_all, count_range, count_range_limited};

fn set(chars: &[char]) -> Option<&[char]> {
    Some(chars)
}

#[test]
fn counts_vowels_in_sentence() {
    let subject = "The quick brown fox jumps over the lazy dog";
    assert_eq!(count_all(Some(subject), set(&['a', 'e', 'i', 'o', 'u'])), Ok(11));
}

#[test]
fn documented_scenarios() {
    assert_eq!(count_all(Some("hello world"), set(&['o', 'l'])), Ok(5));
    assert_eq!(count_range(Some("hello world"), set(&['o']), 0, 4), Ok(1));
    assert_eq!(count_range_limited(Some("aaaa"), set(&['a']), 0, 3, 2), Ok(2));
    assert_eq!(count_all(Some(""), set(&['a'])), Ok(0));
    assert_eq!(count_range(Some("abc"), set(&['z']), 0, 2), Ok(0));
}

#[test]
fn duplicate_and_unordered_query_chars() {
    let a = count_all(Some("banana"), set(&['n', 'a']));
    let b = count_all(Some("banana"), set(&['a', 'a', 'n', 'a', 'n']));
    assert_eq!(a, Ok(5));
    assert_eq!(a, b);
}

#[test]
fn large_query_set_matches_small_one() {
    let subject = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
    let alphabet: Vec<char> = ('a'..='z').collect();
    let letters = subject.chars().filter(char::is_ascii_lowercase).count();
    assert_eq!(count_all(Some(subject), set(&alphabet)), Ok(letters));
}

#[test]
fn each_out_of_range_bound_is_rejected() {
    let subject = Some("abcdef");
    let chars = set(&['a']);

    for (start, end, argument) in [(-1, 3, "start"), (6, 6, "start"), (3, 2, "end"), (0, 6, "end")] {
        let err = count_range(subject, chars, start, end).unwrap_err();
        assert!(matches!(err, CountError::OutOfRange { .. }), "{start}..{end}");
        assert_eq!(err.argument(), argument);

        let err = count_range_limited(subject, chars, start, end, 1).unwrap_err();
        assert!(err.is_out_of_range());
    }
}

#[test]
fn absent_inputs_are_invalid_for_every_entry_point() {
    let chars = set(&['a']);
    assert!(count_all(None, chars).unwrap_err().is_invalid_argument());
    assert!(count_range(None, chars, 0, 0).unwrap_err().is_invalid_argument());
    assert!(count_range_limited(None, chars, 0, 0, 1).unwrap_err().is_invalid_argument());
    assert!(count(Some("a"), None, &CountOptions::default()).unwrap_err().is_invalid_argument());

    for err in [
        count_range(Some("a"), None, 0, 0).unwrap_err(),
        count_range_limited(Some("a"), None, 0, 0, 1).unwrap_err(),
    ] {
        assert!(err.is_invalid_argument());
        assert_eq!(err.argument(), "chars");
    }
}

#[test]
fn absent_chars_reported_before_limit_and_bounds() {
    let err = count_range_limited(Some("a"), None, 5, 9, 0).unwrap_err();
    assert!(err.is_invalid_argument());
    assert_eq!(err.argument(), "chars");

    let err = count_range(Some("a"), None, 5, 9).unwrap_err();
    assert_eq!(err.argument(), "chars");

    let options = CountOptions::new().with_range(5, 9).with_limit(0);
    assert_eq!(count(Some("a"), None, &options).unwrap_err().argument(), "chars");
}

#[test]
fn non_positive_limit_is_invalid() {
    for limit in [0, -1, i64::MIN] {
        let err = count_range_limited(Some("abc"), set(&['a']), 0, 2, limit).unwrap_err();
        assert_eq!(
            err,
            CountError::InvalidArgument {
                argument: "limit",
                reason: "must be greater than zero",
            }
        );
    }
}

#[test]
fn multibyte_subject_uses_character_positions() {
    let subject = Some("日本語のテキスト");
    assert_eq!(count_range(subject, set(&['語', 'キ']), 2, 6), Ok(2));
    assert_eq!(count_range(subject, set(&['ト']), 7, 7), Ok(1));
    assert!(count_range(subject, set(&['ト']), 0, 8).unwrap_err().is_out_of_range());
}
