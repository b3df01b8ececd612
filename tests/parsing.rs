use digitcast::utils::parsing::{format_digits, parse_digits};
use digitcast::utils::sample::random_digits;

#[test]
fn test_parse_separators() {
    let text = "1, 2, 3\n4 5\t6,7,,8 ,9\r\n0";
    assert_eq!(parse_digits(text), vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 0]);
}

#[test]
fn test_parse_drops_invalid_tokens() {
    let text = "3 12 -1 a 4.5 7 +2 99 x9 0";
    assert_eq!(parse_digits(text), vec![3, 7, 2, 0]);
}

#[test]
fn test_format_is_parsable() {
    let data = random_digits(64, 1);
    let text = format_digits(&data);
    assert!(text.starts_with(&data[0].to_string()));
    assert_eq!(parse_digits(&text), data);
}

#[test]
fn test_random_digits() {
    let a = random_digits(1000, 17);
    let b = random_digits(1000, 17);
    let c = random_digits(1000, 18);
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a.iter().all(|d| *d < 10));
    for digit in 0..10 {
        assert!(a.contains(&digit));
    }
}
