use digitcast::utils::sample::random_digits;
use digitcast::{predict, Context, Predictor};

#[test]
fn test_cache_hits_for_the_same_snapshot() {
    let data = random_digits(120, 9);
    let mut predictor = Predictor::default();

    let first = predictor.predict(&data).cloned();
    let second = predictor.predict(&data).cloned();
    assert_eq!(first, second);
    assert_eq!(first, predict(&data, Context::default()));
    assert_eq!(predictor.stats(), (1, 1));
}

#[test]
fn test_cache_invalidates_on_change() {
    let mut data = random_digits(120, 9);
    let mut predictor = Predictor::default();
    let before = predictor.predict(&data).cloned();

    data.push(4);
    let after = predictor.predict(&data).cloned();
    assert_ne!(before, after);
    assert_eq!(after.unwrap().stats.len, 121);
    assert_eq!(predictor.stats(), (0, 2));

    predictor.invalidate();
    let _ = predictor.predict(&data);
    assert_eq!(predictor.stats(), (0, 3));
}

#[test]
fn test_cache_remembers_missing_results() {
    let mut predictor = Predictor::default();
    assert!(predictor.predict(&[1, 2, 3]).is_none());
    assert!(predictor.predict(&[1, 2, 3]).is_none());
    assert_eq!(predictor.stats(), (1, 1));
}

#[test]
fn test_new_parameters_drop_the_cache() {
    let data = random_digits(80, 2);
    let mut predictor = Predictor::default();
    let _ = predictor.predict(&data);

    predictor.set_ctx(Context::default().with_temperature(2.0));
    let hot = predictor.predict(&data).cloned().unwrap();
    assert_eq!(predictor.stats(), (0, 2));
    assert_eq!(hot, predict(&data, *predictor.ctx()).unwrap());
}
