use digitcast::analysis::changepoint::detect;
use digitcast::analysis::stats::SequenceStats;
use digitcast::utils::sample::random_digits;
use digitcast::Context;

fn step_sequence(zeros: usize, nines: usize) -> Vec<u8> {
    let mut data = vec![0; zeros];
    data.extend(std::iter::repeat(9).take(nines));
    data
}

#[test]
fn test_detects_a_step() {
    let data = step_sequence(60, 60);
    let info = detect(&data, &Context::default());

    let at_step = info
        .change_points
        .iter()
        .find(|cp| cp.index == 60)
        .expect("No change point at the step");
    assert!((at_step.magnitude - 9.0).abs() < 1e-12);

    for cp in info.change_points.iter() {
        assert!(cp.index > 40 && cp.index < 80, "Unexpected {:?}", cp);
        assert!(cp.magnitude > 1.5);
    }

    // The last window that still sees more than 1.5 of a shift.
    let last = info.last_change().unwrap();
    assert_eq!(last.index, 76);
    assert_eq!(info.current_regime, data.len() - 76);
}

#[test]
fn test_short_sequence_has_no_regime() {
    let data = step_sequence(20, 29);
    let info = detect(&data, &Context::default());
    assert!(info.change_points.is_empty());
    assert_eq!(info.current_regime, 0);
}

#[test]
fn test_stable_sequence_is_one_regime() {
    let data = vec![4; 100];
    let info = detect(&data, &Context::default());
    assert!(info.change_points.is_empty());
    assert_eq!(info.current_regime, 100);
}

#[test]
fn test_custom_window() {
    let data = step_sequence(30, 30);
    let ctx = Context::default().with_regime(5, 4.0);
    let info = detect(&data, &ctx);
    let first = info.change_points.first().unwrap();
    let last = info.last_change().unwrap();
    assert!(first.index >= 25 && last.index <= 35);
    assert_eq!(info.current_regime, 60 - last.index);
}

#[test]
fn test_random_sequences_rarely_shift() {
    let data = random_digits(1000, 3);
    let info = detect(&data, &Context::default());
    for cp in info.change_points.iter() {
        assert!(cp.index >= 20 && cp.index < 980);
    }
    assert!(info.current_regime <= data.len());
}

#[test]
fn test_stats() {
    let stats = SequenceStats::from_data(&[1, 2, 2, 3, 9]);
    assert_eq!(stats.len, 5);
    assert_eq!(stats.frequency[2], 2);
    assert_eq!(stats.frequency[0], 0);
    assert!((stats.mean - 3.4).abs() < 1e-12);
    assert_eq!(stats.last, Some(9));
    assert_eq!(stats.mode(), Some(2));

    let empty = SequenceStats::from_data(&[]);
    assert_eq!(empty.mean, 0.0);
    assert_eq!(empty.last, None);
    assert_eq!(empty.mode(), None);
}

#[test]
fn test_noisy_shift() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    let mut rng = StdRng::seed_from_u64(5);
    let low = Normal::new(2.0_f64, 1.0_f64).unwrap();
    let high = Normal::new(7.0_f64, 1.0_f64).unwrap();
    let mut data: Vec<u8> = Vec::new();
    for i in 0..200 {
        let v = if i < 100 {
            low.sample(&mut rng)
        } else {
            high.sample(&mut rng)
        };
        data.push(v.round().clamp(0.0, 9.0) as u8);
    }

    let info = detect(&data, &Context::default());
    assert!(info.change_points.iter().any(|cp| cp.index == 100));
    assert!(info.change_points.iter().all(|cp| cp.index > 70 && cp.index < 130));
    assert!(info.current_regime < 100);
}
