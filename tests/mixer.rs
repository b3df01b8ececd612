use digitcast::analysis::entropy::EntropyWeights;
use digitcast::models::mixer::{adjust_weights, apply_temperature, rank, Mixer};
use digitcast::models::{Family, History};
use digitcast::utils::distribution::is_distribution;
use digitcast::utils::sample::{periodic_digits, random_digits};
use digitcast::{predict, Context};

#[test]
fn test_not_enough_data() {
    let data = random_digits(19, 1);
    assert!(predict(&data, Context::default()).is_none());
    assert!(predict(&[], Context::default()).is_none());
}

#[test]
fn test_twenty_digits() {
    let data = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5, 8, 9, 7, 9, 3, 2, 3, 8, 4];
    let result = predict(&data, Context::default()).unwrap();

    assert!(is_distribution(&result.percentages, 100.0, 1e-9));
    assert_eq!(result.top.len(), 5);
    for pair in result.top.windows(2) {
        assert!(pair[0].percentage >= pair[1].percentage);
    }
    assert_eq!(result.best().unwrap().percentage, result.top[0].percentage);

    // Too short for the regime detector.
    assert!(result.regime.change_points.is_empty());
    assert_eq!(result.regime.current_regime, 0);
}

#[test]
fn test_result_invariants() {
    for seed in 0..8 {
        let data = random_digits(100 + 37 * seed as usize, seed);
        let result = predict(&data, Context::default()).unwrap();

        assert!(is_distribution(&result.percentages, 100.0, 1e-9));
        assert!(is_distribution(&result.consensus, 1.0, 1e-9));
        assert!(result.confidence >= -1e-9 && result.confidence <= 100.0);
        assert!(result.entropy >= 0.0 && result.entropy <= 10f64.log2() + 1e-9);

        assert_eq!(result.methods.len(), 9);
        let total: f64 = result.methods.iter().map(|m| m.weight).sum();
        assert!((total - 1.0).abs() < 1e-12);
        for pair in result.methods.windows(2) {
            assert!(pair[0].weight >= pair[1].weight);
        }
        for m in result.methods.iter() {
            assert!(is_distribution(&m.probabilities, 1.0, 1e-9), "{}", m.name);
        }
        assert_eq!(result.stats.len, data.len());
    }
}

#[test]
fn test_deterministic() {
    let data = random_digits(400, 11);
    let a = predict(&data, Context::default());
    let b = predict(&data, Context::default());
    assert_eq!(a, b);
}

#[test]
fn test_constant_sequence() {
    let data = [3; 40];
    let result = predict(&data, Context::default()).unwrap();
    assert_eq!(result.best().unwrap().digit, 3);
    assert!(result.confidence > 0.0);
    assert_eq!(result.entropy_info.pattern_weight, 1.0);
}

#[test]
fn test_periodic_sequence() {
    let data = periodic_digits(200, 10);
    let result = predict(&data, Context::default()).unwrap();
    // The sequence ends in 9.
    assert_eq!(result.best().unwrap().digit, 0);
    let selection = result.selection.unwrap();
    assert_eq!(selection.order, 5);
}

#[test]
fn test_pattern_models_gain_weight_on_low_entropy() {
    let data = [0u8; 30];
    let history = History::new(&data, Context::default());
    let mut methods = Mixer::new(&history).evaluate();
    let info = EntropyWeights {
        entropy: 0.0,
        pattern_weight: 1.0,
        frequency_weight: 0.0,
    };
    adjust_weights(&mut methods, &info, 0.3);

    let total: f64 = methods.iter().map(|m| m.weight).sum();
    assert!((total - 1.0).abs() < 1e-12);

    let pattern = methods.iter().find(|m| m.family == Family::Pattern).unwrap();
    let frequency = methods
        .iter()
        .find(|m| m.family == Family::Frequency)
        .unwrap();
    let ratio = (pattern.weight / pattern.base_weight)
        / (frequency.weight / frequency.base_weight);
    assert!((ratio - 1.3).abs() < 1e-12);
}

#[test]
fn test_temperature() {
    let probs = [0.5, 0.2, 0.1, 0.1, 0.05, 0.05, 0.0, 0.0, 0.0, 0.0];
    let same = apply_temperature(&probs, 1.0);
    for (s, p) in same.iter().zip(probs.iter()) {
        assert!((s - p * 100.0).abs() < 1e-9);
    }

    let flat = apply_temperature(&probs, 1.2);
    assert!(is_distribution(&flat, 100.0, 1e-9));
    assert!(flat[0] < 50.0);
    assert!(flat[5] > 5.0);

    let sharp = apply_temperature(&probs, 0.5);
    assert!(sharp[0] > 50.0);
}

#[test]
fn test_rank_ties() {
    let ranked = rank(&[10.0; 10], 5);
    let digits: Vec<u8> = ranked.iter().map(|r| r.digit).collect();
    assert_eq!(digits, vec![0, 1, 2, 3, 4]);

    let mut percentages = [5.0; 10];
    percentages[7] = 55.0;
    let ranked = rank(&percentages, 3);
    assert_eq!(ranked[0].digit, 7);
    assert_eq!(ranked.len(), 3);
}

#[test]
fn test_top_k() {
    let data = random_digits(50, 5);
    let result = predict(&data, Context::default().with_top_k(3)).unwrap();
    assert_eq!(result.top.len(), 3);
    let result = predict(&data, Context::default().with_top_k(20)).unwrap();
    assert_eq!(result.top.len(), 10);
}
