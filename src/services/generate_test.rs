use super::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn default_config_yields_ten_values_in_range() {
    let array = random_array(&GenerateConfig::default());
    assert_eq!(array.len(), 10);
    assert!(array.iter().all(|v| (10..=100).contains(v)));
}

#[test]
fn seeded_generation_is_reproducible() {
    let config = GenerateConfig::new(8, -3, 3);
    let a = generate_array(&mut StdRng::seed_from_u64(42), &config);
    let b = generate_array(&mut StdRng::seed_from_u64(42), &config);
    assert_eq!(a, b);
    assert!(a.iter().all(|v| (-3..=3).contains(v)));
}

#[test]
fn degenerate_range_repeats_single_value() {
    let array = random_array(&GenerateConfig::new(4, 7, 7));
    assert_eq!(array, vec![7, 7, 7, 7]);
}

#[test]
fn zero_length_yields_empty_array() {
    assert!(random_array(&GenerateConfig::new(0, 10, 100)).is_empty());
}
