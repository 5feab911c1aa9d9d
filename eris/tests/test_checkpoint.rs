//! Checkpoint Tests - Save/Load Generator State
//!
//! A generator serialized mid-sequence must resume exactly where it left off,
//! parameters included.

use eris::{LinearCongruentialGenerator, RandomGenerator};

#[test]
fn test_restored_generator_continues_sequence() {
    let mut original = LinearCongruentialGenerator::new(42);
    for _ in 0..25 {
        original.next_i64();
    }

    let json = serde_json::to_string(&original).expect("serialize");
    let mut restored: LinearCongruentialGenerator =
        serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, original);
    for i in 0..100 {
        assert_eq!(
            restored.next_i64(),
            original.next_i64(),
            "Restored sequence diverged at step {}",
            i
        );
    }
}

#[test]
fn test_checkpoint_keeps_custom_parameters() {
    let mut original = LinearCongruentialGenerator::with_parameters(9, 4, 1, 0);
    original.next_i64();
    original.next_i64();

    let json = serde_json::to_value(&original).expect("serialize");
    assert_eq!(json["modulus"], 9);
    assert_eq!(json["multiplier"], 4);
    assert_eq!(json["increment"], 1);
    assert_eq!(json["state"], 5);

    let mut restored: LinearCongruentialGenerator =
        serde_json::from_value(json).expect("deserialize");
    let rest: Vec<i64> = (0..8).map(|_| restored.next_i64()).collect();
    assert_eq!(rest, vec![5, 3, 4, 8, 6, 7, 2, 0]);
}
