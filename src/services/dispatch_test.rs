use super::*;

// =============================================================================
// dispatch: parameter validation
// =============================================================================

#[test]
fn dispatch_unknown_algorithm_is_rejected() {
    let err = dispatch(Some("unknown"), Some(&[3, 1, 2])).unwrap_err();
    assert!(matches!(err, DispatchError::UnknownAlgorithm(_)));
    assert_eq!(err.to_string(), "unknown algorithm: unknown");
}

#[test]
fn dispatch_empty_array_is_missing_for_every_algorithm() {
    for algorithm in Algorithm::ALL {
        let err = dispatch(Some(algorithm.as_str()), Some(&[])).unwrap_err();
        assert!(matches!(err, DispatchError::MissingParameters), "{algorithm}");
    }
}

#[test]
fn dispatch_empty_array_wins_over_unknown_algorithm() {
    let err = dispatch(Some("unknown"), Some(&[])).unwrap_err();
    assert!(matches!(err, DispatchError::MissingParameters));
}

#[test]
fn dispatch_missing_fields_are_rejected() {
    assert!(matches!(dispatch(None, Some(&[1])), Err(DispatchError::MissingParameters)));
    assert!(matches!(dispatch(Some("bubble"), None), Err(DispatchError::MissingParameters)));
    assert!(matches!(dispatch(Some(""), Some(&[1])), Err(DispatchError::MissingParameters)));
}

// =============================================================================
// dispatch: successful runs
// =============================================================================

#[test]
fn dispatch_bubble_reference_example() {
    let run = dispatch(Some("bubble"), Some(&[5, 3, 8, 1])).unwrap();
    assert_eq!(run.steps.last().map(Step::sequence), Some(&[1, 3, 5, 8][..]));
    assert_eq!(run.steps[0].highlighted(), &[0, 1]);
    assert_eq!(run.complexity, Algorithm::Bubble.complexity());
    assert!(run.execution_time >= 0.0);
}

#[test]
fn dispatch_does_not_mutate_caller_array() {
    let array = vec![9, 4, 7];
    let _ = dispatch(Some("quick"), Some(&array)).unwrap();
    assert_eq!(array, vec![9, 4, 7]);
}

#[test]
fn dispatch_surfaces_sorter_failure() {
    let err = dispatch(Some("counting"), Some(&[0, 1_000_000_000])).unwrap_err();
    assert!(matches!(err, DispatchError::Sort(SortError::RangeTooLarge { .. })));
}

#[test]
fn run_serializes_wire_shape() {
    let run = run(Algorithm::Selection, &[2, 1]).unwrap();
    let json = serde_json::to_value(&run).unwrap();
    assert!(json["steps"].is_array());
    assert!(json["execution_time"].is_f64());
    assert_eq!(json["complexity"]["time"], "O(n^2)");
    assert_eq!(json["complexity"]["space"], "O(1)");
    assert_eq!(json["steps"][0]["compared"], serde_json::json!([0, 1]));
}

#[test]
fn run_round_trips_through_json() {
    let original = run(Algorithm::Merge, &[4, 2, 3]).unwrap();
    let restored: Run = serde_json::from_str(&serde_json::to_string(&original).unwrap()).unwrap();
    assert_eq!(restored.steps, original.steps);
    assert_eq!(restored.complexity, original.complexity);
}

// =============================================================================
// dispatch_all
// =============================================================================

#[test]
fn dispatch_all_covers_every_algorithm_in_order() {
    let results = dispatch_all(&[30, 10, 20]);
    let order: Vec<_> = results.iter().map(|(a, _)| *a).collect();
    assert_eq!(order, Algorithm::ALL.to_vec());
    for (algorithm, result) in results {
        let run = result.unwrap();
        assert_eq!(run.steps.last().map(Step::sequence), Some(&[10, 20, 30][..]), "{algorithm}");
    }
}

#[test]
fn dispatch_all_bubble_outlasts_merge() {
    let input = [55, 12, 98, 34, 71, 10, 66, 43, 27, 89];
    let results = dispatch_all(&input);
    let steps = |target: Algorithm| {
        results
            .iter()
            .find(|(a, _)| *a == target)
            .and_then(|(_, r)| r.as_ref().ok())
            .map(|r| r.steps.len())
            .unwrap()
    };
    assert_eq!(steps(Algorithm::Bubble), 90);
    assert!(steps(Algorithm::Merge) < steps(Algorithm::Bubble));
}
