use algoscope::config::EngineConfig;
use algoscope::prelude::*;

fn ids(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

const SORTS: [&str; 4] = ["bubble_sort", "merge_sort", "quick_sort", "heap_sort"];

#[test]
fn sorting_is_idempotent_and_matches_reference() {
    let manager = AlgorithmManager::new();
    let options = GenerateOptions {
        seed: Some(2024),
        ..GenerateOptions::default()
    };

    for shape in DataShape::ALL {
        let data = generate(shape, 300, &options).unwrap();
        let mut expected = data.clone().into_inner();
        expected.sort();

        for id in SORTS {
            let first = manager.execute(id, &data, &RunOptions::default()).unwrap();
            let sorted = first.result.as_sorted().unwrap().to_vec();
            assert_eq!(sorted, expected, "{} on {}", id, shape);
            assert!(first.metadata.comparisons > 0);

            let again = manager
                .execute(id, &Dataset::new(sorted.clone()).unwrap(), &RunOptions::default())
                .unwrap();
            assert_eq!(again.result.as_sorted().unwrap(), sorted.as_slice());
        }
    }
}

#[test]
fn sorts_at_the_input_ceiling_on_sorted_data() {
    let manager = AlgorithmManager::new();
    let max = manager.max_input_size() as i64;
    let sorted = Dataset::integers(0..max);
    let reversed = Dataset::integers((0..max).rev());

    for id in ["quick_sort", "merge_sort", "heap_sort"] {
        for data in [&sorted, &reversed] {
            let result = manager.execute(id, data, &RunOptions::default()).unwrap();
            assert_eq!(result.result.as_sorted().unwrap(), sorted.as_slice(), "{}", id);
            assert_eq!(result.metadata.input_size, 100_000);
            assert_eq!(result.metadata.steps_recorded, 0);
            assert!(!result.metadata.trace_truncated);
        }
    }
}

#[test]
fn binary_search_examples() {
    let manager = AlgorithmManager::new();
    let sorted = Dataset::integers([11, 12, 22, 25, 34, 64, 90]);

    let hit = manager
        .execute("binary_search", &sorted, &RunOptions::with_target(Element::Int(25)))
        .unwrap();
    let search = hit.result.as_search().unwrap();
    assert!(search.found);
    assert_eq!(search.index, 3);
    assert_eq!(search.value, Some(Element::Int(25)));

    let miss = manager
        .execute("binary_search", &sorted, &RunOptions::with_target(Element::Int(100)))
        .unwrap();
    let search = miss.result.as_search().unwrap();
    assert!(!search.found);
    assert_eq!(search.index, -1);
    assert_eq!(search.value, None);
}

#[test]
fn binary_search_rejects_unsorted_input() {
    let manager = AlgorithmManager::new();
    let err = manager
        .execute(
            "binary_search",
            &Dataset::integers([64, 34, 25, 12, 22, 11, 90]),
            &RunOptions::with_target(Element::Int(25)),
        )
        .unwrap_err();
    assert!(matches!(err.root(), LabError::PreconditionFailed(_)));
    assert_eq!(err.status_code(), http::StatusCode::BAD_REQUEST);
}

#[test]
fn linear_search_example() {
    let manager = AlgorithmManager::new();
    let result = manager
        .execute(
            "linear_search",
            &Dataset::integers([64, 34, 25, 12, 22, 11, 90]),
            &RunOptions::with_target(Element::Int(25)),
        )
        .unwrap();
    let search = result.result.as_search().unwrap();
    assert!(search.found);
    assert_eq!(search.index, 2);
    assert_eq!(search.value, Some(Element::Int(25)));
}

#[test]
fn compare_returns_identical_sorted_results() {
    let manager = AlgorithmManager::new();
    let entries = manager
        .compare(
            &ids(&["bubble_sort", "merge_sort"]),
            &Dataset::integers([3, 1, 4, 1, 5, 9, 2, 6]),
            &RunOptions::default(),
        )
        .unwrap();

    let bubble = entries[0].outcome.as_ref().unwrap();
    let merge = entries[1].outcome.as_ref().unwrap();
    assert_eq!(bubble.result, merge.result);
    assert_eq!(
        serde_json::to_string(&bubble.result).unwrap(),
        "[1,1,2,3,4,5,6,9]"
    );
}

#[test]
fn history_returns_min_of_count_and_limit() {
    let manager = AlgorithmManager::new();
    let data = Dataset::integers([5, 2, 9]);

    for n in 1..=12usize {
        manager.execute("merge_sort", &data, &RunOptions::default()).unwrap();
        for limit in [0, 1, 5, 10, 50] {
            let history = manager.history(limit);
            assert_eq!(history.len(), n.min(limit));
            assert!(history.windows(2).all(|w| w[0].id < w[1].id));
        }
    }
    assert_eq!(manager.history(1)[0].id, 12);
}

#[test]
fn history_is_bounded_by_capacity() {
    let config = EngineConfig {
        history_capacity: 3,
        ..EngineConfig::default()
    };
    let manager = AlgorithmManager::from_config(&config);
    for _ in 0..5 {
        manager
            .execute("heap_sort", &Dataset::integers([2, 1]), &RunOptions::default())
            .unwrap();
    }
    let ids: Vec<u64> = manager.history(10).iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 4, 5]);
}

#[test]
fn generated_sorted_data_and_size_bounds() {
    for _ in 0..10 {
        let data = generate(DataShape::Sorted, 10, &GenerateOptions::default()).unwrap();
        assert_eq!(data.len(), 10);
        assert!(data.is_sorted());
    }
    for size in [0, 100_001] {
        assert!(matches!(
            generate(DataShape::Sorted, size, &GenerateOptions::default()),
            Err(LabError::InvalidArgument(_))
        ));
    }
}

#[test]
fn concurrent_executions_do_not_share_counters() {
    let manager = std::sync::Arc::new(AlgorithmManager::new());
    let data = Dataset::integers((0..200).rev());
    let expected = manager
        .execute("bubble_sort", &data, &RunOptions::default())
        .unwrap()
        .metadata;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let manager = std::sync::Arc::clone(&manager);
            let data = data.clone();
            std::thread::spawn(move || {
                manager
                    .execute("bubble_sort", &data, &RunOptions::default())
                    .unwrap()
                    .metadata
            })
        })
        .collect();

    for handle in handles {
        let metadata = handle.join().unwrap();
        assert_eq!(metadata.comparisons, expected.comparisons);
        assert_eq!(metadata.swaps, expected.swaps);
        assert_eq!(metadata.steps_count, expected.steps_count);
    }
    assert_eq!(manager.history(100).len(), 9);
}
