// Integration tests for sessions, command scripts and the JSON wire shape

use serde_json::json;
use stepviz::errors::Error;
use stepviz::metrics::compare_algorithms;
use stepviz::session::{concat, parse_script, Frame, Session, SessionRegistry};
use stepviz::sorting::SortKind;
use stepviz::trace::{Player, StepStatus};
use std::time::Duration;

const SCRIPT: &str = r#"
# build a small graph and search it
dgraph add-node A
dgraph add-node B
dgraph add-node C
dgraph add-edge 0 1 2
dgraph add-edge 1 2
dgraph add-edge 7 0          # fails soft
search dijkstra dgraph 0 2

slist add-last 1
slist add-last 2
slist remove 1
"#;

#[test]
fn test_script_runs_in_order() {
    let commands = parse_script(SCRIPT).unwrap();
    assert_eq!(commands.len(), 10);

    let mut session = Session::new();
    let traces = session.run(&commands);

    assert_eq!(
        traces[5].final_status(),
        StepStatus::InvalidReference { id: 7, node_count: 3 }
    );
    match &traces[6].last().unwrap().data {
        Frame::Search(result) => {
            assert_eq!(result.path, vec![0, 1, 2]);
            assert_eq!(result.distances.get(&2), Some(&3.0));
        }
        other => panic!("expected a search frame, got {:?}", other),
    }
    assert_eq!(session.singly_list().values(), vec![2]);
}

#[test]
fn test_script_errors_carry_line_numbers() {
    let err = parse_script("bst insert 1\n\nbst plant 2").unwrap_err();
    match err {
        Error::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected a parse error, got {:?}", other),
    }
}

#[test]
fn test_registry_sessions_do_not_share_engines() {
    let mut registry = SessionRegistry::new(Duration::from_secs(60));
    let a = registry.create();
    let b = registry.create();
    let commands = parse_script("pq enqueue job 1").unwrap();

    registry.get_mut(a).unwrap().run(&commands);

    assert_eq!(registry.get(a).unwrap().priority_queue().len(), 1);
    assert!(registry.get(b).unwrap().priority_queue().is_empty());

    registry.remove(a).unwrap();
    assert!(matches!(
        registry.get_mut(a),
        Err(Error::SessionNotFound { .. })
    ));
}

#[test]
fn test_sort_trace_wire_shape() {
    let trace = SortKind::Bubble.sort(&[2, 1]);
    let value = serde_json::to_value(&trace).unwrap();
    assert_eq!(
        value,
        json!([
            {"data": [2, 1], "description": "Initial array state", "highlightIndices": []},
            {"data": [2, 1], "description": "Comparing elements at positions 0 and 1", "highlightIndices": [0, 1]},
            {"data": [1, 2], "description": "Swapping elements at positions 0 and 1", "highlightIndices": [0, 1]},
            {"data": [1, 2], "description": "Element 2 is in its final position", "highlightIndices": [1]},
            {"data": [1, 2], "description": "Array sorted", "highlightIndices": []},
        ])
    );
}

#[test]
fn test_frame_wire_shape_is_tagged() {
    let mut session = Session::new();
    let trace = session.apply(&parse_script("bst insert 5").unwrap()[0]);
    let value = serde_json::to_value(&trace).unwrap();
    let last = &value[1];
    assert_eq!(last["data"]["kind"], "tree");
    assert_eq!(last["data"]["state"]["root"], 0);
    assert_eq!(
        last["data"]["state"]["nodes"][0],
        json!({"value": 5, "leftIndex": null, "rightIndex": null})
    );
}

#[test]
fn test_comparison_wire_shape() {
    let comparison = compare_algorithms(&[3, 1, 2], "selection", "QUICK").unwrap();
    let value = serde_json::to_value(&comparison).unwrap();
    assert_eq!(value["algorithm1"]["name"], "Selection Sort");
    assert_eq!(value["algorithm2"]["name"], "Quick Sort");
    let metrics = &value["algorithm1"]["metrics"];
    for key in ["comparisons", "swaps", "executionTimeMs", "totalSteps"] {
        assert!(metrics.get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_unknown_comparison_algorithm_is_a_hard_error() {
    let result = compare_algorithms(&[1, 2], "bubble", "heap");
    assert!(matches!(result, Err(Error::UnknownAlgorithm { .. })));
}

#[test]
fn test_player_replays_a_whole_script() {
    let commands = parse_script(SCRIPT).unwrap();
    let traces = Session::new().run(&commands);
    let total: usize = traces.iter().map(|t| t.len()).sum();

    let mut player = Player::new(concat(traces), 10_000).unwrap();
    assert_eq!(player.len(), total);
    player.jump_to_end();
    assert!(player.step_forward().is_err());
    assert!(matches!(player.current().data, Frame::SinglyList(_)));

    player.rewind_to_start();
    assert_eq!(player.position(), 0);
    assert!(player.seek(total).is_err());
}

#[test]
fn test_player_rejects_oversized_traces() {
    let trace = SortKind::Quick.sort(&[5, 4, 3, 2, 1]).map(Frame::Sequence);
    let len = trace.len();
    assert!(matches!(
        Player::new(trace, len - 1),
        Err(Error::InvalidArgument { .. })
    ));
}
