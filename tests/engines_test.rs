// Integration tests for the step engines, driven through the public API

use stepviz::graph_algorithms::{GraphAlgorithmKind, UNREACHABLE};
use stepviz::sorting::SortKind;
use stepviz::structures::{
    sample_graph, BinaryTree, DirectedGraph, DoublyLinkedList, Graph, GraphEdge, PriorityQueue,
    SinglyLinkedList, UndirectedGraph,
};
use stepviz::trace::StepStatus;

#[test]
fn test_every_sort_ends_sorted() {
    let input = vec![5, 3, 8, 1, 9, 2, 2];
    for kind in SortKind::ALL {
        let trace = kind.sort(&input);
        assert_eq!(
            trace.last().unwrap().data,
            vec![1, 2, 2, 3, 5, 8, 9],
            "{} did not sort",
            kind.name()
        );
        assert_eq!(trace.first().unwrap().data, input);
    }
}

#[test]
fn test_doubly_list_add_remove_round_trip() {
    let mut list = DoublyLinkedList::new();
    list.add_last(1);
    list.add_last(2);
    let before = (list.head(), list.tail(), list.len());

    list.add_first(0);
    list.remove_first();

    assert_eq!((list.head(), list.tail(), list.len()), before);
}

#[test]
fn test_singly_list_add_remove_round_trip() {
    let mut list = SinglyLinkedList::new();
    list.add_last(1);
    let before = (list.head(), list.tail(), list.len());

    list.add_first(0);
    list.remove_first();

    assert_eq!((list.head(), list.tail(), list.len()), before);
}

#[test]
fn test_search_never_finds_orphaned_slots() {
    let mut list = DoublyLinkedList::new();
    for v in [10, 20, 30] {
        list.add_last(v);
    }
    list.remove_by_value(&20);
    list.remove_first();
    // slots for 10 and 20 are still in the store, only 30 is linked
    assert_eq!(list.nodes().len(), 3);

    for (value, present) in [(10, false), (20, false), (30, true)] {
        let trace = list.search(&value);
        let found = trace
            .last()
            .unwrap()
            .description
            .starts_with("Element found");
        assert_eq!(found, present, "value {}", value);
        assert_eq!(trace.final_status().is_ok(), present);
    }
}

#[test]
fn test_bst_in_order() {
    let mut tree = BinaryTree::new();
    for v in [50, 30, 70, 20, 40] {
        tree.insert(v);
    }
    assert_eq!(tree.in_order(), vec![20, 30, 40, 50, 70]);
}

#[test]
fn test_invalid_edge_is_a_no_op() {
    let mut graph = DirectedGraph::new();
    for label in ["A", "B", "C"] {
        graph.add_node(label.to_string());
    }
    graph.add_edge(0, 1, 4.0);
    let trace = graph.add_edge(5, 1, 1.0);

    let data = graph.graph_data();
    assert_eq!(data.edges.len(), 1);
    assert_eq!(data.nodes.len(), 3);
    assert!(trace.last().unwrap().description.starts_with("Error"));
    assert!(!trace.final_status().is_ok());
}

#[test]
fn test_undirected_edge_records() {
    let mut graph = UndirectedGraph::new();
    graph.add_node("A".to_string());
    graph.add_node("B".to_string());
    graph.add_edge(0, 1, 2.5);
    assert_eq!(
        graph.graph_data().edges,
        vec![
            GraphEdge { from: 0, to: 1, weight: 2.5 },
            GraphEdge { from: 1, to: 0, weight: 2.5 },
        ]
    );
}

#[test]
fn test_bfs_visit_order_on_sample_graph() {
    let graph = sample_graph().graph_data();
    let trace = GraphAlgorithmKind::Bfs.execute(&graph, 0, None);
    assert_eq!(trace.last().unwrap().data.visited_nodes, vec![0, 1, 2, 3, 4]);
}

#[test]
fn test_dijkstra_shortest_path_on_sample_graph() {
    let graph = sample_graph().graph_data();
    let trace = GraphAlgorithmKind::Dijkstra.execute(&graph, 0, Some(4));
    let last = &trace.last().unwrap().data;
    assert_eq!(last.distances.get(&4), Some(&7.0));
    assert_eq!(last.path, vec![0, 2, 1, 3, 4]);
}

#[test]
fn test_dijkstra_unreachable_target() {
    let graph = sample_graph().graph_data();
    // nothing points back to A
    let trace = GraphAlgorithmKind::Dijkstra.execute(&graph, 4, Some(0));
    let last = &trace.last().unwrap().data;
    assert_eq!(last.distances.get(&0), Some(&UNREACHABLE));
    assert!(trace.last().unwrap().description.contains("unreachable"));
}

#[test]
fn test_priority_queue_order() {
    let mut queue = PriorityQueue::new();
    queue.enqueue("low".to_string(), 5);
    queue.enqueue("high".to_string(), 1);
    let (_, removed) = queue.dequeue();
    assert_eq!(removed.map(|item| item.value), Some("high".to_string()));
}

#[test]
fn test_fail_soft_statuses() {
    let mut queue = PriorityQueue::<String>::new();
    assert_eq!(queue.dequeue().0.final_status(), StepStatus::EmptyStructure);

    let mut list = SinglyLinkedList::<i64>::new();
    assert_eq!(list.remove_first().final_status(), StepStatus::EmptyStructure);
    assert_eq!(list.search(&1).final_status(), StepStatus::NotFound);
}
