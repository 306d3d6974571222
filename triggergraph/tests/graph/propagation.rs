//! Propagation: suspension ordering, independent siblings, fault isolation,
//! payload flow, depth guard and re-entrant dispatch.

use std::sync::Arc;

use serde_json::json;
use tokio_stream::StreamExt;
use triggergraph::{
    ExecutionEvent, GraphBuilder, GraphConfig, InvokeEventNode, ObjectRef, Payload, TriggerKind,
    YieldNode,
};

use crate::common::{build_graph, node, Recorder, RecordingNode};

/// **Scenario**: A -> B -> C with B suspending N steps: C completes only after B.
#[tokio::test]
async fn successor_waits_for_suspended_node() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("B", &rec).steps(8)),
            node(RecordingNode::action("C", &rec)),
        ],
        &[("A", "out", "B"), ("B", "out", "C")],
        GraphConfig::default(),
    );

    graph.start();
    for _ in 0..4 {
        tokio::task::yield_now().await;
        assert_eq!(rec.count("C"), 0, "C must not run while B is suspended");
    }
    graph.wait_idle().await;
    assert_eq!(rec.order(), vec!["A", "B", "C"]);
}

/// **Scenario**: A long-suspending sibling does not hold back a fast one on the same port.
#[tokio::test]
async fn slow_sibling_does_not_block_fast_sibling() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("slow", &rec).steps(16)),
            node(RecordingNode::action("fast", &rec)),
            node(RecordingNode::action("after_fast", &rec)),
        ],
        &[("A", "out", "slow"), ("A", "out", "fast"), ("fast", "out", "after_fast")],
        GraphConfig::default(),
    );

    graph.start();
    graph.wait_idle().await;
    assert!(rec.position("fast").unwrap() < rec.position("slow").unwrap());
    assert!(rec.position("after_fast").unwrap() < rec.position("slow").unwrap());
}

/// **Scenario**: Fan-out to X and Y; X failing does not prevent Y.
#[tokio::test]
async fn failing_branch_does_not_stop_sibling() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("X", &rec).failing()),
            node(RecordingNode::action("Y", &rec)),
            node(RecordingNode::action("after_x", &rec)),
        ],
        &[("A", "out", "X"), ("A", "out", "Y"), ("X", "out", "after_x")],
        GraphConfig::default(),
    );
    let mut events = graph.subscribe();

    graph.start();
    graph.wait_idle().await;
    assert_eq!(rec.count("X"), 1);
    assert_eq!(rec.count("Y"), 1);
    assert_eq!(rec.count("after_x"), 0);

    let mut failed = Vec::new();
    while let Some(Ok(event)) = events.next().await {
        if let ExecutionEvent::NodeFailed { node_id, error } = event {
            failed.push((node_id.to_string(), error));
        }
        if failed.len() == 1 {
            break;
        }
    }
    assert_eq!(failed[0].0, "X");
    assert!(failed[0].1.contains("X failed"), "{}", failed[0].1);
}

/// **Scenario**: A panicking node is isolated like a failing one.
#[tokio::test]
async fn panicking_branch_is_isolated() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("X", &rec).panicking()),
            node(RecordingNode::action("Y", &rec).steps(2)),
            node(RecordingNode::action("after_x", &rec)),
        ],
        &[("A", "out", "X"), ("A", "out", "Y"), ("X", "out", "after_x")],
        GraphConfig::default(),
    );

    graph.start();
    graph.wait_idle().await;
    assert_eq!(rec.count("Y"), 1);
    assert_eq!(rec.count("after_x"), 0);

    // Graph stays usable after a fault.
    graph.start();
    graph.wait_idle().await;
    assert_eq!(rec.count("Y"), 2);
}

/// **Scenario**: Two output ports both continue, in the order returned.
#[tokio::test]
async fn every_returned_port_continues() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec).ports(&["left", "right"])),
            node(RecordingNode::action("L", &rec)),
            node(RecordingNode::action("R", &rec)),
        ],
        &[("A", "right", "R"), ("A", "left", "L")],
        GraphConfig::default(),
    );

    graph.start();
    graph.wait_idle().await;
    assert_eq!(rec.order(), vec!["A", "L", "R"]);
}

/// **Scenario**: Diamond A -> {B, C} -> D runs D once per path.
#[tokio::test]
async fn node_runs_once_per_incoming_path() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("B", &rec).emitting(json!("via B"))),
            node(RecordingNode::action("C", &rec).emitting(json!("via C"))),
            node(RecordingNode::action("D", &rec)),
        ],
        &[("A", "out", "B"), ("A", "out", "C"), ("B", "out", "D"), ("C", "out", "D")],
        GraphConfig::default(),
    );

    graph.start();
    graph.wait_idle().await;
    let mut payloads: Vec<_> = rec
        .executions()
        .into_iter()
        .filter(|e| e.node == "D")
        .map(|e| e.payload)
        .collect();
    payloads.sort_by_key(|p| p.to_string());
    assert_eq!(payloads, vec![json!("via B"), json!("via C")]);
}

/// **Scenario**: Payload is replaced when a node emits one and forwarded otherwise.
#[tokio::test]
async fn payload_is_replaced_or_forwarded() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec)),
            node(RecordingNode::action("B", &rec).emitting(json!({"hp": 3}))),
            node(RecordingNode::action("C", &rec)),
            node(RecordingNode::action("D", &rec)),
        ],
        &[("A", "out", "B"), ("B", "out", "C"), ("C", "out", "D")],
        GraphConfig::default(),
    );

    graph.start();
    graph.wait_idle().await;
    let runs = rec.executions();
    assert_eq!(runs[0].payload, Payload::Null);
    assert_eq!(runs[1].payload, Payload::Null);
    assert_eq!(runs[2].payload, json!({"hp": 3}));
    assert_eq!(runs[3].payload, json!({"hp": 3}));
}

/// **Scenario**: A self-loop stops at max_depth and reports the dropped continuation.
#[tokio::test]
async fn depth_guard_bounds_cycles() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[node(RecordingNode::trigger("loop", TriggerKind::Start, "", &rec))],
        &[("loop", "out", "loop")],
        GraphConfig {
            max_depth: Some(3),
            ..Default::default()
        },
    );
    let mut events = graph.subscribe();

    graph.start();
    graph.wait_idle().await;
    assert_eq!(rec.count("loop"), 4);

    let mut exceeded = None;
    while let Some(Ok(event)) = events.next().await {
        if let ExecutionEvent::DepthExceeded { node_id, depth } = event {
            exceeded = Some((node_id.to_string(), depth));
            break;
        }
    }
    assert_eq!(exceeded, Some(("loop".to_string(), 4)));
}

/// **Scenario**: A node dispatching an event into its own graph (re-entrant) runs the event chain too.
#[tokio::test]
async fn reentrant_event_dispatch() {
    let rec = Recorder::new();
    let start = node(RecordingNode::trigger("start", TriggerKind::Start, "", &rec));
    let on_open = node(RecordingNode::trigger("on_open", TriggerKind::Event, "open", &rec));
    let mut builder = GraphBuilder::new().with_config(GraphConfig {
        owner: Some(ObjectRef::new("door")),
        ..Default::default()
    });
    builder
        .add_node(start)
        .add_node(Arc::new(InvokeEventNode::new("fire", "open")))
        .add_node(on_open)
        .add_edge("start", "out", "fire", "in");
    let graph = builder.build().unwrap();

    graph.start();
    graph.wait_idle().await;
    let runs = rec.executions();
    assert_eq!(rec.order(), vec!["start", "on_open"]);
    assert_eq!(runs[1].tag, "open");
    assert_eq!(runs[1].invoker.as_deref(), Some("door"));
}

/// **Scenario**: Disabling does not cancel executions already in flight.
#[tokio::test]
async fn disable_does_not_cancel_in_flight() {
    let rec = Recorder::new();
    let start = node(RecordingNode::trigger("start", TriggerKind::Start, "", &rec));
    let tail = node(RecordingNode::action("tail", &rec));
    let mut builder = GraphBuilder::new();
    builder
        .add_node(start)
        .add_node(Arc::new(YieldNode::new("wait", 10)))
        .add_node(tail)
        .add_edge("start", "out", "wait", "in")
        .add_edge("wait", "out", "tail", "in");
    let graph = builder.build().unwrap();

    graph.start();
    tokio::task::yield_now().await;
    graph.on_disable();
    assert!(graph.in_flight() > 0);
    graph.wait_idle().await;
    assert_eq!(rec.order(), vec!["start", "tail"]);
    assert_eq!(graph.in_flight(), 0);
}

/// **Scenario**: NodeStarted/NodeCompleted events report depth and ports.
#[tokio::test]
async fn node_events_report_depth_and_ports() {
    let rec = Recorder::new();
    let graph = build_graph(
        &[
            node(RecordingNode::trigger("A", TriggerKind::Start, "", &rec).ports(&["done"])),
            node(RecordingNode::action("B", &rec).ports(&[])),
        ],
        &[("A", "done", "B")],
        GraphConfig::default(),
    );
    let mut events = graph.subscribe();

    graph.start();
    graph.wait_idle().await;

    let mut seen = Vec::new();
    while let Some(Ok(event)) = events.next().await {
        match event {
            ExecutionEvent::NodeStarted { node_id, depth } => {
                seen.push(format!("start {} {}", node_id, depth))
            }
            ExecutionEvent::NodeCompleted { node_id, ports } => {
                seen.push(format!("done {} {:?}", node_id, ports))
            }
            _ => {}
        }
        if seen.len() == 4 {
            break;
        }
    }
    assert_eq!(
        seen,
        vec![
            "start A 0".to_string(),
            "done A [\"done\"]".to_string(),
            "start B 1".to_string(),
            "done B []".to_string(),
        ]
    );
}
