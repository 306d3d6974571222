//! Loading persisted graphs from disk and running them.

use std::io::Write;
use std::time::Duration;

use tokio::time::timeout;
use tokio_stream::StreamExt;
use triggergraph::{ExecutionEvent, GraphConfig, GraphDocument, GraphError, NodeId};

const DOOR: &str = r#"{
    "nodes": [
        { "type": "trigger", "id": "Start1", "kind": "start" },
        { "type": "log", "id": "Log1", "message": "door ready" },
        { "type": "trigger", "id": "OnOpen", "kind": "event", "tag": "open" },
        { "type": "yield", "id": "Frames", "steps": 2 },
        { "type": "log", "id": "Opened", "message": "door opened" }
    ],
    "edges": [
        { "output_id": "Start1", "output_port": "out", "input_id": "Log1", "input_port": "in" },
        { "output_id": "OnOpen", "output_port": "out", "input_id": "Frames", "input_port": "in" },
        { "output_id": "Frames", "output_port": "out", "input_id": "Opened", "input_port": "in" },
        { "output_id": "Opened", "output_port": "out", "input_id": "Missing", "input_port": "in" }
    ]
}"#;

fn completed(events: &[ExecutionEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            ExecutionEvent::NodeCompleted { node_id, .. } => Some(node_id.to_string()),
            _ => None,
        })
        .collect()
}

/// **Scenario**: A document read from a file builds and runs start and event chains.
#[tokio::test]
async fn document_from_file_runs() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(DOOR.as_bytes()).unwrap();

    let graph = GraphDocument::from_path(file.path())
        .unwrap()
        .build(GraphConfig::default())
        .unwrap();
    let mut stream = graph.subscribe();

    assert_eq!(graph.start(), 1);
    graph.wait_idle().await;
    assert_eq!(graph.invoke_event("open"), 1);
    graph.wait_idle().await;

    let mut events = Vec::new();
    while let Ok(Some(Ok(event))) = timeout(Duration::from_millis(50), stream.next()).await {
        events.push(event);
    }
    assert_eq!(
        completed(&events),
        vec!["Start1", "Log1", "OnOpen", "Frames", "Opened"]
    );
}

/// **Scenario**: A missing file is a Load error naming the path.
#[test]
fn document_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");
    match GraphDocument::from_path(&path) {
        Err(GraphError::Load(msg)) => assert!(msg.contains("nope.json"), "{}", msg),
        other => panic!("expected Load error, got {:?}", other.map(|d| d.nodes.len())),
    }
}

/// **Scenario**: Custom nodes can be added to a document's builder before building.
#[test]
fn document_builder_accepts_extra_nodes() {
    use std::sync::Arc;
    use triggergraph::LogNode;

    let mut builder = GraphDocument::from_json(DOOR).unwrap().into_builder();
    builder.add_node(Arc::new(LogNode::new("Missing", "now resolved")));
    let graph = builder.build().unwrap();
    assert_eq!(graph.store().dangling_edges().count(), 0);
    assert_eq!(
        graph.store().prev_nodes(&NodeId::new("Missing"), "in").len(),
        1
    );
}
