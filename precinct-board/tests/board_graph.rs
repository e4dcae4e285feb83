//! Board graph integration tests

use precinct_board::style::node_badge;
use precinct_board::{
    BoardGraph, BoardIntent, GraphError, NodeData, NodeId, PersistedBoard, Position, Viewport,
};
use shared::{CaseRecord, CrimeSeverity, EvidenceRecord, EvidenceType, SuspectRecord, SuspectStatus};

fn cases() -> Vec<CaseRecord> {
    vec![CaseRecord {
        id: 11,
        title: "The Red-Headed League".into(),
        severity: CrimeSeverity::Level2,
        status: "Under Investigation".into(),
    }]
}

fn suspects() -> Vec<SuspectRecord> {
    vec![
        SuspectRecord {
            id: 1,
            name: "John Clay".into(),
            national_id: "1111111111".into(),
            status: SuspectStatus::UnderSevereSurveillance,
            days_under_investigation: Some(12),
        },
        SuspectRecord {
            id: 2,
            name: "Archie".into(),
            national_id: "2222222222".into(),
            // status the client does not know yet
            status: SuspectStatus::from("Wanted"),
            days_under_investigation: None,
        },
    ]
}

fn evidence() -> Vec<EvidenceRecord> {
    vec![EvidenceRecord {
        id: 5,
        title: "Worn trouser knees".into(),
        evidence_type: EvidenceType::WitnessStatement,
        description: "Observed by Holmes".into(),
        recorded_by: "holmes".into(),
        created_date: "1890-10-09".into(),
    }]
}

fn board() -> BoardGraph {
    BoardGraph::from_records(
        &cases(),
        &suspects(),
        &evidence(),
        &[
            (NodeId::case(11), NodeId::suspect(1)),
            (NodeId::case(11), NodeId::suspect(2)),
            (NodeId::evidence(5), NodeId::suspect(1)),
        ],
    )
    .unwrap()
}

#[test]
fn test_edge_between_existing_nodes_is_retrievable() {
    let mut graph = board();
    let id = graph
        .add_edge(NodeId::suspect(1), NodeId::suspect(2))
        .unwrap();
    let edge = graph.edge(&id).unwrap();
    assert_eq!(edge.source, NodeId::suspect(1));
    assert_eq!(edge.target, NodeId::suspect(2));
    assert_eq!(graph.edge_count(), 4);
}

#[test]
fn test_edge_to_missing_node_is_rejected_without_change() {
    let mut graph = board();
    let (nodes, edges) = (graph.node_count(), graph.edge_count());

    let result = graph.apply(BoardIntent::Connect {
        source: NodeId::new("suspect-404"),
        target: NodeId::case(11),
    });

    assert!(matches!(result, Err(GraphError::MissingEndpoint(_))));
    assert_eq!(graph.node_count(), nodes);
    assert_eq!(graph.edge_count(), edges);
}

#[test]
fn test_removing_node_removes_exactly_its_edges() {
    let mut graph = board();
    let untouched: Vec<_> = graph
        .edges()
        .iter()
        .filter(|e| !e.touches(&NodeId::suspect(2)))
        .cloned()
        .collect();
    assert_eq!(graph.edges_of(&NodeId::suspect(2)).count(), 1);

    graph.apply(BoardIntent::Remove(NodeId::suspect(2))).unwrap();

    assert!(!graph.contains_node(&NodeId::suspect(2)));
    assert_eq!(graph.edges(), untouched.as_slice());
}

#[test]
fn test_disconnect_and_missing_edge() {
    let mut graph = board();
    graph
        .apply(BoardIntent::Disconnect("e-case-11-suspect-1".into()))
        .unwrap();
    assert_eq!(graph.edge_count(), 2);
    assert!(matches!(
        graph.remove_edge("e-case-11-suspect-1"),
        Err(GraphError::EdgeNotFound(_))
    ));
}

#[test]
fn test_unknown_status_is_rendered_not_rejected() {
    let graph = board();
    let node = graph.node(&NodeId::suspect(2)).unwrap();
    assert!(matches!(node.data, NodeData::Suspect(_)));
    let badge = node_badge(&node.data);
    assert_eq!(badge.label, "Wanted");
    assert_eq!(badge.color, precinct_board::style::NEUTRAL_COLOR);
}

#[test]
fn test_dirty_tracking_through_save_cycle() {
    let mut graph = board();
    assert!(!graph.is_dirty());

    graph
        .apply(BoardIntent::Move {
            id: NodeId::evidence(5),
            position: Position::new(400.0, 90.0),
        })
        .unwrap();
    assert!(graph.is_dirty());

    let json = graph
        .to_persisted(Some(Viewport::default()))
        .to_json()
        .unwrap();
    graph.mark_clean();

    let restored = BoardGraph::from_persisted(PersistedBoard::from_json(&json).unwrap()).unwrap();
    assert_eq!(restored.nodes(), graph.nodes());
    assert_eq!(restored.edges(), graph.edges());
    assert_eq!(
        restored.node(&NodeId::evidence(5)).map(|n| n.position),
        Some(Position::new(400.0, 90.0))
    );
}
