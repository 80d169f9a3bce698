use chrono::Utc;
use sage_core::models::*;

fn research_trace() -> ResearchTrace {
    ResearchTrace {
        task_id: TaskId::from("task_1"),
        agent: "ResearchStage".into(),
        query: "scalable training".into(),
        found: vec![FoundEntry {
            title: "Scalable Training".into(),
            source: "mock_kb".into(),
        }],
        memory_suggestions: vec![],
        saved: vec![KnowledgeId::new(1)],
        start: Utc::now(),
        end: Utc::now(),
        confidence: 0.9,
    }
}

fn analysis_trace() -> AnalysisTrace {
    AnalysisTrace {
        task_id: TaskId::from("task_1"),
        agent: "AnalysisStage".into(),
        directive: "compare".into(),
        ranked: vec![RankedItem {
            id: KnowledgeId::new(1),
            title: "Scalable Training".into(),
            score: 2,
            length: 5,
            source: "mock_kb".into(),
        }],
        summary_id: KnowledgeId::new(2),
        start: Utc::now(),
        end: Utc::now(),
        confidence: 0.85,
    }
}

#[test]
fn knowledge_id_displays_with_prefix_and_serializes_bare() {
    let id = KnowledgeId::new(7);
    assert_eq!(id.to_string(), "kb_7");
    assert_eq!(serde_json::to_string(&id).unwrap(), "7");
}

#[test]
fn generated_task_ids_are_unique() {
    let a = TaskId::generate();
    let b = TaskId::generate();
    assert_ne!(a, b);
    assert!(a.as_str().starts_with("task_"));
}

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
    assert_eq!(
        serde_json::to_string(&Role::Assistant).unwrap(),
        "\"assistant\""
    );
}

#[test]
fn note_status_roundtrips_as_plain_string() {
    assert_eq!(serde_json::to_string(&NoteStatus::Done).unwrap(), "\"done\"");
    let other: NoteStatus = serde_json::from_str("\"pending\"").unwrap();
    assert_eq!(other, NoteStatus::Other("pending".into()));
    let done: NoteStatus = serde_json::from_str("\"done\"").unwrap();
    assert_eq!(done, NoteStatus::Done);
}

#[test]
fn corpus_entry_source_defaults_to_mock_kb() {
    let entry: CorpusEntry =
        serde_json::from_str(r#"{"title": "T", "text": "body"}"#).unwrap();
    assert_eq!(entry.source, "mock_kb");
    assert_eq!(entry.searchable_text(), "T body");
}

#[test]
fn only_simple_complexity_routes_to_simple_flow() {
    assert_eq!(Complexity::Simple.flow(), Flow::Simple);
    assert_eq!(Complexity::Moderate.flow(), Flow::Complex);
    assert_eq!(Complexity::Complex.flow(), Flow::Complex);
}

#[test]
fn new_knowledge_builder_sets_fields() {
    let draft = NewKnowledge::new("T", "body")
        .source("mock_kb")
        .agent("ResearchStage")
        .confidence(0.9);
    assert_eq!(draft.source, "mock_kb");
    assert_eq!(draft.agent, "ResearchStage");
    assert_eq!(draft.confidence, 0.9);
}

#[test]
fn response_serializes_final_key_and_stage_tags() {
    let response = PipelineResponse {
        task_id: TaskId::from("task_1"),
        query: "compare".into(),
        steps: vec![
            StageStep::research(research_trace()),
            StageStep::analysis(analysis_trace()),
        ],
        final_answer: FinalAnswer::new("answer", 0.85),
    };
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["task_id"], "task_1");
    assert_eq!(json["final"]["confidence"], 0.85);
    assert!(json["final"].get("error").is_none());
    assert_eq!(json["steps"][0]["stage"], "research");
    assert_eq!(json["steps"][1]["stage"], "analysis");
    assert_eq!(json["steps"][1]["trace"]["summary_id"], 2);
}

#[test]
fn untagged_stage_trace_deserializes_to_right_variant() {
    let steps = vec![
        StageStep::research(research_trace()),
        StageStep::analysis(analysis_trace()),
    ];
    let json = serde_json::to_string(&steps).unwrap();
    let back: Vec<StageStep> = serde_json::from_str(&json).unwrap();

    assert!(matches!(back[0].trace, StageTrace::Research(_)));
    assert!(matches!(back[1].trace, StageTrace::Analysis(_)));
    assert_eq!(back[1].trace.agent(), "AnalysisStage");
    assert_eq!(back[0].trace.confidence(), 0.9);
}

#[test]
fn trace_event_kind_serializes_snake_case() {
    let event = TraceEvent::new(
        TraceEventKind::QueryClassified,
        &TaskId::from("task_1"),
        serde_json::json!({"complexity": "simple"}),
    );
    let json = serde_json::to_value(&event).unwrap();
    assert_eq!(json["event"], "query_classified");
    assert_eq!(json["payload"]["complexity"], "simple");
    assert!(json["timestamp"].is_string());
}
