//! Coordinator: one query in, one response out.
//!
//! RECEIVED → CLASSIFIED → SIMPLE_FLOW | COMPLEX_FLOW → RESPONDED,
//! with ERRORED reachable from either flow state.

use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use sage_core::config::PipelineConfig;
use sage_core::constants::{COORDINATOR_AGENT, ERROR_FALLBACK_ANSWER};
use sage_core::errors::{SageResult, StageError};
use sage_core::models::{
    AnalysisTrace, Complexity, FinalAnswer, Flow, KnowledgeId, KnowledgeRecord, NewKnowledge,
    PipelineResponse, ResearchTrace, Role, StageName, StageStep, TaskId, TraceEvent,
    TraceEventKind, TurnMetadata,
};
use sage_core::traits::{IAnalyzer, IKnowledgeStore, IResearcher, ITraceSink};
use sage_core::SageError;
use sage_observability::pipeline_span;
use sage_retrieval::tokenize::query_tokens;
use serde_json::{json, Value};
use tracing::{debug, error, info, warn};

use crate::answer;
use crate::classifier::ComplexityClassifier;
use crate::state::PipelineState;

/// Routes queries through the research and analysis stages.
pub struct Coordinator {
    store: Arc<dyn IKnowledgeStore>,
    researcher: Arc<dyn IResearcher>,
    analyzer: Arc<dyn IAnalyzer>,
    sink: Arc<dyn ITraceSink>,
    classifier: ComplexityClassifier,
    config: PipelineConfig,
}

/// Mutable state of one `handle` call.
struct Run {
    task_id: TaskId,
    state: PipelineState,
    steps: Vec<StageStep>,
}

impl Run {
    fn advance(&mut self, next: PipelineState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        debug!(from = %self.state, to = %next, "state transition");
        self.state = next;
    }
}

impl Coordinator {
    pub fn new(
        store: Arc<dyn IKnowledgeStore>,
        researcher: Arc<dyn IResearcher>,
        analyzer: Arc<dyn IAnalyzer>,
        sink: Arc<dyn ITraceSink>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            store,
            researcher,
            analyzer,
            sink,
            classifier: ComplexityClassifier::new(&config),
            config,
        }
    }

    pub fn classifier(&self) -> &ComplexityClassifier {
        &self.classifier
    }

    /// Run one query end to end. Never fails: stage errors and panics become
    /// an errored response with the fallback answer.
    pub fn handle(&self, query: &str) -> PipelineResponse {
        let mut run = Run {
            task_id: TaskId::generate(),
            state: PipelineState::Received,
            steps: Vec::new(),
        };
        let span = pipeline_span!(run.task_id, query);
        let _guard = span.enter();

        if let Err(e) =
            self.store
                .add_conversation_turn(Role::User, query, turn_metadata(&run.task_id, None))
        {
            warn!(error = %e, "failed to store user turn");
        }
        self.emit(
            TraceEventKind::QueryReceived,
            &run.task_id,
            json!({ "query": query }),
        );

        let complexity = self.classifier.classify(query);
        run.advance(PipelineState::Classified);
        let flow = complexity.flow();
        self.emit(
            TraceEventKind::QueryClassified,
            &run.task_id,
            json!({ "complexity": complexity.as_str(), "flow": flow.as_str() }),
        );

        let outcome = match flow {
            Flow::Simple => {
                run.advance(PipelineState::SimpleFlow);
                self.simple_flow(query, &mut run)
            }
            Flow::Complex => {
                run.advance(PipelineState::ComplexFlow);
                self.complex_flow(query, &mut run)
            }
        };

        let final_answer = match outcome {
            Ok(final_answer) => {
                run.advance(PipelineState::Responded);
                self.respond(&run, complexity, &final_answer);
                final_answer
            }
            Err(e) => {
                run.advance(PipelineState::Errored);
                self.fail(&run, e)
            }
        };

        PipelineResponse {
            task_id: run.task_id,
            query: query.to_string(),
            steps: run.steps,
            final_answer,
        }
    }

    fn simple_flow(&self, query: &str, run: &mut Run) -> SageResult<FinalAnswer> {
        let research = self.research(query, run, self.config.simple_top_n)?;

        let records = self.resolve(&research.saved)?;
        let final_answer = FinalAnswer::new(
            answer::simple(&records, self.config.excerpt_chars),
            research.confidence,
        );

        self.store.add_conversation_turn(
            Role::Assistant,
            &final_answer.answer,
            turn_metadata(&run.task_id, Some(final_answer.confidence)),
        )?;
        Ok(final_answer)
    }

    fn complex_flow(&self, query: &str, run: &mut Run) -> SageResult<FinalAnswer> {
        let research = self.research(query, run, self.config.complex_top_n)?;

        let mut candidates = self.resolve(&research.saved)?;
        let mut seen: HashSet<KnowledgeId> = research.saved.iter().copied().collect();
        for suggestion in &research.memory_suggestions {
            if seen.insert(suggestion.id) {
                if let Some(record) = self.store.get(suggestion.id)? {
                    candidates.push(record);
                }
            }
        }
        if candidates.is_empty() {
            candidates = self
                .store
                .keyword_search(&query_tokens(query), self.config.fallback_keyword_limit)?;
            debug!(fallback = candidates.len(), "no research candidates, used keyword fallback");
        }

        let analysis = self.analysis(&candidates, query, run)?;

        let summary = self.store.get(analysis.summary_id)?;
        let text = answer::synthesis(query, summary.as_ref().map(|r| r.text.as_str()));
        let confidence = research.confidence.min(analysis.confidence);

        self.store.add_conversation_turn(
            Role::Assistant,
            &text,
            turn_metadata(&run.task_id, Some(confidence)),
        )?;
        self.store.add_knowledge(
            NewKnowledge::new(format!("Synthesis:{}", run.task_id), text.as_str())
                .source(COORDINATOR_AGENT)
                .agent(COORDINATOR_AGENT)
                .confidence(confidence),
        )?;

        Ok(FinalAnswer::new(text, confidence))
    }

    fn research(&self, query: &str, run: &mut Run, top_n: usize) -> SageResult<ResearchTrace> {
        let trace = guarded(StageName::Research, || {
            self.researcher.research(query, &run.task_id, top_n)
        })?;
        info!(
            found = trace.found.len(),
            mem_hits = trace.memory_suggestions.len(),
            confidence = trace.confidence,
            "research done"
        );
        let payload = serde_json::to_value(&trace)?;
        self.emit(
            TraceEventKind::ResearchDone,
            &run.task_id,
            json!({ "research_trace": payload }),
        );
        run.steps.push(StageStep::research(trace.clone()));
        Ok(trace)
    }

    fn analysis(
        &self,
        candidates: &[KnowledgeRecord],
        directive: &str,
        run: &mut Run,
    ) -> SageResult<AnalysisTrace> {
        let trace = guarded(StageName::Analysis, || {
            self.analyzer.analyze(candidates, directive, &run.task_id)
        })?;
        info!(
            ranked = trace.ranked.len(),
            confidence = trace.confidence,
            "analysis done"
        );
        let payload = serde_json::to_value(&trace)?;
        self.emit(
            TraceEventKind::AnalysisDone,
            &run.task_id,
            json!({ "analysis_trace": payload }),
        );
        run.steps.push(StageStep::analysis(trace.clone()));
        Ok(trace)
    }

    /// Resolve ids to records in the given order, skipping misses.
    fn resolve(&self, ids: &[KnowledgeId]) -> SageResult<Vec<KnowledgeRecord>> {
        let mut records = Vec::with_capacity(ids.len());
        for &id in ids {
            match self.store.get(id)? {
                Some(record) => records.push(record),
                None => debug!(%id, "saved id did not resolve"),
            }
        }
        Ok(records)
    }

    fn respond(&self, run: &Run, complexity: Complexity, final_answer: &FinalAnswer) {
        info!(
            complexity = complexity.as_str(),
            steps = run.steps.len(),
            confidence = final_answer.confidence,
            "responded"
        );
        self.emit(
            TraceEventKind::Responded,
            &run.task_id,
            json!({
                "complexity": complexity.as_str(),
                "steps": run.steps.len(),
                "confidence": final_answer.confidence,
            }),
        );
    }

    fn fail(&self, run: &Run, cause: SageError) -> FinalAnswer {
        let description = cause.to_string();
        error!(error = %description, steps = run.steps.len(), "query failed");
        self.emit(
            TraceEventKind::Error,
            &run.task_id,
            json!({ "error": description }),
        );

        let confidence = self.config.error_confidence;
        let mut metadata = turn_metadata(&run.task_id, Some(confidence));
        metadata.insert("error".to_string(), Value::from(description.as_str()));
        if let Err(e) =
            self.store
                .add_conversation_turn(Role::Assistant, ERROR_FALLBACK_ANSWER, metadata)
        {
            error!(error = %e, "failed to store fallback turn");
        }

        FinalAnswer {
            answer: ERROR_FALLBACK_ANSWER.to_string(),
            confidence,
            error: Some(description),
        }
    }

    fn emit(&self, kind: TraceEventKind, task_id: &TaskId, payload: Value) {
        self.sink.emit(TraceEvent::new(kind, task_id, payload));
    }
}

/// Run a stage call, converting a panic into [`StageError::Panicked`].
fn guarded<T>(stage: StageName, f: impl FnOnce() -> SageResult<T>) -> SageResult<T> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(payload) => Err(StageError::Panicked {
            stage: stage.as_str().to_string(),
            message: panic_message(payload.as_ref()),
        }
        .into()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

fn turn_metadata(task_id: &TaskId, confidence: Option<f64>) -> TurnMetadata {
    let mut metadata = TurnMetadata::new();
    metadata.insert("task_id".to_string(), Value::from(task_id.as_str()));
    if let Some(confidence) = confidence {
        metadata.insert("confidence".to_string(), Value::from(confidence));
    }
    metadata
}
