//! Per-query coordinator states.

use std::fmt;

/// One pass through the coordinator. Terminal states are `Responded` and `Errored`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineState {
    Received,
    Classified,
    SimpleFlow,
    ComplexFlow,
    Responded,
    Errored,
}

impl PipelineState {
    pub fn is_terminal(self) -> bool {
        matches!(self, PipelineState::Responded | PipelineState::Errored)
    }

    pub fn can_transition_to(self, next: PipelineState) -> bool {
        use PipelineState::*;
        matches!(
            (self, next),
            (Received, Classified)
                | (Classified, SimpleFlow)
                | (Classified, ComplexFlow)
                | (SimpleFlow, Responded)
                | (ComplexFlow, Responded)
                | (SimpleFlow, Errored)
                | (ComplexFlow, Errored)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PipelineState::Received => "RECEIVED",
            PipelineState::Classified => "CLASSIFIED",
            PipelineState::SimpleFlow => "SIMPLE_FLOW",
            PipelineState::ComplexFlow => "COMPLEX_FLOW",
            PipelineState::Responded => "RESPONDED",
            PipelineState::Errored => "ERRORED",
        }
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::PipelineState::*;

    #[test]
    fn happy_paths_are_legal() {
        assert!(Received.can_transition_to(Classified));
        assert!(Classified.can_transition_to(SimpleFlow));
        assert!(Classified.can_transition_to(ComplexFlow));
        assert!(SimpleFlow.can_transition_to(Responded));
        assert!(ComplexFlow.can_transition_to(Errored));
    }

    #[test]
    fn no_retries_after_terminal() {
        for next in [Received, Classified, SimpleFlow, ComplexFlow, Responded, Errored] {
            assert!(!Responded.can_transition_to(next));
            assert!(!Errored.can_transition_to(next));
        }
        assert!(Responded.is_terminal());
        assert!(!ComplexFlow.is_terminal());
    }

    #[test]
    fn errored_only_from_flow_states() {
        assert!(!Received.can_transition_to(Errored));
        assert!(!Classified.can_transition_to(Errored));
        assert!(!Classified.can_transition_to(Responded));
    }
}
