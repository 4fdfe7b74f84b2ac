//! Turns a trip request into a model prompt, optionally enriched with local
//! guide snippets, and returns the model's itinerary.

use std::sync::Arc;

use serde_json::json;
use tracing::{Instrument, debug, info, info_span};
use trip_model::{Llm, LlmRequest, Message};
use trip_rag::{GuideRetriever, RetrievalConfig, compact, guide_context_lines};

use crate::error::ApiError;
use crate::protocol::{ToolCall, TripRequest, TripResponse};

const FIELD_LIMIT: usize = 120;
const NOTES_LIMIT: usize = 500;

const SYSTEM_PROMPT: &str = "You are an expert travel planner. Write a practical day-by-day \
itinerary that fits the traveler's duration, timing, budget and interests. Prefer facts from \
the local guide notes when they are provided and keep recommendations concrete.";

pub struct TripPlanner {
    llm: Arc<dyn Llm>,
    retriever: Option<Arc<dyn GuideRetriever>>,
    retrieval: RetrievalConfig,
}

impl TripPlanner {
    pub fn new(llm: Arc<dyn Llm>) -> Self {
        Self { llm, retriever: None, retrieval: RetrievalConfig::default() }
    }

    pub fn with_retriever(mut self, retriever: Arc<dyn GuideRetriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    pub fn with_retrieval_config(mut self, retrieval: RetrievalConfig) -> Self {
        self.retrieval = retrieval;
        self
    }

    pub fn model_name(&self) -> &str {
        self.llm.name()
    }

    pub async fn plan(&self, request: &TripRequest) -> Result<TripResponse, ApiError> {
        request.validate()?;

        let span = info_span!(
            "plan_trip",
            destination = %request.destination,
            session_id = request.session_id.as_deref(),
            user_id = request.user_id.as_deref(),
            turn_index = request.turn_index,
        );

        self.generate(request).instrument(span).await
    }

    async fn generate(&self, request: &TripRequest) -> Result<TripResponse, ApiError> {
        let mut tool_calls = Vec::new();
        let guide_lines = self.local_guides(request, &mut tool_calls);

        let llm_request = LlmRequest::new(build_messages(request, &guide_lines));
        let response = self.llm.generate(llm_request).await?;

        info!(
            model = %response.model,
            guides = guide_lines.len(),
            chars = response.content.len(),
            "itinerary generated"
        );
        Ok(TripResponse { result: response.content, tool_calls })
    }

    fn local_guides(&self, request: &TripRequest, tool_calls: &mut Vec<ToolCall>) -> Vec<String> {
        let Some(retriever) = self.retriever.as_ref().filter(|r| !r.is_empty()) else {
            return Vec::new();
        };

        let interests = request.interests.as_deref().unwrap_or_default();
        let results = retriever.retrieve(&request.destination, interests, self.retrieval.top_k);
        debug!(retriever = retriever.name(), matches = results.len(), "local guides retrieved");

        tool_calls.push(ToolCall {
            agent: "local".to_string(),
            tool: "local_guides".to_string(),
            args: json!({
                "destination": request.destination,
                "interests": interests,
                "matches": results.len(),
            }),
        });

        guide_context_lines(&results, self.retrieval.context_limit)
    }
}

/// Build the system and user messages for a request.
pub fn build_messages(request: &TripRequest, guide_lines: &[String]) -> Vec<Message> {
    let mut lines = vec![
        format!("Destination: {}", compact(&request.destination, FIELD_LIMIT)),
        format!("Duration: {}", compact(&request.duration, FIELD_LIMIT)),
    ];

    let optional = [
        ("Travel dates", &request.when),
        ("Budget", &request.budget),
        ("Interests", &request.interests),
    ];
    for (label, value) in optional {
        if let Some(value) = value.as_deref().map(|v| compact(v, FIELD_LIMIT)) {
            if !value.is_empty() {
                lines.push(format!("{label}: {value}"));
            }
        }
    }

    if let Some(notes) = request.user_input.as_deref().map(|v| compact(v, NOTES_LIMIT)) {
        if !notes.is_empty() {
            lines.push(format!("Traveler notes: {notes}"));
        }
    }

    if !guide_lines.is_empty() {
        lines.push("Local guide notes:".to_string());
        lines.extend(guide_lines.iter().map(|line| format!("- {line}")));
    }

    lines.push("Plan the trip.".to_string());

    vec![Message::system(SYSTEM_PROMPT), Message::user(lines.join("\n"))]
}

#[cfg(test)]
mod tests {
    use trip_model::{MockLlm, Role};
    use trip_rag::{Document, DocumentMetadata, LocalGuideRetriever};

    use super::*;

    fn prague_retriever() -> Arc<dyn GuideRetriever> {
        Arc::new(LocalGuideRetriever::new(vec![
            Document {
                content: "Prague: Beer and food tour.".into(),
                metadata: DocumentMetadata {
                    city: "Prague".into(),
                    interests: vec!["food".into(), "beer".into()],
                },
            },
            Document {
                content: "Berlin: Museums.".into(),
                metadata: DocumentMetadata {
                    city: "Berlin".into(),
                    interests: vec!["history".into()],
                },
            },
        ]))
    }

    #[tokio::test]
    async fn plans_without_retriever() {
        let llm = Arc::new(MockLlm::default());
        let planner = TripPlanner::new(llm.clone());

        let response = planner.plan(&TripRequest::new("Kyoto", "3 days")).await.unwrap();
        assert_eq!(response.result, "Test itinerary");
        assert!(response.tool_calls.is_empty());

        let sent = llm.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].messages[0].role, Role::System);
        assert!(sent[0].messages[1].content.contains("Destination: Kyoto"));
        assert!(!sent[0].messages[1].content.contains("Local guide notes"));
    }

    #[tokio::test]
    async fn adds_local_guides_and_records_tool_call() {
        let llm = Arc::new(MockLlm::default());
        let planner = TripPlanner::new(llm.clone()).with_retriever(prague_retriever());

        let mut request = TripRequest::new("Prague", "2 days");
        request.interests = Some("food".into());
        let response = planner.plan(&request).await.unwrap();

        assert_eq!(response.tool_calls.len(), 1);
        assert_eq!(response.tool_calls[0].tool, "local_guides");
        assert_eq!(response.tool_calls[0].args["matches"], 1);

        let prompt = &llm.requests()[0].messages[1].content;
        assert!(prompt.contains("- Guide [food, beer]: Prague: Beer and food tour."));
        assert!(!prompt.contains("Berlin"));
    }

    #[tokio::test]
    async fn empty_retriever_is_skipped() {
        let llm = Arc::new(MockLlm::default());
        let planner =
            TripPlanner::new(llm).with_retriever(Arc::new(LocalGuideRetriever::default()));
        let response = planner.plan(&TripRequest::new("Prague", "2 days")).await.unwrap();
        assert!(response.tool_calls.is_empty());
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_model() {
        let llm = Arc::new(MockLlm::default());
        let planner = TripPlanner::new(llm.clone());
        let err = planner.plan(&TripRequest::new("", "2 days")).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(llm.requests().is_empty());
    }

    #[tokio::test]
    async fn model_failure_is_reported() {
        let planner = TripPlanner::new(Arc::new(MockLlm::default().failing()));
        let err = planner.plan(&TripRequest::new("Oslo", "1 day")).await.unwrap_err();
        assert!(matches!(err, ApiError::Model(_)));
    }

    #[test]
    fn prompt_fields_are_single_line_and_bounded() {
        let mut request = TripRequest::new("Tokyo\n\nJapan", "5 days");
        request.when = Some("March 2025".into());
        request.budget = Some("   ".into());
        request.user_input = Some(format!("I love\tramen {}", "very ".repeat(200)));

        let messages = build_messages(&request, &[]);
        let prompt = &messages[1].content;
        assert!(prompt.contains("Destination: Tokyo Japan"));
        assert!(prompt.contains("Travel dates: March 2025"));
        assert!(!prompt.contains("Budget:"));

        let notes = prompt.lines().find(|l| l.starts_with("Traveler notes: ")).unwrap();
        assert!(notes.chars().count() <= "Traveler notes: ".len() + NOTES_LIMIT);
    }
}
