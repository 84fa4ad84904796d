//! Recommendation request orchestration.
//!
//! SYSTEM CONTEXT
//! ==============
//! `submit_query` is the only path from typed text to the recommendation
//! service. It enforces the dispatch preconditions itself rather than relying
//! on the send button being disabled, so programmatic callers get the same
//! at-most-one-in-flight guarantee as the UI.

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;

use leptos::logging::{log, warn};

use crate::config::RECOMMEND_TOP_K;
use crate::net::api::{ApiError, RecommendationService};
use crate::state::conversation::{ConversationHandle, Rejection};

/// What happened to one submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    /// Nothing was dispatched and the state is unchanged.
    Ignored(Rejection),
    /// The service answered; the reply carries this many products.
    Answered { products: usize },
    /// The request failed; the reply is the fixed apology.
    Failed(ApiError),
    /// The conversation state was disposed before the reply could be recorded.
    Abandoned,
}

/// Run one user submission through the conversation and the service.
///
/// On acceptance the user turn is appended, `clear_input` runs, and exactly
/// one request with `top_k = RECOMMEND_TOP_K` is issued. Whatever the
/// outcome, exactly one bot turn is appended and `pending` is cleared. Failures
/// are never retried.
pub async fn submit_query<H, S>(conversation: &H, service: &S, raw: &str, clear_input: impl FnOnce()) -> Submission
where
    H: ConversationHandle,
    S: RecommendationService,
{
    let accepted = match conversation.mutate(|state| state.begin_request(raw)) {
        Some(Ok(accepted)) => accepted,
        Some(Err(rejection)) => return Submission::Ignored(rejection),
        None => return Submission::Abandoned,
    };
    clear_input();

    let outcome = service.recommend(&accepted.query, RECOMMEND_TOP_K).await;
    let failure = match &outcome {
        Ok(products) => {
            log!("recommend: {} products for {:?}", products.len(), accepted.query);
            None
        }
        Err(e) => {
            warn!("recommend failed for {:?}: {e}", accepted.query);
            Some(e.clone())
        }
    };

    match conversation.mutate(|state| state.complete_request(&accepted, outcome)) {
        Some(count) => match failure {
            Some(e) => Submission::Failed(e),
            None => Submission::Answered { products: count },
        },
        None => {
            warn!("recommend reply for {:?} dropped: conversation disposed", accepted.query);
            Submission::Abandoned
        }
    }
}
