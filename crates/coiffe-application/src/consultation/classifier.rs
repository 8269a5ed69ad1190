//! Product-intent classification.

use coiffe_core::generation::TextGenerator;
use std::sync::Arc;
use tracing::{debug, warn};

const CLASSIFICATION_INSTRUCTION: &str = "Answer only YES or NO. Is the following customer \
message asking about hair care products or services, such as product recommendations, \
availability or prices?\n\nMessage: ";

/// Decides with one model round-trip whether a message needs the catalog.
#[derive(Clone)]
pub struct QueryClassifier {
    generator: Arc<dyn TextGenerator>,
}

impl QueryClassifier {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// `true` only for a reply of exactly `YES` (trimmed, any case).
    ///
    /// Any other reply, and any failure, counts as NO. There is no retry.
    pub async fn classify(&self, user_text: &str) -> bool {
        match self.generator.generate(&classification_prompt(user_text)).await {
            Ok(reply) => {
                let verdict = is_affirmative(&reply);
                debug!(verdict, "Classified message");
                verdict
            }
            Err(err) => {
                warn!(error = %err, "Classification failed, continuing without catalog");
                false
            }
        }
    }
}

pub fn classification_prompt(user_text: &str) -> String {
    format!("{CLASSIFICATION_INSTRUCTION}{user_text}")
}

pub fn is_affirmative(reply: &str) -> bool {
    reply.trim().eq_ignore_ascii_case("YES")
}
