//! Conversation controller.
//!
//! A [`ConsultationSession`] owns the ordered message list of one chat. Each
//! non-blank `send` appends the user message at once and queues a turn on a
//! spawned task. Turns of one session run strictly one after another.
//!
//! Closing or dropping the session cancels queued and in-flight turns. A
//! cancelled turn never touches the message list or emits events.

use super::classifier::QueryClassifier;
use super::greeting::{GENERIC_GREETING, personalized_greeting};
use super::prompt::{build_prompt, catalog_text, profile_text, system_prompt};
use coiffe_core::catalog::CatalogRepository;
use coiffe_core::chat::ChatMessage;
use coiffe_core::config::DEFAULT_RESPONSE_LANGUAGE;
use coiffe_core::generation::TextGenerator;
use coiffe_core::user::ProfileRepository;
use coiffe_core::validation::is_blank_message;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::{Mutex as TurnQueue, mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Something the display surface should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEvent {
    MessageAppended(ChatMessage),
    /// Transient notice, e.g. a failed generation.
    Notification(String),
}

/// Progress of the turn currently being processed.
///
/// Sends queued behind a running turn leave its state alone. When a turn
/// ends with more queued, the state is `UserMessageAppended` rather than `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    Idle,
    UserMessageAppended,
    Classifying,
    PromptBuilt,
    Generating,
    AssistantMessageAppended,
    Failed,
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    Answered,
    /// The notification text shown to the user.
    Failed(String),
    Cancelled,
}

/// Starts consultation sessions over the shared collaborators.
#[derive(Clone)]
pub struct ConsultationService {
    profiles: Arc<dyn ProfileRepository>,
    catalog: Arc<dyn CatalogRepository>,
    generator: Arc<dyn TextGenerator>,
    system_prompt: String,
}

impl ConsultationService {
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        catalog: Arc<dyn CatalogRepository>,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            profiles,
            catalog,
            generator,
            system_prompt: system_prompt(DEFAULT_RESPONSE_LANGUAGE),
        }
    }

    /// Instructs the assistant to answer in `language`.
    pub fn with_response_language(mut self, language: &str) -> Self {
        self.system_prompt = system_prompt(language);
        self
    }

    /// Opens a session for `user_id`.
    ///
    /// Reads the profile and the catalog concurrently, caches their text
    /// projections and appends the greeting. Never fails: a missing or
    /// unreadable profile yields the generic greeting, an unreadable catalog
    /// yields empty catalog text and a notification.
    pub async fn start(
        &self,
        user_id: &str,
    ) -> (ConsultationSession, mpsc::UnboundedReceiver<ConversationEvent>) {
        let (profile, products) =
            tokio::join!(self.profiles.get(user_id), self.catalog.list_all());

        let profile = match profile {
            Ok(Some(record)) => Some(record.hair_profile()),
            Ok(None) => {
                info!(user_id, "No profile record, using generic greeting");
                None
            }
            Err(err) => {
                warn!(user_id, error = %err, "Failed to load profile");
                None
            }
        };

        let (catalog, notice) = match products {
            Ok(products) => {
                debug!(count = products.len(), "Loaded catalog for consultation");
                (catalog_text(&products), None)
            }
            Err(err) => {
                warn!(error = %err, "Failed to load catalog");
                (
                    String::new(),
                    Some(format!("Could not load products: {}", err.user_message())),
                )
            }
        };

        let greeting = match &profile {
            Some(profile) => personalized_greeting(profile),
            None => GENERIC_GREETING.to_string(),
        };

        let (events, receiver) = mpsc::unbounded_channel();
        let (state, _) = watch::channel(TurnState::Idle);
        let inner = Arc::new(SessionInner {
            classifier: QueryClassifier::new(self.generator.clone()),
            generator: self.generator.clone(),
            system_prompt: self.system_prompt.clone(),
            profile_text: profile.as_ref().map(profile_text).unwrap_or_default(),
            catalog_text: catalog,
            messages: Mutex::new(Vec::new()),
            events,
            state,
            turn_queue: TurnQueue::new(()),
            pending_turns: Mutex::new(0),
            cancel: CancellationToken::new(),
        });

        inner.append(ChatMessage::assistant(greeting));
        if let Some(notice) = notice {
            inner.notify(notice);
        }
        info!(user_id, "Consultation session started");

        (ConsultationSession { inner }, receiver)
    }
}

struct SessionInner {
    classifier: QueryClassifier,
    generator: Arc<dyn TextGenerator>,
    system_prompt: String,
    profile_text: String,
    catalog_text: String,
    messages: Mutex<Vec<ChatMessage>>,
    events: mpsc::UnboundedSender<ConversationEvent>,
    state: watch::Sender<TurnState>,
    turn_queue: TurnQueue<()>,
    /// Sent but unfinished turns. Held while the state changes hands between turns.
    pending_turns: Mutex<usize>,
    cancel: CancellationToken,
}

impl SessionInner {
    fn is_live(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    fn messages(&self) -> MutexGuard<'_, Vec<ChatMessage>> {
        // The list is only ever pushed to, so a poisoned guard is still consistent.
        self.messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn append(&self, message: ChatMessage) {
        if !self.is_live() {
            return;
        }
        self.messages().push(message.clone());
        let _ = self.events.send(ConversationEvent::MessageAppended(message));
    }

    fn notify(&self, text: String) {
        if self.is_live() {
            let _ = self.events.send(ConversationEvent::Notification(text));
        }
    }

    fn set_state(&self, state: TurnState) {
        if self.is_live() {
            self.state.send_replace(state);
        }
    }

    fn pending_turns(&self) -> MutexGuard<'_, usize> {
        self.pending_turns
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Registers a new turn. The state only moves to `UserMessageAppended`
    /// when no earlier turn is still being processed.
    fn enqueue_turn(&self) {
        let mut pending = self.pending_turns();
        *pending += 1;
        if *pending == 1 {
            self.set_state(TurnState::UserMessageAppended);
        }
    }

    async fn run_turn(self: Arc<Self>, user_text: String) -> TurnOutcome {
        let outcome = self.process_turn(&user_text).await;

        let mut pending = self.pending_turns();
        *pending = pending.saturating_sub(1);
        if outcome != TurnOutcome::Cancelled {
            // A queued turn already has its user message on screen.
            self.set_state(if *pending == 0 {
                TurnState::Idle
            } else {
                TurnState::UserMessageAppended
            });
        }
        outcome
    }

    async fn process_turn(&self, user_text: &str) -> TurnOutcome {
        let _turn = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return TurnOutcome::Cancelled,
            guard = self.turn_queue.lock() => guard,
        };

        self.set_state(TurnState::Classifying);
        let include_catalog = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return TurnOutcome::Cancelled,
            verdict = self.classifier.classify(user_text) => verdict,
        };

        let prompt = build_prompt(
            &self.system_prompt,
            &self.profile_text,
            include_catalog.then_some(self.catalog_text.as_str()),
            user_text,
        );
        self.set_state(TurnState::PromptBuilt);
        debug!(include_catalog, prompt_len = prompt.len(), "Built consultation prompt");

        self.set_state(TurnState::Generating);
        let reply = tokio::select! {
            biased;
            _ = self.cancel.cancelled() => return TurnOutcome::Cancelled,
            reply = self.generator.generate(&prompt) => reply,
        };

        if !self.is_live() {
            return TurnOutcome::Cancelled;
        }

        match reply {
            Ok(text) => {
                self.append(ChatMessage::assistant(text));
                self.set_state(TurnState::AssistantMessageAppended);
                TurnOutcome::Answered
            }
            Err(err) => {
                warn!(error = %err, "Consultation turn failed");
                let notice = format!("Error: {}", err.user_message());
                self.notify(notice.clone());
                self.set_state(TurnState::Failed);
                TurnOutcome::Failed(notice)
            }
        }
    }
}

/// One open consultation.
///
/// Must be used from within a Tokio runtime; `send` spawns the turn task.
pub struct ConsultationSession {
    inner: Arc<SessionInner>,
}

impl ConsultationSession {
    /// Sends a user message.
    ///
    /// Blank input is ignored and returns `None`. Otherwise the trimmed text
    /// is appended before this returns and the handle of the queued turn is
    /// returned. Also `None` once the session is closed.
    pub fn send(&self, user_text: &str) -> Option<JoinHandle<TurnOutcome>> {
        if is_blank_message(user_text) || !self.inner.is_live() {
            return None;
        }

        let text = user_text.trim().to_string();
        self.inner.append(ChatMessage::user(text.clone()));
        self.inner.enqueue_turn();

        Some(tokio::spawn(self.inner.clone().run_turn(text)))
    }

    /// Snapshot of the conversation in display order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.inner.messages().clone()
    }

    pub fn turn_state(&self) -> TurnState {
        *self.inner.state.borrow()
    }

    /// Watches turn state changes.
    pub fn subscribe_state(&self) -> watch::Receiver<TurnState> {
        self.inner.state.subscribe()
    }

    pub fn profile_text(&self) -> &str {
        &self.inner.profile_text
    }

    pub fn catalog_text(&self) -> &str {
        &self.inner.catalog_text
    }

    pub fn is_closed(&self) -> bool {
        !self.inner.is_live()
    }

    /// Cancels queued and in-flight turns. Further sends are ignored.
    pub fn close(&self) {
        if self.inner.is_live() {
            self.inner.state.send_replace(TurnState::Idle);
            self.inner.cancel.cancel();
            debug!("Consultation session closed");
        }
    }
}

impl Drop for ConsultationSession {
    fn drop(&mut self) {
        self.inner.cancel.cancel();
    }
}
