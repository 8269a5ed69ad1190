//! Application layer for Coiffe.
//!
//! Use cases coordinating the domain traits: signing in, editing the hair
//! profile, managing the catalog and running a consultation.

pub mod auth_session;
pub mod catalog_service;
pub mod consultation;
pub mod hair_profile_service;

pub use auth_session::AuthSession;
pub use catalog_service::CatalogService;
pub use consultation::{
    ConsultationService, ConsultationSession, ConversationEvent, TurnOutcome, TurnState,
};
pub use hair_profile_service::HairProfileService;
