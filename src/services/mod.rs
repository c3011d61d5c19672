//! Clients for the four external model services.
//!
//! Each capability is a backend trait with one HTTP
//! implementation. All clients share the same failure contract
//! ([`ServiceError`]) and the same transport plumbing ([`ServiceEndpoint`]).
//! Retry policy belongs to the orchestrator; clients perform exactly one
//! attempt per invocation and hold no state beyond the connection pool.

pub mod client;
pub mod completion;
pub mod decode;
pub mod error;
pub mod pose;
pub mod transcription;
pub mod translation;

pub use client::ServiceEndpoint;
pub use completion::{AssessmentReply, CompletionBackend, HttpCompletionClient, SimplifyReply};
pub use decode::decode_lenient;
pub use error::ServiceError;
pub use pose::{HttpPoseClient, PoseBackend};
pub use transcription::{HttpTranscriptionClient, TranscriptionBackend};
pub use translation::{HttpTranslationClient, TranslationBackend, TranslationReply};
