//! HTTP API exposing the pipeline to the demo frontend:
//! - POST /transcribe - Transcribe an uploaded audio file
//! - POST /simplify_text - Simplify spoken-language text
//! - POST /translate_signs - Translate text into a gesture sequence
//! - POST /generate_pose - Render binary pose data for sign text
//! - POST /pipeline/run - Run the full pipeline on text input
//! - GET /health - Health check

mod handlers;
mod routes;
mod state;

pub use routes::create_router;
pub use state::AppState;
