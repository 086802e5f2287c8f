/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod analytics;
pub mod client;
pub mod courses;
pub mod error;
pub mod files;
pub mod quizzes;
pub mod request;
pub mod system;
pub mod users;
pub mod voice;
pub mod webhooks;

pub use error::{ApiError, Result};
pub use request::{ApiRequest, FileUpload, RequestBody};

pub use client::{ClientConfig, VoiceraClient};
