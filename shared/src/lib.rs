pub mod config;
pub mod error;
pub mod model;
pub mod render;
pub mod state;
pub mod upload;

pub use config::ApiConfig;
pub use error::FetchError;
pub use model::{AnalysisResult, ClassLabel, Detection, ErrorBody, HealthStatus, ModelType, Outcome, PredictionResponse};
pub use state::{AppState, Completion, Generation, Phase, RequestTicket, ViewMode};
pub use upload::{Selection, Submission, UploadSelection};
