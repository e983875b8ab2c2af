// Models module - data structures for API communication
pub mod gemini;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use gemini::{GenerateContentRequest, GenerateContentResponse, GenerationConfig};
pub use requests::ChatRequest;
pub use responses::{ChatResponse, Choice, ResponseMessage, Usage};
