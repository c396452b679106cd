// Models module - conversation types and provider wire formats
pub mod types;
pub mod requests;
pub mod responses;


// Re-export commonly used types
pub use types::{
    Role, Message, SessionKey, DisplayTurn, DisplayTranscript,
    AI_SPEAKER, DEFAULT_CONVERSATION_ID, DEFAULT_SYSTEM_PROMPT,
};
pub use requests::{
    GenerateContentRequest, Content, Part, GenerationConfig,
    ChatRequest, WireMessage,
};
pub use responses::{
    GenerateContentResponse, Candidate, UsageMetadata, ApiErrorBody, ApiErrorDetail,
    ChatResponse, Choice, Usage,
};
