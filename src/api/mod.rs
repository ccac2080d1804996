pub mod client;
pub mod models;
pub mod response;
pub mod streaming;

pub use client::{Backend, GeminiClient};
pub use models::{ChatConfig, Content, GenerateResponse, InlineData, Part};
pub use response::{chunk_text, collect_parts, fold_parts, FoldedReply};
pub use streaming::process_sse_stream;
