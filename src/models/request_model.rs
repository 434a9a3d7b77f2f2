use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f64,
    pub max_completion_tokens: u32,
    pub top_p: f64,
    pub stop: Option<Vec<String>>,
    pub stream: bool,
}
