#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    /// Neither the direct parse nor the bracket salvage produced JSON.
    #[error("Invalid JSON format received from AI")]
    MalformedResponse,

    #[error("expected a JSON array of songs, got {kind}")]
    NotAnArray { kind: &'static str },

    #[error("chat completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("provider returned {status}: {message}")]
    Provider { status: u16, message: String },

    #[error("failed to decode chat completion: {0}")]
    Decode(#[from] serde_json::Error),
}
