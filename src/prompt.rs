pub const SYSTEM_PROMPT: &str = "You are an AI that generates music playlists based on user input. \
Format the output as a JSON array of objects with 'title' and 'artist' keys. \
Limit the playlist to 5 songs.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub theme: String,
    pub artist: String,
}

impl PlaylistRequest {
    /// Returns `None` when the theme is blank, in which case nothing should be sent.
    pub fn from_form(theme: &str, artist: &str) -> Option<Self> {
        if theme.trim().is_empty() {
            return None;
        }

        Some(Self {
            theme: theme.to_string(),
            artist: artist.to_string(),
        })
    }

    pub fn user_message(&self) -> String {
        let mut message = format!("Generate a music playlist based on: {}", self.theme);
        if !self.artist.is_empty() {
            message.push_str(&format!(", featuring songs by {}", self.artist));
        }

        message
    }
}
