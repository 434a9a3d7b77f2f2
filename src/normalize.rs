use serde_json::Value;

use crate::{error::PlaylistError, playlist::Playlist, song::SongEntry};

const FENCE: &str = "```";

pub fn normalize(raw: &str) -> Result<Playlist, PlaylistError> {
    let cleaned = strip_fences(raw);

    let value = match serde_json::from_str::<Value>(&cleaned) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!(error = %e, "direct parse failed, salvaging bracketed JSON");
            salvage(&cleaned)?
        }
    };

    into_playlist(value)
}

fn strip_fences(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;

    while let Some(pos) = rest.find(FENCE) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos + FENCE.len()..];
        if let Some(after_tag) = rest.strip_prefix("json") {
            rest = after_tag.strip_prefix('\n').unwrap_or(after_tag);
        }
    }
    out.push_str(rest);

    out.trim().to_string()
}

fn salvage(text: &str) -> Result<Value, PlaylistError> {
    let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) else {
        return Err(PlaylistError::MalformedResponse);
    };
    if end < start {
        return Err(PlaylistError::MalformedResponse);
    }

    serde_json::from_str(&text[start..=end]).map_err(|_| PlaylistError::MalformedResponse)
}

fn into_playlist(value: Value) -> Result<Playlist, PlaylistError> {
    let kind = match &value {
        Value::Array(items) => return Ok(Playlist::new(items.iter().map(SongEntry::from_value))),
        Value::Object(_) => "an object",
        Value::String(_) => "a string",
        Value::Number(_) => "a number",
        Value::Bool(_) => "a boolean",
        Value::Null => "null",
    };

    Err(PlaylistError::NotAnArray { kind })
}
