use iced::{
    font::Weight,
    widget::{container, row, text},
    Element, Font, Length,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongEntry {
    pub title: String,
    pub artist: String,
}

impl SongEntry {
    /// Builds an entry from whatever element the model put in its array.
    ///
    /// Shapes are not validated: a missing key, `null`, or a nested value shows up
    /// as an empty field, while numbers and booleans keep their JSON text.
    pub fn from_value(value: &Value) -> Self {
        Self {
            title: field_text(value.get("title")),
            artist: field_text(value.get("artist")),
        }
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        let bold = Font {
            weight: Weight::Bold,
            ..Font::DEFAULT
        };

        let content = row![
            text(&self.title).font(bold),
            text(format!(" - {}", self.artist)),
        ];

        container(content)
            .padding(12)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(container::rounded_box)
            .into()
    }
}

fn field_text(field: Option<&Value>) -> String {
    match field {
        Some(Value::String(s)) => s.clone(),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => v.to_string(),
        _ => String::new(),
    }
}
