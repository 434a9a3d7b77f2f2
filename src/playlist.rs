use iced::{
    widget::{center, keyed_column, text},
    Element, Length,
};
use serde::{Deserialize, Serialize};

use crate::song::SongEntry;

pub const MAX_SONGS: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    songs: Vec<SongEntry>,
}

impl Playlist {
    /// Keeps at most the first [`MAX_SONGS`] entries, in order.
    pub fn new(songs: impl IntoIterator<Item = SongEntry>) -> Self {
        Self {
            songs: songs.into_iter().take(MAX_SONGS).collect(),
        }
    }

    pub fn songs(&self) -> &[SongEntry] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn view<'a, M: 'a>(&'a self) -> Element<'a, M> {
        if self.is_empty() {
            return center(
                text("No songs generated yet.")
                    .width(Length::Fill)
                    .center()
                    .color([0.6, 0.6, 0.6]),
            )
            .height(80)
            .into();
        }

        keyed_column(
            self.songs()
                .iter()
                .enumerate()
                .map(|(i, song)| (i, song.view())),
        )
        .spacing(12)
        .into()
    }
}
