use iced::widget::{button, column, container, text, text_input};
use iced::Length::Fill;
use iced::{window, Element, Size, Task, Theme};
use tracing_subscriber::EnvFilter;

mod config;
mod error;
mod groq;
mod models;
mod normalize;
mod playlist;
mod prompt;
mod song;

use crate::config::Config;
use crate::groq::{generate_playlist, ChatClient};
use crate::playlist::Playlist;
use crate::prompt::PlaylistRequest;

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(model = %config.model, base_url = %config.base_url, "starting moodlist");

    iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .window(window::Settings {
            size: Size::new(640.0, 720.0),
            ..Default::default()
        })
        .run_with(move || App::new(config))
}

struct App {
    theme: String,
    artist: String,
    playlist: Playlist,
    /// Set while a generation request is in flight; blocks a second submit.
    loading: bool,
    client: ChatClient,
}

#[derive(Debug, Clone)]
enum Message {
    ThemeChanged(String),
    ArtistChanged(String),
    Submit,
    Generated(Result<Playlist, String>),
}

impl App {
    fn new(config: Config) -> (Self, Task<Message>) {
        (Self::with_client(ChatClient::new(config)), Task::none())
    }

    fn with_client(client: ChatClient) -> Self {
        App {
            theme: String::new(),
            artist: String::new(),
            playlist: Playlist::default(),
            loading: false,
            client,
        }
    }

    fn title(&self) -> String {
        "Moodlist".to_string()
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ThemeChanged(theme) => {
                self.theme = theme;
                Task::none()
            }
            Message::ArtistChanged(artist) => {
                self.artist = artist;
                Task::none()
            }
            Message::Submit => {
                if self.loading {
                    tracing::debug!("generation already in flight, ignoring submit");
                    return Task::none();
                }
                let Some(request) = PlaylistRequest::from_form(&self.theme, &self.artist) else {
                    return Task::none();
                };

                self.playlist = Playlist::default();
                self.loading = true;

                Task::perform(generate_playlist(self.client.clone(), request), |result| {
                    Message::Generated(result.map_err(|e| e.to_string()))
                })
            }
            Message::Generated(Ok(playlist)) => {
                self.playlist = playlist;
                self.loading = false;
                Task::none()
            }
            Message::Generated(Err(err)) => {
                tracing::error!(error = %err, "error fetching playlist");
                self.loading = false;
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<Message> {
        let heading = text("Generate Your AI Music Playlist").size(32).center().width(Fill);

        let theme_input = text_input("Enter your mood, genre, or theme...", &self.theme)
            .on_input(Message::ThemeChanged)
            .on_submit(Message::Submit)
            .padding(12);

        let artist_input = text_input("Optional: Enter a singer or band...", &self.artist)
            .on_input(Message::ArtistChanged)
            .padding(12);

        let label = if self.loading {
            "Generating..."
        } else {
            "Generate Playlist"
        };
        let generate = button(text(label).center().width(Fill))
            .on_press_maybe((!self.loading).then_some(Message::Submit))
            .padding(12)
            .width(Fill);

        let form = container(column![theme_input, artist_input, generate].spacing(16))
            .padding(24)
            .style(container::rounded_box);

        let results = column![text("Generated Playlist").size(24), self.playlist.view()].spacing(16);

        let content = column![heading, form, results].spacing(32).max_width(520);
        container(content).padding(20).center(Fill).into()
    }
}
