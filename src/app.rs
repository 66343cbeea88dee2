// SPDX-License-Identifier: MIT

use iced::{Element, Task, Theme};

use crate::config::Config;
use crate::detail::{self, BookDetail, MountId};
use crate::home::{self, Home};

/// The application model: the active screen plus what every screen needs.
pub struct App {
    config: Config,
    client: reqwest::Client,
    screen: Screen,
    /// Counts mounts of the detail screen; gives each one its `MountId`.
    mounts: u64,
}

enum Screen {
    Home(Home),
    Detail(BookDetail),
}

#[derive(Debug, Clone)]
pub enum Message {
    Home(home::Message),
    Detail(detail::Message),
}

impl App {
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let app = App {
            config,
            client: reqwest::Client::new(),
            screen: Screen::Home(Home::default()),
            mounts: 0,
        };
        (app, Task::none())
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => {
                let Screen::Home(home) = &mut self.screen else {
                    return Task::none();
                };
                match home.update(message) {
                    Some(home::Action::OpenBook(id)) => self.open_detail(id),
                    None => Task::none(),
                }
            }

            Message::Detail(message) => {
                let Screen::Detail(detail) = &mut self.screen else {
                    // The detail screen is gone; a late fetch result lands
                    // here and is dropped rather than applied.
                    return Task::none();
                };
                match detail.update(message) {
                    detail::Action::None => Task::none(),
                    detail::Action::Run(task) => task.map(Message::Detail),
                    detail::Action::GoBack => {
                        self.screen = Screen::Home(Home::default());
                        Task::none()
                    }
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match &self.screen {
            Screen::Home(home) => home.view().map(Message::Home),
            Screen::Detail(detail) => detail.view().map(Message::Detail),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::Light
    }

    fn open_detail(&mut self, id: String) -> Task<Message> {
        let mount = MountId(self.mounts);
        self.mounts += 1;

        tracing::info!(id = %id, "opening book detail");
        let (detail, task) = BookDetail::new(id, mount, &self.config, self.client.clone());
        self.screen = Screen::Detail(detail);
        task.map(Message::Detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::Book;

    fn app() -> App {
        App::new(Config::default()).0
    }

    fn open_book(app: &mut App, id: &str) {
        let _ = app.update(Message::Home(home::Message::IdChanged(id.into())));
        let _ = app.update(Message::Home(home::Message::OpenPressed));
    }

    fn dune() -> Book {
        Book {
            title: Some("Dune".into()),
            work: None,
            edition: None,
            year: Some("1965".into()),
            publisher: None,
            isbn: None,
            material: None,
            language: None,
            subjects: None,
            primary_author: Some("Herbert".into()),
            authors: None,
            cover_url: None,
        }
    }

    #[test]
    fn opening_a_book_mounts_the_detail_screen() {
        let mut app = app();
        open_book(&mut app, "42");
        assert!(matches!(app.screen, Screen::Detail(_)));
    }

    #[test]
    fn back_returns_to_home() {
        let mut app = app();
        open_book(&mut app, "42");
        let _ = app.update(Message::Detail(detail::Message::BackPressed));
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[test]
    fn fetch_result_after_unmount_is_dropped() {
        let mut app = app();
        open_book(&mut app, "42");
        let _ = app.update(Message::Detail(detail::Message::BackPressed));

        // The fetch from mount 0 completes only now. Nothing to apply it to.
        let _ = app.update(Message::Detail(detail::Message::Fetched(
            MountId(0),
            Some(dune()),
        )));
        assert!(matches!(app.screen, Screen::Home(_)));
    }

    #[test]
    fn fetch_result_from_an_earlier_mount_does_not_leak_into_a_remount() {
        let mut app = app();
        open_book(&mut app, "42");
        let _ = app.update(Message::Detail(detail::Message::BackPressed));
        open_book(&mut app, "42");

        // Mount 0's late result must not populate mount 1's screen.
        let _ = app.update(Message::Detail(detail::Message::Fetched(
            MountId(0),
            Some(dune()),
        )));
        match &app.screen {
            Screen::Detail(detail) => assert!(!detail.has_record()),
            Screen::Home(_) => panic!("detail screen should still be mounted"),
        }

        // The live mount's own result still applies normally.
        let _ = app.update(Message::Detail(detail::Message::Fetched(
            MountId(1),
            Some(dune()),
        )));
        match &app.screen {
            Screen::Detail(detail) => assert!(detail.has_record()),
            Screen::Home(_) => panic!("detail screen should still be mounted"),
        }
    }

    #[test]
    fn detail_messages_on_home_are_ignored() {
        let mut app = app();
        let _ = app.update(Message::Detail(detail::Message::StarPressed(3)));
        assert!(matches!(app.screen, Screen::Home(_)));
    }
}
