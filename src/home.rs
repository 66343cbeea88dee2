use iced::widget::{button, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

/// Minimal entry screen: supplies the book id and mounts the detail screen.
#[derive(Default)]
pub struct Home {
    id_input: String,
}

#[derive(Debug, Clone)]
pub enum Message {
    IdChanged(String),
    OpenPressed,
}

pub enum Action {
    OpenBook(String),
}

impl Home {
    pub fn update(&mut self, message: Message) -> Option<Action> {
        match message {
            Message::IdChanged(value) => {
                self.id_input = value;
                None
            }
            Message::OpenPressed => {
                let id = self.id_input.trim();
                if id.is_empty() {
                    return None;
                }
                Some(Action::OpenBook(id.to_string()))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let input = text_input("número do livro", &self.id_input)
            .on_input(Message::IdChanged)
            .on_submit(Message::OpenPressed)
            .padding(10)
            .width(220);

        let open = button(text("Abrir")).on_press(Message::OpenPressed);

        container(
            column![
                text("Biblioteca").size(28),
                row![input, open].spacing(8).align_y(Alignment::Center),
            ]
            .spacing(16)
            .align_x(Alignment::Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }
}
