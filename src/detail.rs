use iced::widget::{
    button, column, container, horizontal_space, image, row, scrollable, text, Space,
};
use iced::{Alignment, ContentFit, Element, Length, Task};

use crate::api;
use crate::book::{display_or_dash, Book, Field, Variant};
use crate::config::Config;
use crate::icons;

/// Identity of one mount of the detail screen. Fetch results carry the id of
/// the mount that issued them, so a result that outlives its screen (or a
/// remount of it) is discarded instead of applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MountId(pub u64);

/// The book detail screen. One fetch on mount; favorite and rating are
/// transient view state that dies with the instance.
pub struct BookDetail {
    mount: MountId,
    variant: Variant,
    client: reqwest::Client,
    book: Option<Book>,
    cover: Option<image::Handle>,
    favorite: bool,
    rating: u8,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the record fetch. `None` means the fetch failed; the error
    /// was already logged where it happened and the screen stays empty.
    Fetched(MountId, Option<Book>),
    CoverLoaded(MountId, Option<Vec<u8>>),
    StarPressed(u8),
    FavoriteToggled,
    BackPressed,
}

/// What the parent should do after an update.
pub enum Action {
    None,
    Run(Task<Message>),
    GoBack,
}

impl BookDetail {
    pub fn new(
        id: String,
        mount: MountId,
        config: &Config,
        client: reqwest::Client,
    ) -> (Self, Task<Message>) {
        let url = api::book_url(config, &id);
        let image_base_url = config.image_base_url.clone();
        let fetch_client = client.clone();

        let task = Task::perform(
            async move {
                match api::fetch_book(&fetch_client, &url, &image_base_url).await {
                    Ok(book) => Some(book),
                    Err(err) => {
                        tracing::error!(error = %err, url = %url, "failed to fetch book");
                        None
                    }
                }
            },
            move |book| Message::Fetched(mount, book),
        );

        let screen = BookDetail {
            mount,
            variant: config.variant,
            client,
            book: None,
            cover: None,
            favorite: false,
            rating: 0,
        };

        (screen, task)
    }

    pub fn update(&mut self, message: Message) -> Action {
        match message {
            Message::Fetched(mount, book) => {
                if mount != self.mount {
                    // Result of a fetch issued by an earlier mount.
                    return Action::None;
                }
                let Some(book) = book else {
                    return Action::None;
                };

                let cover_url = book.cover_url.clone();
                self.book = Some(book);

                let Some(url) = cover_url else {
                    return Action::None;
                };
                let client = self.client.clone();
                let mount = self.mount;
                Action::Run(Task::perform(
                    async move { api::fetch_cover(&client, &url).await },
                    move |bytes| Message::CoverLoaded(mount, bytes),
                ))
            }

            Message::CoverLoaded(mount, bytes) => {
                if mount == self.mount {
                    self.cover = bytes.map(image::Handle::from_bytes);
                }
                Action::None
            }

            Message::StarPressed(star) => {
                self.rating = star;
                Action::None
            }

            Message::FavoriteToggled => {
                self.favorite = !self.favorite;
                Action::None
            }

            Message::BackPressed => Action::GoBack,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let Some(book) = &self.book else {
            // Fetch still pending, or it failed. Either way: blank screen.
            return Space::new(Length::Fill, Length::Fill).into();
        };

        let material = text(display_or_dash(book.material.as_deref())).size(12);
        let header = row![material, horizontal_space(), self.star_row()]
            .align_y(Alignment::Center);

        let cover: Element<'_, Message> = match &self.cover {
            Some(handle) => image(handle.clone())
                .width(240)
                .height(200)
                .content_fit(ContentFit::Contain)
                .into(),
            None => Space::new(240.0, 200.0).into(),
        };

        let heart = button(if self.favorite {
            icons::heart_active()
        } else {
            icons::heart()
        })
        .style(button::text)
        .padding(2)
        .on_press(Message::FavoriteToggled);

        let title = row![
            text(self.variant.compose_title(book)).size(22),
            horizontal_space(),
            heart,
        ]
        .align_y(Alignment::Center);

        let fields = column(
            self.variant
                .fields()
                .iter()
                .map(|field| field_row(*field, book)),
        )
        .spacing(5);

        let card = container(
            column![
                header,
                container(cover).center_x(Length::Fill),
                title,
                fields,
            ]
            .spacing(10),
        )
        .padding(20)
        .width(Length::Fill);

        let back = button(text("Voltar")).on_press(Message::BackPressed);

        scrollable(
            column![card, back]
                .spacing(16)
                .padding(20)
                .align_x(Alignment::Center)
                .width(Length::Fill),
        )
        .into()
    }

    #[cfg(test)]
    pub(crate) fn has_record(&self) -> bool {
        self.book.is_some()
    }

    fn star_row(&self) -> Element<'_, Message> {
        row((1..=5u8).map(|star| {
            let icon = if self.rating >= star {
                icons::star_filled()
            } else {
                icons::star_outline()
            };
            button(icon)
                .style(button::text)
                .padding(2)
                .on_press(Message::StarPressed(star))
                .into()
        }))
        .spacing(2)
        .into()
    }
}

fn field_row(field: Field, book: &Book) -> Element<'_, Message> {
    row![
        text(format!("{}: ", field.label())).size(17),
        text(display_or_dash(book.field(field))).size(16),
    ]
    .into()
}
