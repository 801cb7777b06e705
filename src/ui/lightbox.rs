/// Full-screen overlay for the selected photo
///
/// Dismissed by the close button or by a press on the backdrop. Presses on
/// the photo and its caption are captured by the content region and never
/// reach the backdrop.

use iced::alignment::Horizontal;
use iced::mouse::Interaction;
use iced::widget::{button, column, container, mouse_area, stack, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::Photo;
use crate::state::session::Event;
use crate::theme::{self, Scheme};
use crate::ui::photo;
use crate::Message;

const MAX_CONTENT_WIDTH: f32 = 1100.0;
const BACKDROP_PADDING: u16 = 48;
/// The enlarged photo is never cropped
pub(crate) const IMAGE_FIT: ContentFit = ContentFit::Contain;

pub fn view<'a>(photo: &'a Photo, scheme: Scheme) -> Element<'a, Message> {
    let content = column![
        photo::view(photo, scheme, Length::Fill, IMAGE_FIT),
        text(photo.title.as_str()).size(22),
        text(photo.category.label().to_uppercase())
            .size(14)
            .color(scheme.accent),
    ]
    .spacing(16)
    .max_width(MAX_CONTENT_WIDTH)
    .align_x(Alignment::Center);

    let content = mouse_area(content).on_press(Message::Noop);

    let backdrop = mouse_area(
        container(content)
            .center(Length::Fill)
            .padding(BACKDROP_PADDING)
            .style(theme::backdrop()),
    )
    .on_press(Message::Session(Event::Dismiss))
    .interaction(Interaction::Pointer);

    let close = container(
        button(text("✕").size(36))
            .style(theme::link_button(scheme))
            .on_press(Message::Session(Event::Dismiss)),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right)
    .padding(24);

    stack![backdrop, close].into()
}
