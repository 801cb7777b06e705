use iced::mouse::Interaction;
use iced::widget::{column, container, mouse_area, text};
use iced::{Alignment, Element, Length};

use crate::config::Brand;
use crate::content;
use crate::state::session::Event;
use crate::theme::{self, Scheme};
use crate::ui::navbar;
use crate::Message;

/// Opaque loading screen shown until the splash timer fires
///
/// A press anywhere skips it.
pub fn view<'a>(brand: &'a Brand, scheme: Scheme) -> Element<'a, Message> {
    let body = column![
        navbar::wordmark(brand, scheme, 40),
        text(format!("{}…", content::SPLASH_TEXT))
            .size(14)
            .color(scheme.muted),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    mouse_area(
        container(body)
            .center(Length::Fill)
            .style(theme::panel(scheme.background)),
    )
    .on_press(Message::Session(Event::SplashFinished))
    .interaction(Interaction::Pointer)
    .into()
}
