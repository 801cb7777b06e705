use iced::widget::{button, column, container, row, text};
use iced::{Alignment, Element, Length};

use crate::content;
use crate::state::nav::Section;
use crate::theme::{self, Scheme};
use crate::Message;

const HERO_HEIGHT: f32 = 720.0;

pub fn view<'a>(scheme: Scheme) -> Element<'a, Message> {
    let (lead, highlight) = content::HERO_TITLE;

    let title = row![
        text(lead).size(72),
        text(highlight).size(72).color(scheme.accent),
    ];

    let actions = row![
        button(text(content::HERO_PRIMARY_CTA.to_uppercase()).size(16))
            .padding([16, 40])
            .style(theme::accent_button(scheme))
            .on_press(Message::NavigateTo(Section::Portfolio)),
        button(text(content::HERO_SECONDARY_CTA.to_uppercase()).size(16))
            .padding([16, 40])
            .style(theme::link_button(scheme))
            .on_press(Message::NavigateTo(Section::Contact)),
    ]
    .spacing(16);

    let body = column![
        title,
        text(content::HERO_TAGLINE)
            .size(22)
            .color(scheme.muted)
            .width(Length::Fixed(680.0)),
        actions,
    ]
    .spacing(32)
    .align_x(Alignment::Center);

    container(body)
        .center_x(Length::Fill)
        .center_y(Length::Fixed(HERO_HEIGHT))
        .padding(24)
        .style(theme::panel(scheme.background))
        .into()
}
