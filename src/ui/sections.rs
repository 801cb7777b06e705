/// Static page blocks: about, services and footer
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

use crate::config::Brand;
use crate::content;
use crate::state::nav::Section;
use crate::theme::{self, Scheme};
use crate::ui::navbar;
use crate::Message;

pub fn about<'a>(scheme: Scheme) -> Element<'a, Message> {
    let (lead, highlight) = content::ABOUT_TITLE;

    let stats = row(content::STATS.iter().map(|stat| -> Element<'a, Message> {
        column![
            text(stat.value).size(36).color(scheme.accent),
            text(stat.label.to_uppercase()).size(13).color(scheme.muted),
        ]
        .spacing(4)
        .into()
    }))
    .spacing(48);

    let mut body = Column::new()
        .push(text(lead).size(48))
        .push(text(highlight).size(48).color(scheme.accent))
        .spacing(24);
    for paragraph in content::ABOUT_PARAGRAPHS {
        body = body.push(text(paragraph).size(18).color(scheme.muted));
    }
    body = body.push(stats);

    container(body)
        .padding([96, 48])
        .width(Length::Fill)
        .style(theme::panel(scheme.surface))
        .into()
}

pub fn services<'a>(scheme: Scheme) -> Element<'a, Message> {
    let cards = row(content::SERVICES.iter().map(|service| -> Element<'a, Message> {
        let card = column![
            text(service.title.to_uppercase()).size(22),
            text(service.description).color(scheme.muted),
            button(text(content::SERVICE_LINK.to_uppercase()).size(12))
                .padding(0)
                .style(theme::link_button(scheme))
                .on_press(Message::NavigateTo(Section::Contact)),
        ]
        .spacing(16);

        container(card)
            .padding(40)
            .width(Length::FillPortion(1))
            .style(theme::bordered_panel(scheme))
            .into()
    }))
    .spacing(32);

    let section = column![
        text(content::SERVICES_TITLE).size(48),
        container(text(""))
            .width(80)
            .height(4)
            .style(theme::panel(scheme.accent)),
        cards,
    ]
    .spacing(24)
    .align_x(Alignment::Center);

    container(section)
        .padding([96, 48])
        .width(Length::Fill)
        .style(theme::panel(scheme.background))
        .into()
}

/// Footer with the wordmark, copyright line and an optional status line
pub fn footer<'a>(
    brand: &'a Brand,
    copyright: &'a str,
    status: Option<&'a str>,
    scheme: Scheme,
) -> Element<'a, Message> {
    let mut body = column![
        navbar::wordmark(brand, scheme, 20),
        text(copyright).size(14).color(scheme.muted),
        text(content::FOOTER_TAGLINE.to_uppercase())
            .size(10)
            .color(scheme.border),
    ]
    .spacing(12)
    .align_x(Alignment::Center);

    if let Some(status) = status {
        body = body.push(text(status).size(12).color(scheme.accent));
    }

    container(body)
        .center_x(Length::Fill)
        .padding(48)
        .style(theme::panel(iced::Color::BLACK))
        .into()
}
