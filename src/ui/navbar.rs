/// Top navigation bar
///
/// Inline links on wide windows; a menu toggle with a drop-down list below
/// `COMPACT_WIDTH`. The bar turns solid once the page is scrolled.

use iced::widget::{button, column, container, horizontal_space, responsive, row, text, Row};
use iced::{Alignment, Element, Length};

use crate::config::Brand;
use crate::content;
use crate::state::nav::{NavShell, Section};
use crate::state::session::Event;
use crate::theme::{self, Scheme};
use crate::Message;

const COMPACT_WIDTH: f32 = 768.0;

pub fn view<'a>(nav: NavShell, brand: &'a Brand, scheme: Scheme) -> Element<'a, Message> {
    responsive(move |size| {
        let compact = size.width < COMPACT_WIDTH;

        let trailing: Element<'a, Message> = if compact {
            button(text(if nav.menu_open { "✕" } else { "☰" }).size(24))
                .style(theme::link_button(scheme))
                .on_press(Message::Session(Event::ToggleMenu))
                .into()
        } else {
            Row::with_children(Section::ALL.iter().map(|section| link(*section, scheme)))
                .spacing(24)
                .into()
        };

        let bar = row![wordmark(brand, scheme, 26), horizontal_space(), trailing]
            .align_y(Alignment::Center)
            .padding(if nav.scrolled { [16, 24] } else { [24, 24] });

        let mut layout = column![container(bar)
            .width(Length::Fill)
            .style(theme::navbar(scheme, nav.scrolled))];

        if compact && nav.menu_open {
            let menu = column(Section::ALL.iter().map(|section| link(*section, scheme)))
                .spacing(8)
                .padding(24)
                .width(Length::Fill)
                .align_x(Alignment::Center);
            layout = layout.push(container(menu).style(theme::bordered_panel(scheme)));
        }

        layout.into()
    })
    .into()
}

/// Two-tone brand wordmark
pub fn wordmark<'a>(brand: &'a Brand, scheme: Scheme, size: u16) -> Element<'a, Message> {
    row![
        text(brand.0.as_str()).size(size).color(scheme.accent),
        text(brand.1.as_str()).size(size),
    ]
    .spacing(6)
    .into()
}

fn link<'a>(section: Section, scheme: Scheme) -> Element<'a, Message> {
    button(text(content::section_label(section).to_uppercase()).size(14))
        .style(theme::link_button(scheme))
        .on_press(Message::NavigateTo(section))
        .into()
}
