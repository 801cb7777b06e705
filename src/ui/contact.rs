/// Contact section
///
/// The form keeps whatever the visitor types for the session, but there is
/// nowhere to send it: the submit button is permanently disabled.

use iced::widget::{button, column, container, row, text, text_input};
use iced::{Element, Length};

use crate::content;
use crate::theme::{self, Scheme};
use crate::Message;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// What has been typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }
}

pub fn view<'a>(draft: &'a ContactDraft, scheme: Scheme) -> Element<'a, Message> {
    let (lead, highlight) = content::CONTACT_TITLE;

    let socials = row(content::SOCIALS.iter().map(|name| -> Element<'a, Message> {
        container(text(*name).size(13))
            .padding([12, 16])
            .style(theme::panel(scheme.border))
            .into()
    }))
    .spacing(12);

    let pitch = column![
        text(lead).size(48),
        text(highlight).size(48).color(scheme.accent),
        text(content::CONTACT_BLURB).size(18).color(scheme.muted),
        column![
            text(content::CONTACT_EMAIL_LABEL.to_uppercase())
                .size(12)
                .color(scheme.muted),
            text(content::CONTACT_EMAIL).size(18),
        ]
        .spacing(4),
        socials,
    ]
    .spacing(20)
    .width(Length::FillPortion(1));

    let form = column![
        row![
            input(content::FORM_NAME, &draft.name, Field::Name, scheme),
            input(content::FORM_EMAIL, &draft.email, Field::Email, scheme),
        ]
        .spacing(24),
        input(content::FORM_MESSAGE, &draft.message, Field::Message, scheme),
        button(text(content::FORM_SUBMIT.to_uppercase()).size(16))
            .width(Length::Fill)
            .padding(20)
            .style(theme::accent_button(scheme)),
    ]
    .spacing(24);

    let form = container(form)
        .padding(40)
        .width(Length::FillPortion(1))
        .style(theme::bordered_panel(scheme));

    container(row![pitch, form].spacing(64))
        .padding([96, 48])
        .width(Length::Fill)
        .style(theme::panel(scheme.surface))
        .into()
}

fn input<'a>(
    (label, placeholder): (&'a str, &'a str),
    value: &'a str,
    field: Field,
    scheme: Scheme,
) -> Element<'a, Message> {
    column![
        text(label.to_uppercase()).size(12).color(scheme.muted),
        text_input(placeholder, value)
            .padding(16)
            .on_input(move |value| Message::ContactEdited(field, value)),
    ]
    .spacing(8)
    .width(Length::Fill)
    .into()
}
