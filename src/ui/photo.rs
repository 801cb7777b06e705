/// Rendering of a single photo
///
/// Local files go through iced's image widget. Remote URIs are not fetched;
/// they render as a titled placeholder of the same size.

use iced::widget::{column, container, image, text};
use iced::{Alignment, ContentFit, Element, Length};

use crate::state::data::Photo;
use crate::theme::{self, Scheme};
use crate::Message;

/// `fit` decides how a local image fills its box: tiles crop with `Cover`,
/// the lightbox shows the whole frame with `Contain`.
pub fn view<'a>(
    photo: &'a Photo,
    scheme: Scheme,
    height: Length,
    fit: ContentFit,
) -> Element<'a, Message> {
    if let Some(path) = photo.local_path() {
        return image(image::Handle::from_path(path))
            .content_fit(fit)
            .width(Length::Fill)
            .height(height)
            .into();
    }

    let placeholder = column![
        text("◉").size(40).color(scheme.border),
        text(photo.title.as_str()).size(14).color(scheme.muted),
    ]
    .spacing(8)
    .align_x(Alignment::Center);

    container(placeholder)
        .center_x(Length::Fill)
        .center_y(height)
        .style(theme::panel(scheme.background))
        .into()
}
