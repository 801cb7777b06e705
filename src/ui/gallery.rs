/// Portfolio section: category chips and the photo grid
use iced::widget::{button, column, container, text, Column};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::content;
use crate::state::catalog::Catalog;
use crate::state::data::{CategoryFilter, Photo};
use crate::state::session::{Event, Session};
use crate::theme::{self, Scheme};
use crate::ui::photo;
use crate::Message;

const TILE_WIDTH: f32 = 280.0;
const TILE_IMAGE_HEIGHT: f32 = 340.0;
/// Tiles crop to fill their fixed box
pub(crate) const TILE_FIT: ContentFit = ContentFit::Cover;

pub fn view<'a>(catalog: &'a Catalog, session: &Session, scheme: Scheme) -> Element<'a, Message> {
    let header = column![
        text(content::PORTFOLIO_TITLE).size(48),
        container(text(""))
            .width(80)
            .height(4)
            .style(theme::panel(scheme.accent)),
        text(content::PORTFOLIO_BLURB).color(scheme.muted),
    ]
    .spacing(12);

    let mut chips = vec![filter_chip(
        content::ALL_LABEL,
        CategoryFilter::All,
        &session.filter,
        scheme,
    )];
    for category in catalog.categories() {
        chips.push(filter_chip(
            category.label(),
            CategoryFilter::Only(category.clone()),
            &session.filter,
            scheme,
        ));
    }

    let tiles: Vec<Element<'a, Message>> = session
        .visible(catalog)
        .into_iter()
        .map(|photo| tile(photo, scheme))
        .collect();

    let grid: Element<'a, Message> = if tiles.is_empty() {
        text("Nenhuma foto nesta categoria.").color(scheme.muted).into()
    } else {
        Wrap::with_elements(tiles)
            .spacing(16.0)
            .line_spacing(16.0)
            .into()
    };

    let section: Column<'a, Message> = column![
        header,
        Wrap::with_elements(chips).spacing(8.0).line_spacing(8.0),
        grid,
    ]
    .spacing(40)
    .padding([96, 48]);

    container(section)
        .width(Length::Fill)
        .style(theme::panel(scheme.background))
        .into()
}

fn filter_chip<'a>(
    label: &'a str,
    filter: CategoryFilter,
    current: &CategoryFilter,
    scheme: Scheme,
) -> Element<'a, Message> {
    let active = *current == filter;

    button(text(label.to_uppercase()).size(14))
        .padding([8, 20])
        .style(theme::chip(scheme, active))
        .on_press(Message::Session(Event::SelectCategory(filter)))
        .into()
}

fn tile<'a>(photo: &'a Photo, scheme: Scheme) -> Element<'a, Message> {
    let caption = column![
        text(photo.category.label().to_uppercase())
            .size(12)
            .color(scheme.accent),
        text(photo.title.as_str()).size(20),
        text(content::TILE_HINT).size(13).color(scheme.muted),
    ]
    .spacing(4)
    .padding(16);

    let image = photo::view(photo, scheme, Length::Fixed(TILE_IMAGE_HEIGHT), TILE_FIT);
    button(column![image, caption])
        .width(TILE_WIDTH)
        .padding(0)
        .style(theme::tile_button(scheme))
        .on_press(Message::Session(Event::SelectPhoto(photo.id)))
        .into()
}
