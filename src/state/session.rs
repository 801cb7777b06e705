/// Root UI state
///
/// `Session` owns the current filter, the lightbox selection, the navigation
/// flags and the splash state. It is a plain value: every change goes through
/// `reduce`, which consumes the old state and returns the new one.

use super::catalog::Catalog;
use super::data::{CategoryFilter, Photo, PhotoId};
use super::filter;
use super::lightbox::Lightbox;
use super::nav::NavShell;
use super::splash::Splash;

/// A user interaction (or timer callback) that changes the session
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    SelectCategory(CategoryFilter),
    SelectPhoto(PhotoId),
    Dismiss,
    Scrolled(f32),
    ToggleMenu,
    CloseMenu,
    SplashFinished,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Session {
    pub filter: CategoryFilter,
    pub lightbox: Lightbox,
    pub nav: NavShell,
    pub splash: Splash,
}

impl Session {
    /// Session that skips the loading splash
    pub fn without_splash() -> Self {
        Self {
            splash: Splash::Done,
            ..Self::default()
        }
    }

    /// Apply one event and return the resulting state
    #[must_use]
    pub fn reduce(self, catalog: &Catalog, event: Event) -> Self {
        match event {
            Event::SelectCategory(filter) => Self { filter, ..self },
            Event::SelectPhoto(id) => match catalog.get(id) {
                Some(photo) => Self {
                    lightbox: self.lightbox.select(photo),
                    ..self
                },
                None => {
                    tracing::warn!("⚠️  Ignoring selection of unknown photo {}", id);
                    self
                }
            },
            Event::Dismiss => Self {
                lightbox: self.lightbox.dismiss(),
                ..self
            },
            Event::Scrolled(offset_y) => Self {
                nav: self.nav.scrolled_to(offset_y),
                ..self
            },
            Event::ToggleMenu => Self {
                nav: self.nav.toggle_menu(),
                ..self
            },
            Event::CloseMenu => Self {
                nav: self.nav.close_menu(),
                ..self
            },
            Event::SplashFinished => Self {
                splash: Splash::Done,
                ..self
            },
        }
    }

    /// Photos currently visible in the gallery
    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Photo> {
        filter::apply(catalog.photos(), &self.filter)
    }

    /// Photo currently shown in the lightbox
    pub fn selected_photo<'a>(&self, catalog: &'a Catalog) -> Option<&'a Photo> {
        self.lightbox.selected().and_then(|id| catalog.get(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::catalog::{BuiltinCatalog, CatalogSource};
    use crate::state::data::Category;

    fn catalog() -> Catalog {
        BuiltinCatalog.load().unwrap()
    }

    fn run(catalog: &Catalog, events: Vec<Event>) -> Session {
        events
            .into_iter()
            .fold(Session::default(), |session, event| session.reduce(catalog, event))
    }

    #[test]
    fn test_initial_session() {
        let catalog = catalog();
        let session = Session::default();
        assert_eq!(session.filter, CategoryFilter::All);
        assert_eq!(session.lightbox, Lightbox::Closed);
        assert!(session.splash.is_showing());
        assert_eq!(session.visible(&catalog).len(), 8);
        assert!(session.selected_photo(&catalog).is_none());
    }

    #[test]
    fn test_category_then_wildcard() {
        let catalog = catalog();
        let session = run(
            &catalog,
            vec![Event::SelectCategory(CategoryFilter::Only(Category::new("Corrida")))],
        );

        let titles: Vec<&str> = session.visible(&catalog).iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Explosão na Largada", "Foco Absoluto"]);

        let session = session.reduce(&catalog, Event::SelectCategory(CategoryFilter::All));
        let visible = session.visible(&catalog);
        let expected: Vec<&Photo> = catalog.photos().iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_select_replace_dismiss() {
        let catalog = catalog();
        let session = run(&catalog, vec![Event::SelectPhoto(PhotoId(3))]);
        assert_eq!(session.lightbox, Lightbox::Open(PhotoId(3)));
        assert_eq!(session.selected_photo(&catalog).unwrap().title, "Cesta no Último Segundo");

        let session = session.reduce(&catalog, Event::SelectPhoto(PhotoId(5)));
        assert_eq!(session.lightbox, Lightbox::Open(PhotoId(5)));

        let session = session.reduce(&catalog, Event::Dismiss);
        assert_eq!(session.lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_unknown_photo_is_noop() {
        let catalog = catalog();
        let before = run(&catalog, vec![Event::SelectPhoto(PhotoId(2))]);
        let after = before.clone().reduce(&catalog, Event::SelectPhoto(PhotoId(99)));
        assert_eq!(before, after);

        let closed = Session::default().reduce(&catalog, Event::SelectPhoto(PhotoId(99)));
        assert_eq!(closed.lightbox, Lightbox::Closed);
    }

    #[test]
    fn test_filter_change_keeps_lightbox_open() {
        let catalog = catalog();
        let session = run(
            &catalog,
            vec![
                Event::SelectPhoto(PhotoId(1)),
                Event::SelectCategory(CategoryFilter::Only(Category::new("Radicais"))),
            ],
        );
        assert_eq!(session.lightbox, Lightbox::Open(PhotoId(1)));
    }

    #[test]
    fn test_nav_events_leave_gallery_alone() {
        let catalog = catalog();
        let session = run(
            &catalog,
            vec![
                Event::SelectCategory(CategoryFilter::Only(Category::new("Futebol"))),
                Event::SelectPhoto(PhotoId(5)),
                Event::ToggleMenu,
                Event::Scrolled(300.0),
            ],
        );
        assert!(session.nav.menu_open);
        assert!(session.nav.scrolled);
        assert_eq!(session.lightbox, Lightbox::Open(PhotoId(5)));
        assert_eq!(session.filter, CategoryFilter::Only(Category::new("Futebol")));

        let session = session.reduce(&catalog, Event::CloseMenu);
        assert!(!session.nav.menu_open);
    }

    #[test]
    fn test_splash_finishes() {
        let catalog = catalog();
        let session = run(&catalog, vec![Event::SplashFinished]);
        assert_eq!(session.splash, Splash::Done);
        assert_eq!(Session::without_splash().splash, Splash::Done);
    }
}
