use chrono::Datelike;
use iced::keyboard::{self, key::Named, Key};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{column, scrollable, Stack};
use iced::{Element, Length, Subscription, Task, Theme};
use std::sync::Arc;
use std::time::Duration;

mod config;
mod content;
mod error;
mod logging;
mod state;
mod theme;
mod ui;

use config::Config;
use state::catalog::{self, Catalog, LoadedCatalog};
use state::nav::Section;
use state::session::{Event, Session};
use state::splash::SplashTimer;
use ui::contact::{ContactDraft, Field};

/// Main application state
struct ActionPhoto {
    config: Config,
    /// The photo catalog (empty until loading completes)
    catalog: Arc<Catalog>,
    /// Filter, selection, navigation and splash state
    session: Session,
    /// Pending splash timer, if the splash is still up
    splash_timer: Option<SplashTimer>,
    contact: ContactDraft,
    copyright: String,
    /// Status message shown in the footer
    status: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// Background catalog loading finished
    CatalogLoaded(LoadedCatalog),
    /// A state transition for the root session
    Session(Event),
    /// User picked a navbar link or call-to-action
    NavigateTo(Section),
    ContactEdited(Field, String),
    /// Press captured by an overlay's content; intentionally does nothing
    Noop,
}

fn page_id() -> scrollable::Id {
    scrollable::Id::new("page")
}

impl ActionPhoto {
    /// Create the application with an explicit config (no tasks started)
    fn with_config(config: Config) -> Self {
        let session = if config.splash_millis == 0 {
            Session::without_splash()
        } else {
            Session::default()
        };
        let copyright =
            content::copyright(chrono::Local::now().year(), &config.brand.display_name());

        ActionPhoto {
            config,
            catalog: Arc::new(Catalog::default()),
            session,
            splash_timer: None,
            contact: ContactDraft::default(),
            copyright,
            status: None,
        }
    }

    /// Create a new instance of the application
    fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        tracing::info!(
            "🎨 Action Photo starting (theme: {}, catalog: {:?})",
            config.variant.name(),
            config.catalog
        );

        let mut app = Self::with_config(config);

        let load = Task::perform(
            catalog::load_catalog(app.config.catalog.clone()),
            Message::CatalogLoaded,
        );

        let splash = if app.session.splash.is_showing() {
            let (timer, task) = SplashTimer::start(Duration::from_millis(app.config.splash_millis));
            app.splash_timer = Some(timer);
            task.map(|()| Message::Session(Event::SplashFinished))
        } else {
            Task::none()
        };

        (app, Task::batch([load, splash]))
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::CatalogLoaded(loaded) => {
                if let Some(reason) = &loaded.fallback_reason {
                    self.status = Some(format!("Usando o catálogo padrão: {}", reason));
                }
                self.catalog = loaded.catalog;
                Task::none()
            }
            Message::Session(event) => {
                if event == Event::SplashFinished {
                    self.splash_timer = None;
                    tracing::debug!("✨ Splash dismissed");
                }
                self.session = std::mem::take(&mut self.session).reduce(&self.catalog, event);
                Task::none()
            }
            Message::NavigateTo(section) => {
                self.session = std::mem::take(&mut self.session).reduce(&self.catalog, Event::CloseMenu);
                scrollable::snap_to(
                    page_id(),
                    RelativeOffset {
                        x: 0.0,
                        y: section.anchor(),
                    },
                )
            }
            Message::ContactEdited(field, value) => {
                self.contact.edit(field, value);
                Task::none()
            }
            Message::Noop => Task::none(),
        }
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        let scheme = self.config.variant.scheme();

        let page = column![
            ui::hero::view(scheme),
            ui::gallery::view(&self.catalog, &self.session, scheme),
            ui::sections::about(scheme),
            ui::sections::services(scheme),
            ui::contact::view(&self.contact, scheme),
            ui::sections::footer(
                &self.config.brand,
                &self.copyright,
                self.status.as_deref(),
                scheme,
            ),
        ];

        let page = scrollable(page)
            .id(page_id())
            .on_scroll(|viewport| Message::Session(Event::Scrolled(viewport.absolute_offset().y)))
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .push(page)
            .push(ui::navbar::view(self.session.nav, &self.config.brand, scheme));

        if let Some(photo) = self.session.selected_photo(&self.catalog) {
            layers = layers.push(ui::lightbox::view(photo, scheme));
        }

        if self.session.splash.is_showing() {
            layers = layers.push(ui::splash::view(&self.config.brand, scheme));
        }

        layers.width(Length::Fill).height(Length::Fill).into()
    }

    /// Listen for Escape only while the lightbox is open
    fn subscription(&self) -> Subscription<Message> {
        if !self.session.lightbox.is_open() {
            return Subscription::none();
        }

        keyboard::on_key_press(|key, _modifiers| match key {
            Key::Named(Named::Escape) => Some(Message::Session(Event::Dismiss)),
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        self.config.variant.theme()
    }
}

fn main() -> iced::Result {
    logging::init();

    iced::application("Action Photo", ActionPhoto::update, ActionPhoto::view)
        .subscription(ActionPhoto::subscription)
        .theme(ActionPhoto::theme)
        .window_size((1280.0, 860.0))
        .centered()
        .run_with(ActionPhoto::new)
}
