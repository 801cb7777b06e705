/// Lightbox selection state
///
/// At most one photo is shown full-screen at a time. Selecting while open
/// replaces the photo directly; there is no intermediate `Closed` step.

use super::data::{Photo, PhotoId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(PhotoId),
}

impl Lightbox {
    /// Show a photo, replacing any photo already shown
    #[must_use]
    pub fn select(self, photo: &Photo) -> Self {
        Lightbox::Open(photo.id)
    }

    /// Close the overlay (no-op when already closed)
    #[must_use]
    pub fn dismiss(self) -> Self {
        Lightbox::Closed
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }

    /// ID of the photo currently shown
    pub fn selected(&self) -> Option<PhotoId> {
        match self {
            Lightbox::Open(id) => Some(*id),
            Lightbox::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(id: u32) -> Photo {
        Photo::new(id, &format!("{id}.jpg"), "Futebol", &format!("Photo {id}"))
    }

    #[test]
    fn test_initial_state_is_closed() {
        assert_eq!(Lightbox::default(), Lightbox::Closed);
        assert!(!Lightbox::default().is_open());
    }

    #[test]
    fn test_select_replace_dismiss() {
        let state = Lightbox::Closed.select(&photo(3));
        assert_eq!(state, Lightbox::Open(PhotoId(3)));

        let state = state.select(&photo(5));
        assert_eq!(state, Lightbox::Open(PhotoId(5)));
        assert_eq!(state.selected(), Some(PhotoId(5)));

        let state = state.dismiss();
        assert_eq!(state, Lightbox::Closed);
    }

    #[test]
    fn test_dismiss_always_closes() {
        for picks in [vec![], vec![1], vec![1, 2, 3], vec![4, 4]] {
            let state = picks
                .iter()
                .fold(Lightbox::Closed, |state, id| state.select(&photo(*id)));
            assert_eq!(state.dismiss(), Lightbox::Closed);
        }
    }
}
