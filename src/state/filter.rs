/// Category filtering for the gallery
///
/// The visible gallery is a pure function of the catalog and the selected
/// category. An unknown category is not an error: it simply matches nothing.

use super::data::{CategoryFilter, Photo};

/// Derive the visible photos for a filter
///
/// - `CategoryFilter::All` returns every photo, order preserved
/// - `CategoryFilter::Only(k)` returns the photos whose category is `k`,
///   in their original relative order
///
/// Takes any iterator of photo references, so the result can be fed back in.
pub fn apply<'a, I>(photos: I, selected: &CategoryFilter) -> Vec<&'a Photo>
where
    I: IntoIterator<Item = &'a Photo>,
{
    photos
        .into_iter()
        .filter(|photo| selected.matches(photo))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::data::{Category, PhotoId};

    /// 8 photos, 4 categories, 2 each, interleaved
    fn sample() -> Vec<Photo> {
        let categories = ["Futebol", "Corrida", "Basquete", "Radicais"];
        (1..=8)
            .map(|id| {
                let category = categories[(id as usize - 1) % categories.len()];
                Photo::new(id, &format!("{id}.jpg"), category, &format!("Photo {id}"))
            })
            .collect()
    }

    fn only(label: &str) -> CategoryFilter {
        CategoryFilter::Only(Category::new(label))
    }

    fn is_subsequence(sub: &[&Photo], full: &[Photo]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|wanted| rest.any(|photo| photo == *wanted))
    }

    #[test]
    fn test_wildcard_is_identity() {
        let catalog = sample();
        let visible = apply(&catalog, &CategoryFilter::All);
        let expected: Vec<&Photo> = catalog.iter().collect();
        assert_eq!(visible, expected);
    }

    #[test]
    fn test_category_selects_matching_in_order() {
        let catalog = sample();
        let visible = apply(&catalog, &only("Corrida"));

        let ids: Vec<PhotoId> = visible.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![PhotoId(2), PhotoId(6)]);
    }

    #[test]
    fn test_result_is_ordered_subsequence() {
        let catalog = sample();
        for filter in [
            CategoryFilter::All,
            only("Futebol"),
            only("Corrida"),
            only("Basquete"),
            only("Radicais"),
            only("Natação"),
        ] {
            let visible = apply(&catalog, &filter);
            assert!(is_subsequence(&visible, &catalog), "{filter:?}");
            assert!(visible.iter().all(|p| filter.matches(p)));
        }
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let catalog = sample();
        assert!(apply(&catalog, &only("Natação")).is_empty());
    }

    #[test]
    fn test_empty_catalog() {
        let catalog: Vec<Photo> = Vec::new();
        assert!(apply(&catalog, &CategoryFilter::All).is_empty());
        assert!(apply(&catalog, &only("Futebol")).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let catalog = sample();
        for filter in [CategoryFilter::All, only("Basquete"), only("Natação")] {
            let once = apply(&catalog, &filter);
            let twice = apply(once.iter().copied(), &filter);
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_wildcard_after_category_restores_all() {
        let catalog = sample();
        let narrowed = apply(&catalog, &only("Basquete"));
        assert_eq!(narrowed.len(), 2);

        let restored = apply(&catalog, &CategoryFilter::All);
        assert_eq!(restored.len(), 8);
    }
}
