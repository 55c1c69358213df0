use serde::Deserialize;

pub const QUESTIONS_PER_PAGE: usize = 10;

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<usize>,
}

/// One-indexed page slice of `items`. Pages past the end come back empty,
/// they are not an error at this level.
pub fn paginate<T>(items: &[T], page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(QUESTIONS_PER_PAGE);
    if start >= items.len() {
        return &[];
    }
    let end = usize::min(start + QUESTIONS_PER_PAGE, items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_first_page() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 1), (1..=10).collect::<Vec<i64>>());
    }

    #[test]
    fn partial_last_page() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 3), (21..=25).collect::<Vec<i64>>());
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items: Vec<i64> = (1..=25).collect();
        assert!(paginate(&items, 4).is_empty());
        assert!(paginate(&items, 100).is_empty());
    }

    #[test]
    fn page_zero_behaves_like_page_one() {
        let items: Vec<i64> = (1..=25).collect();
        assert_eq!(paginate(&items, 0), paginate(&items, 1));
    }

    #[test]
    fn empty_input_is_empty_on_every_page() {
        let items: Vec<i64> = vec![];
        assert!(paginate(&items, 1).is_empty());
        assert!(paginate(&items, 2).is_empty());
    }

    #[test]
    fn slice_length_matches_the_leftover_count() {
        for total in 0..35usize {
            let items: Vec<usize> = (0..total).collect();
            for page in 1..6usize {
                let expected = usize::min(
                    QUESTIONS_PER_PAGE,
                    total.saturating_sub((page - 1) * QUESTIONS_PER_PAGE),
                );
                assert_eq!(paginate(&items, page).len(), expected);
            }
        }
    }
}
