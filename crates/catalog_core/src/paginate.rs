//! Page slicing and page-button layout.

/// Pages shown on each side of the current page.
pub const PAGE_WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Previous { target: usize, disabled: bool },
    Page { number: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

pub fn total_pages(item_count: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    item_count.div_ceil(items_per_page)
}

/// Pulls `page` into `[1, max(1, total_pages)]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Items on the 1-based `page`. Out-of-range pages yield an empty slice.
pub fn page_slice<T>(items: &[T], page: usize, items_per_page: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(items_per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(items_per_page).min(items.len());
    &items[start..end]
}

/// Previous control, page numbers with ellipsis compression, then Next control.
///
/// Page 1 and the last page are always present along with every page within
/// [`PAGE_WINDOW_RADIUS`] of `current_page`. A gap of two or more pages on
/// either side collapses into one ellipsis; a gap of exactly one page shows
/// that page instead. No buttons at all when there are no pages.
pub fn page_buttons(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages == 0 {
        return Vec::new();
    }
    let current = clamp_page(current_page, total_pages);
    let window_start = current.saturating_sub(PAGE_WINDOW_RADIUS).max(1);
    let window_end = (current + PAGE_WINDOW_RADIUS).min(total_pages);
    let page = |number: usize| PageButton::Page {
        number,
        active: number == current,
    };

    let mut buttons = vec![PageButton::Previous {
        target: current.saturating_sub(1).max(1),
        disabled: current == 1,
    }];

    buttons.push(page(1));
    if window_start == 3 {
        buttons.push(page(2));
    } else if window_start > 3 {
        buttons.push(PageButton::Ellipsis);
    }

    for number in window_start.max(2)..=window_end.min(total_pages - 1) {
        buttons.push(page(number));
    }

    if total_pages > 1 {
        let last_gap_page = total_pages - 1;
        if window_end + 1 == last_gap_page {
            buttons.push(page(last_gap_page));
        } else if window_end + 1 < last_gap_page {
            buttons.push(PageButton::Ellipsis);
        }
        buttons.push(page(total_pages));
    }

    buttons.push(PageButton::Next {
        target: (current + 1).min(total_pages),
        disabled: current == total_pages,
    });
    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compact form: page numbers, `0` for an ellipsis, controls dropped.
    fn layout(buttons: &[PageButton]) -> Vec<usize> {
        buttons
            .iter()
            .filter_map(|button| match button {
                PageButton::Page { number, .. } => Some(*number),
                PageButton::Ellipsis => Some(0),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn twenty_three_items_make_three_pages() {
        let items: Vec<usize> = (1..=23).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(page_slice(&items, 1, 10), (1..=10).collect::<Vec<_>>().as_slice());
        assert_eq!(page_slice(&items, 3, 10), &[21, 22, 23]);
        assert!(page_slice(&items, 4, 10).is_empty());
    }

    #[test]
    fn empty_collection_has_no_pages_or_buttons() {
        assert_eq!(total_pages(0, 10), 0);
        assert!(page_buttons(1, 0).is_empty());
        assert_eq!(clamp_page(5, 0), 1);
    }

    #[test]
    fn middle_page_collapses_both_sides() {
        assert_eq!(
            layout(&page_buttons(10, 20)),
            vec![1, 0, 8, 9, 10, 11, 12, 0, 20]
        );
    }

    #[test]
    fn single_skipped_page_is_shown_not_elided() {
        // Pages 2 and 8 are the only pages outside the window.
        assert_eq!(
            layout(&page_buttons(5, 9)),
            vec![1, 2, 3, 4, 5, 6, 7, 8, 9]
        );
    }

    #[test]
    fn first_page_disables_previous() {
        let buttons = page_buttons(1, 10);
        assert_eq!(
            buttons.first(),
            Some(&PageButton::Previous {
                target: 1,
                disabled: true
            })
        );
        assert_eq!(layout(&buttons), vec![1, 2, 3, 0, 10]);
        assert_eq!(
            buttons.last(),
            Some(&PageButton::Next {
                target: 2,
                disabled: false
            })
        );
    }

    #[test]
    fn last_page_disables_next_and_marks_active() {
        let buttons = page_buttons(10, 10);
        assert_eq!(layout(&buttons), vec![1, 0, 8, 9, 10]);
        assert!(buttons.contains(&PageButton::Page {
            number: 10,
            active: true
        }));
        assert_eq!(
            buttons.last(),
            Some(&PageButton::Next {
                target: 10,
                disabled: true
            })
        );
    }

    #[test]
    fn single_page_disables_both_controls() {
        let buttons = page_buttons(1, 1);
        assert_eq!(
            buttons,
            vec![
                PageButton::Previous {
                    target: 1,
                    disabled: true
                },
                PageButton::Page {
                    number: 1,
                    active: true
                },
                PageButton::Next {
                    target: 1,
                    disabled: true
                },
            ]
        );
    }
}
