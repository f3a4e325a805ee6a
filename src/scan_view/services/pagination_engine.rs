use crate::scan_view::domain::CanonicalRow;

/// One page of rows plus the page count of the whole set
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub visible: Vec<CanonicalRow>,
    pub total_pages: usize,
}

/// PaginationEngine service slicing rows into fixed-size pages
///
/// Pages are 1-based. A page outside `1..=total_pages` is empty; keeping the
/// requested page in range is the controller's job.
pub struct PaginationEngine;

impl PaginationEngine {
    pub fn total_pages(row_count: usize, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        row_count.div_ceil(page_size)
    }

    pub fn paginate(rows: &[CanonicalRow], page: usize, page_size: usize) -> Page {
        let total_pages = Self::total_pages(rows.len(), page_size);

        let visible = match page.checked_sub(1) {
            Some(index) if page_size > 0 => {
                let start = index.saturating_mul(page_size).min(rows.len());
                let end = start.saturating_add(page_size).min(rows.len());
                rows[start..end].to_vec()
            }
            _ => Vec::new(),
        };

        Page {
            visible,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_view::domain::{RerunFlag, PAGE_SIZE};

    fn rows(count: usize) -> Vec<CanonicalRow> {
        (0..count)
            .map(|i| CanonicalRow {
                name: format!("repo-{}", i),
                vulnerabilities: i as f64,
                updates: String::new(),
                updates_raw: None,
                sast_tool: "CodeQL".to_string(),
                rerun: RerunFlag::No,
                url: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(PaginationEngine::total_pages(0, PAGE_SIZE), 0);
        assert_eq!(PaginationEngine::total_pages(1, PAGE_SIZE), 1);
        assert_eq!(PaginationEngine::total_pages(5, PAGE_SIZE), 1);
        assert_eq!(PaginationEngine::total_pages(6, PAGE_SIZE), 2);
        assert_eq!(PaginationEngine::total_pages(23, PAGE_SIZE), 5);
    }

    #[test]
    fn test_last_page_is_partial() {
        let all = rows(12);
        let page = PaginationEngine::paginate(&all, 3, PAGE_SIZE);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.visible, all[10..12].to_vec());
    }

    #[test]
    fn test_page_beyond_range_is_empty() {
        let all = rows(7);
        let page = PaginationEngine::paginate(&all, 3, PAGE_SIZE);
        assert_eq!(page.total_pages, 2);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn test_page_zero_is_empty() {
        let page = PaginationEngine::paginate(&rows(3), 0, PAGE_SIZE);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn test_empty_rows() {
        let page = PaginationEngine::paginate(&[], 1, PAGE_SIZE);
        assert!(page.visible.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = PaginationEngine::paginate(&rows(3), usize::MAX, PAGE_SIZE);
        assert!(page.visible.is_empty());
    }

    #[test]
    fn test_concatenated_pages_reproduce_input() {
        for count in 0..=17 {
            let all = rows(count);
            let total = PaginationEngine::total_pages(count, PAGE_SIZE);
            let mut joined = Vec::new();
            for page in 1..=total {
                let slice = PaginationEngine::paginate(&all, page, PAGE_SIZE);
                assert!(!slice.visible.is_empty());
                assert!(slice.visible.len() <= PAGE_SIZE);
                joined.extend(slice.visible);
            }
            assert_eq!(joined, all, "count {}", count);
        }
    }
}
