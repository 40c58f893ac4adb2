use super::response::{Paginated, PaginationInfo};
use paramkit_config::domains::pagination::MIN_PAGE;
use url::Url;

/// A page number and page size, both at least 1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    page_size: u64,
}

impl PageRequest {
    /// Returns `None` when either value is zero
    pub fn new(page: u64, page_size: u64) -> Option<Self> {
        (page >= MIN_PAGE && page_size >= 1).then_some(Self { page, page_size })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn limit(&self) -> u64 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.page_size)
    }
}

/// Response data paginator for one request
///
/// Links are only generated when both a request URL and the page query
/// parameter name are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    request: PageRequest,
    url: Option<Url>,
    page_query_param_name: Option<String>,
    page_size_query_param_name: Option<String>,
}

impl Paginator {
    pub fn new(request: PageRequest) -> Self {
        Self {
            request,
            url: None,
            page_query_param_name: None,
            page_size_query_param_name: None,
        }
    }

    /// Original request URL used as the template for page links
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = Some(url);
        self
    }

    pub fn with_page_query_param_name(mut self, name: impl Into<String>) -> Self {
        self.page_query_param_name = Some(name.into());
        self
    }

    pub fn with_page_size_query_param_name(mut self, name: impl Into<String>) -> Self {
        self.page_size_query_param_name = Some(name.into());
        self
    }

    pub fn page(&self) -> u64 {
        self.request.page()
    }

    pub fn page_size(&self) -> u64 {
        self.request.page_size()
    }

    pub fn limit(&self) -> u64 {
        self.request.limit()
    }

    pub fn offset(&self) -> u64 {
        self.request.offset()
    }

    /// Wrap the items fetched for this page into a response envelope.
    ///
    /// `total` is the number of matching items across all pages, if known.
    pub fn build<T>(&self, items: Vec<T>, total: Option<u64>) -> Paginated<T> {
        let page = self.request.page();
        let requested_size = self.request.page_size();

        let total_pages = total.map(|total| total.div_ceil(requested_size));
        let page_size = (items.len() as u64).min(requested_size);

        // page >= 1, so the next page number is always a valid page number
        let next_page_number = page + 1;
        let next_page = match total_pages {
            Some(total_pages) if next_page_number > total_pages => None,
            _ => self.page_url(next_page_number),
        };

        let prev_page_number = page - 1;
        let prev_page = if prev_page_number < MIN_PAGE {
            None
        } else {
            match total_pages {
                Some(total_pages) if prev_page_number > total_pages => self.page_url(total_pages),
                _ => self.page_url(prev_page_number),
            }
        };

        Paginated {
            data: items,
            pagination: PaginationInfo {
                page,
                page_size,
                total_pages,
                total,
                next_page,
                prev_page,
            },
        }
    }

    fn page_url(&self, page_number: u64) -> Option<Url> {
        if page_number < MIN_PAGE {
            return None;
        }

        let (Some(base), Some(page_param)) = (&self.url, &self.page_query_param_name) else {
            return None;
        };
        let size_param = self.page_size_query_param_name.as_deref();

        let kept: Vec<(String, String)> = base
            .query_pairs()
            .filter(|(key, _)| key != page_param.as_str() && Some(key.as_ref()) != size_param)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        let mut url = base.clone();
        {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            pairs.extend_pairs(kept.iter().map(|(key, value)| (key.as_str(), value.as_str())));
            pairs.append_pair(page_param, &page_number.to_string());
            if let Some(size_param) = size_param {
                pairs.append_pair(size_param, &self.request.page_size().to_string());
            }
        }

        Some(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn paginator(page: u64, page_size: u64) -> Paginator {
        Paginator::new(PageRequest::new(page, page_size).unwrap())
            .with_url(Url::parse("http://localhost:8000/users/?page=1&age=22").unwrap())
            .with_page_query_param_name("page")
            .with_page_size_query_param_name("pageSize")
    }

    fn query_of(url: &Url) -> Vec<(String, String)> {
        url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
    }

    #[test]
    fn test_page_request_rejects_zero() {
        assert!(PageRequest::new(0, 10).is_none());
        assert!(PageRequest::new(1, 0).is_none());
        assert!(PageRequest::new(1, 1).is_some());
    }

    #[test]
    fn test_limit_and_offset() {
        let paginator = paginator(3, 10);
        assert_eq!(paginator.limit(), 10);
        assert_eq!(paginator.offset(), 20);
    }

    #[test]
    fn test_first_page_links() {
        let page = paginator(1, 10).build((0..10).collect::<Vec<_>>(), Some(25));

        assert_eq!(page.pagination.total_pages, Some(3));
        assert_eq!(page.pagination.page_size, 10);
        assert!(page.pagination.prev_page.is_none());

        let next = page.pagination.next_page.unwrap();
        assert_eq!(
            query_of(&next),
            vec![
                ("age".to_string(), "22".to_string()),
                ("page".to_string(), "2".to_string()),
                ("pageSize".to_string(), "10".to_string()),
            ]
        );
    }

    #[test]
    fn test_last_page_links() {
        let page = paginator(3, 10).build((0..5).collect::<Vec<_>>(), Some(25));

        assert_eq!(page.pagination.page_size, 5);
        assert!(page.pagination.next_page.is_none());
        assert_eq!(
            page.pagination.prev_page.unwrap().as_str(),
            "http://localhost:8000/users/?age=22&page=2&pageSize=10"
        );
    }

    #[test]
    fn test_prev_link_clamps_to_last_page() {
        let page = paginator(7, 10).build(Vec::<u8>::new(), Some(25));

        assert_eq!(page.pagination.page_size, 0);
        assert!(page.pagination.next_page.is_none());
        let prev = page.pagination.prev_page.unwrap();
        assert!(query_of(&prev).contains(&("page".to_string(), "3".to_string())));
    }

    #[test]
    fn test_empty_result_has_no_links() {
        let page = paginator(1, 10).build(Vec::<u8>::new(), Some(0));

        assert_eq!(page.pagination.total_pages, Some(0));
        assert!(page.pagination.next_page.is_none());
        assert!(page.pagination.prev_page.is_none());

        // prev would clamp to page 0, which is not a page
        let page = paginator(2, 10).build(Vec::<u8>::new(), Some(0));
        assert!(page.pagination.prev_page.is_none());
    }

    #[test]
    fn test_unknown_total_keeps_links_unclamped() {
        let page = paginator(5, 10).build(vec!["a"; 10], None);

        assert_eq!(page.pagination.total, None);
        assert_eq!(page.pagination.total_pages, None);
        assert!(query_of(&page.pagination.next_page.unwrap()).contains(&("page".to_string(), "6".to_string())));
        assert!(query_of(&page.pagination.prev_page.unwrap()).contains(&("page".to_string(), "4".to_string())));
    }

    #[test]
    fn test_links_need_url_and_param_name() {
        let request = PageRequest::new(2, 10).unwrap();

        let without_url = Paginator::new(request).with_page_query_param_name("page");
        let page = without_url.build(vec![1; 10], Some(100));
        assert!(page.pagination.next_page.is_none());
        assert!(page.pagination.prev_page.is_none());

        let without_name = Paginator::new(request).with_url(Url::parse("http://localhost/").unwrap());
        let page = without_name.build(vec![1; 10], Some(100));
        assert!(page.pagination.next_page.is_none());
        assert!(page.pagination.prev_page.is_none());
    }

    #[test]
    fn test_page_size_param_is_optional_in_links() {
        let paginator = Paginator::new(PageRequest::new(1, 10).unwrap())
            .with_url(Url::parse("http://localhost/items").unwrap())
            .with_page_query_param_name("page");

        let page = paginator.build(vec![0; 10], None);
        assert_eq!(page.pagination.next_page.unwrap().as_str(), "http://localhost/items?page=2");
    }

    #[test]
    fn test_existing_page_params_are_replaced() {
        let paginator = Paginator::new(PageRequest::new(2, 5).unwrap())
            .with_url(Url::parse("http://localhost/items?pageSize=5&q=a+b&page=2&page=9").unwrap())
            .with_page_query_param_name("page")
            .with_page_size_query_param_name("pageSize");

        let next = paginator.build(vec![0; 5], None).pagination.next_page.unwrap();
        assert_eq!(next.as_str(), "http://localhost/items?q=a+b&page=3&pageSize=5");
    }

    #[test]
    fn test_items_pass_through_unchanged() {
        let items = vec!["c", "a", "b"];
        let page = paginator(1, 10).build(items.clone(), Some(3));
        assert_eq!(page.data, items);
        assert!(page.pagination.next_page.is_none());
    }

    #[test]
    fn test_envelope_serialization() {
        let page = Paginator::new(PageRequest::new(1, 2).unwrap()).build(vec![1, 2], Some(3));
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": [1, 2],
                "pagination": {
                    "page": 1,
                    "page_size": 2,
                    "total_pages": 2,
                    "total": 3,
                    "next_page": null,
                    "prev_page": null
                }
            })
        );
    }

    proptest! {
        #[test]
        fn prop_offset_and_limit(page in 1u64..10_000, page_size in 1u64..=20) {
            let request = PageRequest::new(page, page_size).unwrap();
            prop_assert_eq!(request.offset(), (page - 1) * page_size);
            prop_assert_eq!(request.limit(), page_size);
        }

        #[test]
        fn prop_effective_page_size(len in 0usize..50, page_size in 1u64..=20, total in proptest::option::of(0u64..500)) {
            let page = paginator(1, page_size).build(vec![0u8; len], total);
            prop_assert_eq!(page.pagination.page_size, (len as u64).min(page_size));
            prop_assert_eq!(page.pagination.total_pages, total.map(|t| t.div_ceil(page_size)));
        }

        #[test]
        fn prop_build_is_idempotent(page in 1u64..50, len in 0usize..30, total in proptest::option::of(0u64..500)) {
            let paginator = paginator(page, 10);
            let items: Vec<usize> = (0..len).collect();
            prop_assert_eq!(paginator.build(items.clone(), total), paginator.build(items, total));
        }
    }
}
