use crate::config::PresentConfig;
use crate::pagination::PageSource;
use std::ops::Deref;
use url::form_urlencoded;

/// In-memory page source for hosts without a paginator of their own.
///
/// Holds the items of the current page (already sliced by the caller) and
/// the numbers needed to describe it. Dereferences to the item slice, so
/// slice methods are forwarded while `present_collection` on the page itself
/// still yields a pagination envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<R> {
    items: Vec<R>,
    total: u64,
    per_page: u64,
    current_page: u64,
    path: String,
    page_name: String,
    query: Vec<(String, String)>,
    fragment: Option<String>,
}

impl<R> Page<R> {
    /// `per_page` and `current_page` are clamped to at least 1.
    pub fn new(items: Vec<R>, total: u64, per_page: u64, current_page: u64) -> Self {
        Self {
            items,
            total,
            per_page: per_page.max(1),
            current_page: current_page.max(1),
            path: "/".to_string(),
            page_name: PresentConfig::default().page_name,
            query: Vec::new(),
            fragment: None,
        }
    }

    /// Set the base path of generated URLs
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Set the query parameter carrying the page number
    pub fn with_page_name(mut self, page_name: impl Into<String>) -> Self {
        self.page_name = page_name.into();
        self
    }

    /// Apply the URL settings of a configuration
    pub fn with_config(self, config: &PresentConfig) -> Self {
        self.with_page_name(config.page_name.clone())
    }

    /// Append a query parameter to every generated URL.
    ///
    /// Appending an existing key replaces its value in place.
    pub fn appends(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.query.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.query.push((key, value)),
        }
        self
    }

    /// Append several query parameters, for example the current request's
    /// query string.
    pub fn appends_all<I, K, V>(self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        parameters
            .into_iter()
            .fold(self, |page, (key, value)| page.appends(key, value))
    }

    /// Set the fragment added to every generated URL
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }

    pub fn page_parameter(&self) -> &str {
        &self.page_name
    }

    pub fn query(&self) -> &[(String, String)] {
        &self.query
    }

    pub fn into_items(self) -> Vec<R> {
        self.items
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }
}

impl<R> PageSource for Page<R> {
    type Item = R;

    fn items(&self) -> &[R] {
        &self.items
    }

    fn current_page(&self) -> u64 {
        self.current_page
    }

    /// `None` for an empty page, or when the ordinal does not fit in `u64`.
    fn first_item(&self) -> Option<u64> {
        if self.items.is_empty() {
            return None;
        }
        (self.current_page - 1)
            .checked_mul(self.per_page)?
            .checked_add(1)
    }

    fn last_item(&self) -> Option<u64> {
        let len = u64::try_from(self.items.len()).ok()?;
        self.first_item()?.checked_add(len - 1)
    }

    fn last_page(&self) -> u64 {
        self.total.div_ceil(self.per_page).max(1)
    }

    fn total(&self) -> u64 {
        self.total
    }

    fn per_page(&self) -> u64 {
        self.per_page
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn url(&self, page: u64) -> String {
        let page = page.max(1).to_string();
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                self.query
                    .iter()
                    .filter(|(key, _)| *key != self.page_name)
                    .map(|(key, value)| (key.as_str(), value.as_str())),
            )
            .append_pair(&self.page_name, &page)
            .finish();

        let separator = if self.path.contains('?') { '&' } else { '?' };
        let mut url = format!("{}{}{}", self.path, separator, query);
        if let Some(fragment) = &self.fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }

    fn next_page_url(&self) -> Option<String> {
        self.has_more_pages()
            .then(|| self.url(self.current_page + 1))
    }

    fn previous_page_url(&self) -> Option<String> {
        (self.current_page > 1).then(|| self.url(self.current_page - 1))
    }
}

impl<R> Deref for Page<R> {
    type Target = [R];

    fn deref(&self) -> &[R] {
        &self.items
    }
}
