use serde::Deserialize;
use serde::Serialize;
use tracing::warn;

/// One page of a paged listing. Only the first page is ever fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub total: Option<u64>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next: None,
            total: None,
        }
    }
}

impl<T> Page<T> {
    pub fn is_truncated(&self) -> bool {
        self.next.is_some()
    }

    /// Take the items, warning when more pages exist than were fetched.
    pub fn into_items(self, what: &str) -> Vec<T> {
        if self.is_truncated() {
            warn!(
                "Showing the first {} of {} {}",
                self.items.len(),
                self.total.map_or_else(|| "more".to_string(), |t| t.to_string()),
                what
            );
        }
        self.items
    }
}
