//! Pure logic of the paginated user directory.
//!
//! Transport stays behind [`UserSource`]; this module owns the pagination
//! arithmetic, the avatar URL templating, and the fetch-state transitions
//! the directory screen renders from.

use thiserror::Error;

use crate::types::{User, UsersEnvelope};

/// Failure fetching or decoding the user list. Surfaced to the view as an
/// error panel; there is no retry logic.
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("failed to parse user response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("user request failed: {0}")]
    Request(String),
}

/// The `GET` collaborator returning the full user list.
pub trait UserSource {
    /// Fetch the user envelope.
    ///
    /// # Errors
    ///
    /// Returns a [`DirectoryError`] when the request or decoding fails.
    fn fetch_users(&self) -> Result<UsersEnvelope, DirectoryError>;
}

/// A 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 1, limit: 12 }
    }
}

/// One rendered page of the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserPage {
    pub users: Vec<User>,
    pub total_items: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub items_per_page: usize,
}

impl UserPage {
    /// 1-based range of items shown ("Showing {start}-{end} of {total}"),
    /// `(0, 0)` when the directory is empty.
    #[must_use]
    pub fn item_range(&self) -> (usize, usize) {
        if self.total_items == 0 {
            return (0, 0);
        }
        let start = (self.current_page - 1) * self.items_per_page + 1;
        let end = (self.current_page * self.items_per_page).min(self.total_items);
        (start, end)
    }
}

/// Slice the full user list into the requested page.
///
/// The source returns every user; paging happens client-side. A page past the
/// end yields an empty slice, not an error.
#[must_use]
pub fn paginate(all_users: &[User], request: PageRequest) -> UserPage {
    let limit = request.limit.max(1);
    let page = request.page.max(1);
    let total_items = all_users.len();
    let total_pages = total_items.div_ceil(limit);

    let start = (page - 1).saturating_mul(limit).min(total_items);
    let end = (start + limit).min(total_items);

    UserPage {
        users: all_users[start..end].to_vec(),
        total_items,
        total_pages,
        current_page: page,
        items_per_page: limit,
    }
}

/// Rewrite the avatar URL's `?size=50x50` suffix for the requested size.
#[must_use]
pub fn avatar_url(avatar: &str, size: u32) -> String {
    avatar.replace("?size=50x50", &format!("?size={size}x{size}"))
}

/// Fetch state of the directory screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directory {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl Default for Directory {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            loading: false,
            error: None,
            current_page: 1,
            total_pages: 1,
            items_per_page: 12,
            total_items: 0,
        }
    }
}

impl Directory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the current page from the source. On failure the previous users
    /// stay in place and `error` carries the message.
    pub fn refresh(&mut self, source: &dyn UserSource) {
        self.loading = true;
        self.error = None;

        match source.fetch_users() {
            Ok(envelope) => {
                let all_users = envelope.into_users();
                let page = paginate(
                    &all_users,
                    PageRequest {
                        page: self.current_page,
                        limit: self.items_per_page,
                    },
                );
                self.users = page.users;
                self.total_items = page.total_items;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page;
                self.items_per_page = page.items_per_page;
                self.loading = false;
            }
            Err(e) => {
                self.loading = false;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.current_page = page;
    }

    /// Changing the page size returns to the first page.
    pub fn set_items_per_page(&mut self, items_per_page: usize) {
        self.items_per_page = items_per_page;
        self.current_page = 1;
    }
}
