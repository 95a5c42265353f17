use std::num::NonZeroU32;

use serde::Serialize;

/// Page selection for list calls.
///
/// `None` for either field means "server default"; it never implies the
/// full set. The unbounded set has to be requested explicitly with
/// [`Paging::unbounded`], which sends `noPaging=true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paging {
    #[serde(skip_serializing_if = "Option::is_none")]
    page: Option<NonZeroU32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<NonZeroU32>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    no_paging: bool,
}

impl Paging {
    /// Page and page size; zero for either is treated as absent.
    #[must_use]
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: NonZeroU32::new(page),
            page_size: NonZeroU32::new(page_size),
            no_paging: false,
        }
    }

    /// Only the page number, server-default page size.
    #[must_use]
    pub fn page(page: u32) -> Self {
        Self {
            page: NonZeroU32::new(page),
            ..Self::default()
        }
    }

    /// Requests every record in one response.
    #[must_use]
    pub fn unbounded() -> Self {
        Self {
            no_paging: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = NonZeroU32::new(page_size);
        self
    }

    #[must_use]
    pub fn page_number(&self) -> Option<u32> {
        self.page.map(NonZeroU32::get)
    }

    #[must_use]
    pub fn page_size(&self) -> Option<u32> {
        self.page_size.map(NonZeroU32::get)
    }

    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.no_paging
    }
}
