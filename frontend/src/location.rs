use web_sys::Location;

use crate::errors::DeleteError;
use crate::utils::page_error;

/// Read and replace the current page location.
pub trait IPageLocation {
    fn pathname(&self) -> Result<String, DeleteError>;

    /// Full page navigation to `href`.
    fn assign(&self, href: &str) -> Result<(), DeleteError>;
}

pub struct BrowserLocation {
    location: Location,
}

impl BrowserLocation {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl IPageLocation for BrowserLocation {
    fn pathname(&self) -> Result<String, DeleteError> {
        self.location.pathname().map_err(page_error)
    }

    fn assign(&self, href: &str) -> Result<(), DeleteError> {
        self.location.set_href(href).map_err(page_error)
    }
}
