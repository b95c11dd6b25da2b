use crate::headers::HeaderCollection;
use crate::host::ResponseView;

/// Terminal response produced locally when a preflight never reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticResponse {
    status: u16,
    headers: HeaderCollection,
}

impl SyntheticResponse {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            headers: HeaderCollection::with_estimate(6),
        }
    }

    pub fn headers(&self) -> &HeaderCollection {
        &self.headers
    }

    /// Always empty; a short-circuited preflight carries no payload.
    pub fn body(&self) -> &[u8] {
        &[]
    }

    pub fn into_parts(self) -> (u16, HeaderCollection) {
        (self.status, self.headers)
    }
}

impl ResponseView for SyntheticResponse {
    fn contains(&self, name: &str) -> bool {
        self.headers.contains(name)
    }

    fn get_first(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    fn set(&mut self, name: &str, value: String) {
        self.headers.set(name, value);
    }

    fn remove(&mut self, name: &str) {
        self.headers.remove(name);
    }

    fn status(&self) -> u16 {
        self.status
    }

    fn set_status(&mut self, status: u16) {
        self.status = status;
    }
}
