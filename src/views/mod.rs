// View-state exports
pub mod listing;
pub mod profile;

pub use listing::ListingView;
pub use profile::{InquiryForm, ProfileState, ProfileView};

/// One screen of the browsing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Listing,
    Profile(u64),
}

/// Navigation stack for the session
///
/// The listing is the permanent root; profiles push on top of it. Going back
/// from the root stays on the root.
#[derive(Debug)]
pub struct Navigator {
    stack: Vec<Screen>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Listing],
        }
    }

    pub fn current(&self) -> Screen {
        *self.stack.last().unwrap_or(&Screen::Listing)
    }

    pub fn open_profile(&mut self, id: u64) {
        self.stack.push(Screen::Profile(id));
    }

    /// Pop back one screen, returning the screen now on top
    pub fn back(&mut self) -> Screen {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self.current()
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_is_root() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::Listing);
    }

    #[test]
    fn test_open_and_back() {
        let mut nav = Navigator::new();

        nav.open_profile(7);
        assert_eq!(nav.current(), Screen::Profile(7));

        assert_eq!(nav.back(), Screen::Listing);
    }

    #[test]
    fn test_back_from_root_stays_on_root() {
        let mut nav = Navigator::new();

        assert_eq!(nav.back(), Screen::Listing);
        assert_eq!(nav.back(), Screen::Listing);
    }
}
