use std::cell::RefCell;
use std::rc::Rc;

use crate::countries::{self, Country, CountryId};
use crate::pointer::{Point, PointerEvents, Region, Subscription};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Closed,
    Open,
}

#[derive(Debug)]
struct SelectorShared {
    state: SelectorState,
    input: Option<Region>,
    dropdown: Option<Region>,
}

/// Open/closed state of the country dropdown.
///
/// While mounted the selector listens for pointer presses and closes itself
/// when a press lands outside both the input and the dropdown surface. The
/// regions are reported by the widget after each layout pass.
pub struct CountrySelector {
    shared: Rc<RefCell<SelectorShared>>,
    subscription: Option<Subscription>,
}

impl Default for CountrySelector {
    fn default() -> Self {
        Self::new()
    }
}

impl CountrySelector {
    pub fn new() -> Self {
        Self {
            shared: Rc::new(RefCell::new(SelectorShared {
                state: SelectorState::Closed,
                input: None,
                dropdown: None,
            })),
            subscription: None,
        }
    }

    /// Installs the outside-click listener. Mounting twice keeps a single
    /// listener.
    pub fn mount(&mut self, events: &PointerEvents) {
        if self.subscription.is_some() {
            return;
        }

        let shared = Rc::clone(&self.shared);
        self.subscription = Some(events.subscribe(move |at| {
            handle_pointer_down(&shared, at);
        }));
    }

    pub fn unmount(&mut self) {
        self.subscription = None;
        let mut shared = self.shared.borrow_mut();
        shared.state = SelectorState::Closed;
        shared.input = None;
        shared.dropdown = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn state(&self) -> SelectorState {
        self.shared.borrow().state
    }

    pub fn is_open(&self) -> bool {
        self.state() == SelectorState::Open
    }

    pub fn click_input(&mut self) {
        self.shared.borrow_mut().state = SelectorState::Open;
    }

    /// Closes the list and hands back the chosen country for the caller to
    /// commit to the draft.
    pub fn select(&mut self, country: CountryId) -> CountryId {
        let mut shared = self.shared.borrow_mut();
        shared.state = SelectorState::Closed;
        shared.dropdown = None;
        country
    }

    pub fn set_input_region(&mut self, region: Region) {
        self.shared.borrow_mut().input = Some(region);
    }

    /// `None` once the dropdown is no longer drawn.
    pub fn set_dropdown_region(&mut self, region: Option<Region>) {
        self.shared.borrow_mut().dropdown = region;
    }

    /// Entries shown when the list is open.
    pub fn options(&self) -> &'static [Country] {
        countries::all()
    }
}

fn handle_pointer_down(shared: &RefCell<SelectorShared>, at: Point) {
    let mut shared = shared.borrow_mut();
    if shared.state != SelectorState::Open {
        return;
    }

    if let (Some(input), Some(dropdown)) = (shared.input, shared.dropdown) {
        if !input.contains(at) && !dropdown.contains(at) {
            shared.state = SelectorState::Closed;
            shared.dropdown = None;
            log::debug!("Country list closed by outside press");
        }
    }
}
