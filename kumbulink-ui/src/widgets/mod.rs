pub mod country_selector;

pub use country_selector::{country_selector, flag_icon};
