pub mod badge;
pub mod card;
pub mod site_header;
pub mod theme_toggle;
