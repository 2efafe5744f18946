pub mod external_link;
pub mod surface;
pub mod web_preferences;
