pub mod handlers;
pub mod header;
pub mod results;
pub mod spinner;
pub mod theme_toggle;
pub mod uploader;
pub mod utils;
