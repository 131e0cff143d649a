pub mod navbar;
pub mod sidebar;
pub mod toast;

pub use navbar::render_navbar;
pub use sidebar::render_sidebar;
pub use toast::render_toast;
