pub mod login_view;

pub use login_view::render_login;
