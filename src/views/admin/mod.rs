pub mod dashboard;

pub use dashboard::render_admin_dashboard;
