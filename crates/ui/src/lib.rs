pub mod app;
pub mod cell;
pub mod context;
pub mod dialog;
pub mod navigation;
pub mod routes;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use dialog::DialogNotifier;
pub use routes::Route;
