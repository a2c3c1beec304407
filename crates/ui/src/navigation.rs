use dioxus_router::Navigator as RouterHandle;
use services::Navigator;

use crate::routes::Route;

/// Routes workflow navigation requests through the app router.
#[derive(Clone, Copy)]
pub struct RouterNavigator(RouterHandle);

impl RouterNavigator {
    #[must_use]
    pub fn new(handle: RouterHandle) -> Self {
        Self(handle)
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        match path.parse::<Route>() {
            Ok(route) => {
                tracing::debug!(path, "navigating");
                let _ = self.0.push(route);
            }
            Err(err) => tracing::warn!(path, error = %err, "refusing to navigate to unknown route"),
        }
    }
}
