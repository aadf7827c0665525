// ============================================================================
// ACADEMY ADMIN - Headless admin client for the course platform
// ============================================================================
// Layers:
// - Models: records exchanged with the backend, drafts, envelopes
// - Services: HTTP only (transport, authenticated client, endpoints)
// - State: Rc<RefCell> state with subscribers (session, notification, routes)
// - ViewModels: list/form controllers and one screen per resource
// - App: wiring, guarded navigation, sign-in/sign-out
// ============================================================================

pub mod config;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;
pub mod viewmodels;
pub mod app;

#[cfg(test)]
mod testing;

pub use app::{App, AppContext, Page};
pub use config::{AppConfig, CONFIG};

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use crate::app::{App, AppContext};
    use crate::config::CONFIG;
    use crate::services::GlooTransport;
    use crate::state::GlooTimers;
    use crate::utils::storage::LocalStore;

    thread_local! {
        static APP: RefCell<Option<Rc<App>>> = RefCell::new(None);
    }

    fn app() -> Option<Rc<App>> {
        APP.with(|cell| cell.borrow().clone())
    }

    fn current_location() -> String {
        web_sys::window()
            .map(|win| win.location())
            .and_then(|location| {
                let path = location.pathname().ok()?;
                let search = location.search().unwrap_or_default();
                Some(format!("{}{}", path, search))
            })
            .unwrap_or_else(|| "/".to_string())
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if CONFIG.enable_logging {
            wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
        }
        log::info!("🚀 Academy Admin - Rust + WASM");

        let ctx = AppContext::new(
            CONFIG.clone(),
            Rc::new(LocalStore),
            Rc::new(GlooTransport),
            Rc::new(GlooTimers),
        );
        let app = Rc::new(App::new(ctx));

        // A 401 anywhere clears the token; send the admin back to sign-in
        let watcher = Rc::downgrade(&app);
        app.context().session.subscribe(move || {
            if let Some(app) = watcher.upgrade() {
                if app.needs_sign_in() {
                    wasm_bindgen_futures::spawn_local(async move {
                        app.navigate("/login").await;
                    });
                }
            }
        });

        APP.with(|cell| *cell.borrow_mut() = Some(app.clone()));

        let location = current_location();
        wasm_bindgen_futures::spawn_local(async move {
            app.navigate(&location).await;
        });
        Ok(())
    }

    /// Show the page for `location` (path plus optional query)
    #[wasm_bindgen]
    pub fn navigate(location: String) {
        if let Some(app) = app() {
            wasm_bindgen_futures::spawn_local(async move {
                app.navigate(&location).await;
            });
        } else {
            log::warn!("⚠️ [MAIN] App is not initialised");
        }
    }

    #[wasm_bindgen]
    pub fn login(email: String, password: String) {
        if let Some(app) = app() {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(message) = app.login(&email, &password).await {
                    log::warn!("⚠️ [MAIN] Sign-in failed: {}", message);
                }
            });
        }
    }

    /// Clear the session and reload so no screen state survives
    #[wasm_bindgen]
    pub fn logout() {
        if let Some(app) = app() {
            app.logout();
        }
        if let Some(win) = web_sys::window() {
            if let Err(e) = win.location().reload() {
                log::error!("❌ [MAIN] Reload after logout failed: {:?}", e);
            }
        }
    }
}
