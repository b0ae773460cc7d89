//! Cookie-backed token store.
//!
//! The backend sets the bearer token as a readable cookie at sign-in; the
//! realtime controller reads it through [`session::TokenStore`].

use session::TokenStore;

/// Reads named credentials from `document.cookie`. Always empty on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct CookieTokenStore;

impl TokenStore for CookieTokenStore {
    fn get_token(&self, name: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()?.document()?;
            let html = document.dyn_into::<web_sys::HtmlDocument>().ok()?;
            let header = html.cookie().ok()?;
            session::token::parse_cookie(&header, name)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = name;
            None
        }
    }
}
