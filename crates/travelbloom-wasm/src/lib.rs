//! travelbloom-wasm: WebAssembly bindings for travelbloom-core
//!
//! The page fetches the catalog document itself and hands the body to
//! [`load_catalog`]; from then on [`search`] answers keyword queries with
//! plain JSON-serializable card objects.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { load_catalog, fail_load, search } from 'travelbloom-wasm';
//!
//! async function main() {
//!   await init();
//!   const res = await fetch('travel_recommendation_api.json');
//!   if (!res.ok) { fail_load(`HTTP ${res.status}`); return; }
//!   load_catalog(await res.text());
//!
//!   const { rule, cards, advisory } = search('beaches');
//!   console.log(rule, cards, advisory);
//! }
//! main();
//! ```
//!
//! Notes
//! -----
//! - The catalog is set once per page. A later `load_catalog` throws and its
//!   body is dropped; a later `fail_load` is ignored.
//! - `search` and `all_cards` throw a JS `Error` whose message is meant for
//!   the user ("Please enter a valid search query.", "Data still loading,
//!   try again.") when the term is blank or no catalog is loaded yet.
use serde::Serialize;
use std::fmt::Display;
use std::sync::OnceLock;
use wasm_bindgen::prelude::*;

use travelbloom_core::prelude::*;
use serde_wasm_bindgen::to_value;

// Written once, when the page reports the outcome of its fetch.
static SESSION: OnceLock<Session> = OnceLock::new();

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"Initializing TravelBloom WASM module...".into());
}

fn js_error(e: impl Display) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

/// Store the load outcome. Returns `false` if the page had already settled
/// it, in which case `result` is dropped.
fn settle(result: Result<Catalog>) -> bool {
    let mut session = Session::new();
    session.finish_load(result);
    let failure = session.failure().map(str::to_owned);

    if SESSION.set(session).is_err() {
        web_sys::console::warn_1(&"catalog already settled; ignoring".into());
        return false;
    }
    match failure {
        Some(msg) => web_sys::console::error_1(&format!("✖ catalog load failed: {msg}").into()),
        None => {
            if let Some(catalog) = SESSION.get().and_then(Session::catalog) {
                let stats = catalog.stats();
                web_sys::console::log_1(
                    &format!("✓ Loaded {} recommendations", stats.places()).into(),
                );
            }
        }
    }
    true
}

/* --------------------------------------------------------------------------
   Loading
-------------------------------------------------------------------------- */

/// Parse the fetched catalog body. Throws if the body is malformed (the page
/// then stays unloaded) or if a catalog was already settled.
#[wasm_bindgen]
pub fn load_catalog(json: &str) -> std::result::Result<(), JsValue> {
    let catalog = match Catalog::from_json_str(json) {
        Ok(catalog) => catalog,
        Err(e) => {
            let msg = e.to_string();
            settle(Err(e));
            return Err(js_error(msg));
        }
    };
    if settle(Ok(catalog)) {
        Ok(())
    } else {
        Err(js_error("catalog already loaded; body ignored"))
    }
}

/// Record a failed fetch (e.g. `HTTP 404`). Searches keep answering
/// "not ready".
#[wasm_bindgen]
pub fn fail_load(reason: &str) {
    settle(Err(CatalogError::Fetch {
        location: Catalog::default_dataset_filename().to_string(),
        reason: reason.to_string(),
    }));
}

#[wasm_bindgen]
pub fn is_ready() -> bool {
    SESSION.get().is_some_and(Session::is_ready)
}

/* --------------------------------------------------------------------------
   Search
-------------------------------------------------------------------------- */

#[derive(Serialize)]
struct SearchResponse<'a> {
    rule: MatchRule,
    cards: Vec<CardView<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    advisory: Option<&'static str>,
}

/// Returns `{ rule, cards: [{name, imageUrl, alt, description, kind}], advisory? }`.
#[wasm_bindgen]
pub fn search(term: &str) -> std::result::Result<JsValue, JsValue> {
    let query = Query::parse(term).map_err(js_error)?;
    let session = SESSION
        .get()
        .ok_or_else(|| js_error(CatalogError::NotReady))?;
    let catalog = session
        .catalog()
        .ok_or_else(|| js_error(CatalogError::NotReady))?;
    let outcome = catalog.resolve_with(&query, session.options());

    let response = SearchResponse {
        rule: outcome.rule,
        cards: CardView::from_outcome(&outcome),
        advisory: outcome.advisory,
    };
    to_value(&response).map_err(js_error)
}

/// Every card, for the initial grid.
#[wasm_bindgen]
pub fn all_cards() -> std::result::Result<JsValue, JsValue> {
    let catalog = SESSION
        .get()
        .and_then(Session::catalog)
        .ok_or_else(|| js_error(CatalogError::NotReady))?;
    to_value(&cards_for_all(catalog)).map_err(js_error)
}

#[wasm_bindgen]
pub fn get_stats() -> JsValue {
    match SESSION.get().and_then(Session::catalog) {
        Some(catalog) => to_value(&catalog.stats()).unwrap_or(JsValue::NULL),
        None => JsValue::NULL,
    }
}
