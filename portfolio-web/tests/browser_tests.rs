#![cfg(target_arch = "wasm32")]

use portfolio_web::app::App;
use portfolio_web::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::window()
        .and_then(|w| w.document())
        .expect("document");
    if let Some(root) = doc.get_element_by_id("app") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("app");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn next_tick() {
    yew::platform::time::sleep(std::time::Duration::from_millis(20)).await;
}

#[wasm_bindgen_test]
async fn choosing_a_language_persists_and_rerenders() {
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item("preferred-language", "it").expect("seed preference");
    Renderer::<App>::with_root(ensure_app_root()).render();
    next_tick().await;

    let doc = dom::window().and_then(|w| w.document()).expect("document");
    let root = doc.get_element_by_id("app").expect("root");
    assert!(root.text_content().unwrap_or_default().contains("Invia Messaggio"));

    let toggle: HtmlElement = doc
        .query_selector(".language-toggle")
        .expect("query toggle")
        .expect("toggle exists")
        .dyn_into()
        .expect("toggle is html");
    toggle.click();
    next_tick().await;

    let english: HtmlElement = doc
        .query_selector("[data-lang='en'] button")
        .expect("query option")
        .expect("english option")
        .dyn_into()
        .expect("option is html");
    english.click();
    next_tick().await;

    assert!(root.text_content().unwrap_or_default().contains("Send Message"));
    assert_eq!(
        storage.get_item("preferred-language").ok().flatten().as_deref(),
        Some("en")
    );
    assert_eq!(
        doc.document_element().and_then(|el| el.get_attribute("lang")).as_deref(),
        Some("en")
    );
}
