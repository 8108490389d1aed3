//! Start-page UI glue: quick-link slots, the link editor panel, and the
//! search form guard. All simple DOM reads/writes; the simulation never
//! depends on anything here.

use crate::dom;
use crate::storage;
use app_core::{set_link_field, QuickLink, QUICK_LINK_SLOTS};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Write label text and href into the five anchor slots `#l0..#l4`.
pub fn render_links(document: &web::Document, links: &[QuickLink]) {
    for (i, link) in links.iter().take(QUICK_LINK_SLOTS).enumerate() {
        if let Some(el) = document.get_element_by_id(&format!("l{}", i)) {
            el.set_text_content(Some(&link.display_label(i)));
            let _ = el.set_attribute("href", link.href());
        }
    }
}

fn open_editor(document: &web::Document, links: &[QuickLink]) {
    let Some(body) = document.get_element_by_id("editorBody") else {
        return;
    };
    body.set_inner_html("");
    for (i, link) in links.iter().take(QUICK_LINK_SLOTS).enumerate() {
        let Ok(row) = document.create_element("div") else {
            continue;
        };
        let _ = row.set_attribute("class", "row");
        if let Ok(label) = document.create_element("input") {
            let _ = label.set_attribute("type", "text");
            let _ = label.set_attribute("placeholder", "Label");
            let _ = label.set_attribute("value", &link.label);
            let _ = label.set_attribute("data-idx", &i.to_string());
            let _ = label.set_attribute("data-kind", "label");
            let _ = row.append_child(&label);
        }
        if let Ok(url) = document.create_element("input") {
            let _ = url.set_attribute("type", "url");
            let _ = url.set_attribute("placeholder", "https://example.com");
            let _ = url.set_attribute("value", &link.url);
            let _ = url.set_attribute("data-idx", &i.to_string());
            let _ = url.set_attribute("data-kind", "url");
            let _ = row.append_child(&url);
        }
        let _ = body.append_child(&row);
    }
    if let Some(panel) = document.get_element_by_id("linkEditor") {
        let _ = panel.class_list().remove_1("hidden");
    }
}

fn close_editor(document: &web::Document) {
    if let Some(panel) = document.get_element_by_id("linkEditor") {
        let _ = panel.class_list().add_1("hidden");
    }
}

/// Read back every editor input (trimmed) into the link list.
fn collect_editor_fields(document: &web::Document, links: &mut [QuickLink]) {
    let Some(body) = document.get_element_by_id("editorBody") else {
        return;
    };
    let Ok(inputs) = body.query_selector_all("input") else {
        return;
    };
    for n in 0..inputs.length() {
        let Some(node) = inputs.item(n) else { continue };
        let Some(input) = node.dyn_ref::<web::HtmlInputElement>() else {
            continue;
        };
        let Some(idx) = input
            .get_attribute("data-idx")
            .and_then(|v| v.parse::<usize>().ok())
        else {
            continue;
        };
        let Some(kind) = input.get_attribute("data-kind") else {
            continue;
        };
        set_link_field(links, idx, &kind, &input.value());
    }
}

/// Wire the editor buttons: open populates the rows, save trims and
/// persists then re-renders the slots, close and backdrop clicks dismiss.
pub fn wire_link_editor(document: &web::Document, links: Rc<RefCell<Vec<QuickLink>>>) {
    {
        let links_open = links.clone();
        dom::add_click_listener(document, "editLinks", move || {
            if let Some(doc) = dom::window_document() {
                open_editor(&doc, &links_open.borrow());
            }
        });
    }

    dom::add_click_listener(document, "closeEditor", move || {
        if let Some(doc) = dom::window_document() {
            close_editor(&doc);
        }
    });

    {
        let links_save = links.clone();
        dom::add_click_listener(document, "saveLinks", move || {
            let Some(doc) = dom::window_document() else {
                return;
            };
            {
                let mut links = links_save.borrow_mut();
                collect_editor_fields(&doc, &mut links);
                storage::save_links(&links);
            }
            render_links(&doc, &links_save.borrow());
            close_editor(&doc);
        });
    }

    // Clicking the backdrop (the panel itself, not its children) dismisses.
    if let Some(panel) = document.get_element_by_id("linkEditor") {
        let panel_target: web::EventTarget = panel.clone().unchecked_into();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            if ev.target().map_or(false, |t| t == panel_target) {
                if let Some(doc) = dom::window_document() {
                    close_editor(&doc);
                }
            }
        }) as Box<dyn FnMut(_)>);
        let _ = panel.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Block submission of an empty query and put focus back in the box.
pub fn wire_search_guard(document: &web::Document) {
    let Some(form) = document.get_element_by_id("searchForm") else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        let Some(input) = dom::window_document()
            .and_then(|d| d.get_element_by_id("searchInput"))
            .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        else {
            return;
        };
        if input.value().trim().is_empty() {
            ev.prevent_default();
            let _ = input.focus();
        }
    }) as Box<dyn FnMut(_)>);
    let _ = form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn focus_search(document: &web::Document) {
    if let Some(input) = document
        .get_element_by_id("searchInput")
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    {
        let _ = input.focus();
    }
}
