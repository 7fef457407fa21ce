use crate::constants::{HEADER_ID, HEADER_SCROLLED_CLASS};
use crate::core::page::header_is_scrolled;
use crate::dom;
use web_sys as web;

fn update(window: &web::Window, header: &web::Element) {
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    _ = header
        .class_list()
        .toggle_with_force(HEADER_SCROLLED_CLASS, header_is_scrolled(scroll_y));
}

pub fn wire_header(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let Some(header) = document.get_element_by_id(HEADER_ID) else {
        log::debug!("[header] no #{}; skipping", HEADER_ID);
        return Ok(());
    };
    update(window, &header);

    let wnd = window.clone();
    dom::add_passive_listener(window, "scroll", move || update(&wnd, &header))
}
