use crate::constants::{
    CTA_SECTION_ID, NAV_ACTIVE_COLOR, NAV_LINK_SELECTOR, NAV_SECTION_SELECTOR, SECTION_LINE_STYLE,
    SECTION_SELECTOR, WA_FLOAT_SELECTOR,
};
use crate::core::constants::{CTA_THRESHOLD, NAV_SECTION_THRESHOLD};
use crate::core::page::{float_button_style, nav_link_targets};
use crate::dom::{self, js_err};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Prepend a thin decorative line to the top of every `.section`.
pub fn inject_section_lines(window: &web::Window, document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, SECTION_SELECTOR);
    for sec in &sections {
        let line = document.create_element("div").map_err(js_err)?;
        line.set_attribute("style", SECTION_LINE_STYLE)
            .map_err(js_err)?;
        let is_static = window
            .get_computed_style(sec)
            .ok()
            .flatten()
            .and_then(|cs| cs.get_property_value("position").ok())
            .map_or(false, |p| p == "static");
        if is_static {
            if let Some(html) = sec.dyn_ref::<web::HtmlElement>() {
                dom::set_style(html, "position", "relative");
            }
        }
        sec.prepend_with_node_1(&line).map_err(js_err)?;
    }
    log::debug!("[sections] {} lines injected", sections.len());
    Ok(())
}

pub fn wire_active_nav(document: &web::Document) -> anyhow::Result<()> {
    let sections = dom::query_all(document, NAV_SECTION_SELECTOR);
    let links: Vec<web::HtmlElement> = dom::query_all(document, NAV_LINK_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .collect();
    if sections.is_empty() || links.is_empty() {
        log::debug!("[nav] no sections or links; skipping");
        return Ok(());
    }

    let on_entries = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        for entry in dom::observer_entries(&entries) {
            if !entry.is_intersecting() {
                continue;
            }
            let id = entry.target().id();
            for link in &links {
                let color = if nav_link_targets(link.get_attribute("href").as_deref(), &id) {
                    NAV_ACTIVE_COLOR
                } else {
                    ""
                };
                dom::set_style(link, "color", color);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = dom::intersection_observer(NAV_SECTION_THRESHOLD, "0px", &on_entries)?;
    on_entries.forget();
    for sec in &sections {
        observer.observe(sec);
    }
    Ok(())
}

pub fn wire_float_button(document: &web::Document) -> anyhow::Result<()> {
    let (Some(btn), Some(cta)) = (
        dom::query(document, WA_FLOAT_SELECTOR).and_then(|el| el.dyn_into::<web::HtmlElement>().ok()),
        document.get_element_by_id(CTA_SECTION_ID),
    ) else {
        log::debug!("[float] button or #{} missing; skipping", CTA_SECTION_ID);
        return Ok(());
    };

    let on_entries = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        if let Some(entry) = dom::observer_entries(&entries).first() {
            let (opacity, pointer_events) = float_button_style(entry.is_intersecting());
            dom::set_style(&btn, "opacity", opacity);
            dom::set_style(&btn, "pointer-events", pointer_events);
        }
    }) as Box<dyn FnMut(js_sys::Array)>);
    let observer = dom::intersection_observer(CTA_THRESHOLD, "0px", &on_entries)?;
    on_entries.forget();
    observer.observe(&cta);
    Ok(())
}
