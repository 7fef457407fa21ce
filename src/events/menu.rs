use crate::constants::{BURGER_ID, MENU_CLOSE_SELECTOR, MOBILE_NAV_ID, NAV_OVERLAY_ID, OPEN_CLASS};
use crate::core::MenuState;
use crate::dom;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct MenuWiring {
    burger: web::Element,
    nav: web::Element,
    overlay: Option<web::Element>,
    body: Option<web::HtmlElement>,
    state: Rc<RefCell<MenuState>>,
}

impl MenuWiring {
    fn apply(&self, next: MenuState) {
        *self.state.borrow_mut() = next;
        let open = next.is_open();
        _ = self.burger.class_list().toggle_with_force(OPEN_CLASS, open);
        _ = self.burger.set_attribute("aria-expanded", next.aria_expanded());
        _ = self.nav.class_list().toggle_with_force(OPEN_CLASS, open);
        _ = self.nav.set_attribute("aria-hidden", next.aria_hidden());
        if let Some(overlay) = &self.overlay {
            _ = overlay.class_list().toggle_with_force(OPEN_CLASS, open);
        }
        if let Some(body) = &self.body {
            dom::set_style(body, "overflow", next.body_overflow());
        }
        log::debug!("[menu] {:?}", next);
    }

    fn toggle(&self) {
        let next = self.state.borrow().toggled();
        self.apply(next);
    }

    fn close(&self) {
        self.apply(MenuState::Closed);
    }
}

pub fn wire_burger(document: &web::Document) -> anyhow::Result<()> {
    let (Some(burger), Some(nav)) = (
        document.get_element_by_id(BURGER_ID),
        document.get_element_by_id(MOBILE_NAV_ID),
    ) else {
        log::debug!("[menu] burger or nav missing; skipping");
        return Ok(());
    };
    let w = MenuWiring {
        burger,
        nav,
        overlay: document.get_element_by_id(NAV_OVERLAY_ID),
        body: document.body(),
        state: Rc::new(RefCell::new(MenuState::Closed)),
    };

    let on_burger = w.clone();
    dom::add_click_listener(&w.burger, move || on_burger.toggle());

    if let Some(overlay) = &w.overlay {
        let on_overlay = w.clone();
        dom::add_click_listener(overlay, move || on_overlay.close());
    }

    let links = dom::query_all_in(&w.nav, MENU_CLOSE_SELECTOR);
    for link in &links {
        let on_link = w.clone();
        dom::add_click_listener(link, move || on_link.close());
    }
    log::info!("[menu] wired with {} closing links", links.len());
    Ok(())
}
