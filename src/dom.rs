use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn js_err(e: wasm_bindgen::JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// First element matching `selector`; an invalid selector counts as absent.
#[inline]
pub fn query(root: &web::Document, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// All elements matching `selector` under `root`, in document order.
pub fn query_all(root: &web::Document, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => Vec::new(),
    }
}

/// Like [`query_all`], scoped to the subtree of `root`.
pub fn query_all_in(root: &web::Element, selector: &str) -> Vec<web::Element> {
    match root.query_selector_all(selector) {
        Ok(list) => node_list_elements(&list),
        Err(_) => Vec::new(),
    }
}

fn node_list_elements(list: &web::NodeList) -> Vec<web::Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Listener for high-frequency events (scroll) that never calls
/// `preventDefault`, registered as passive.
pub fn add_passive_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut() + 'static,
) -> anyhow::Result<()> {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        )
        .map_err(js_err)?;
    closure.forget();
    Ok(())
}

/// Run `f` once after `delay_ms`. Not cancellable.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(js_err)?;
    Ok(())
}

/// Call `step` on every animation frame until it returns false.
pub fn animate_while(mut step: impl FnMut() -> bool + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !step() {
            // Dropping the closure ends the loop and breaks the Rc cycle.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Set one inline style property, ignoring failures.
#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Build an `IntersectionObserver` that reports to `callback`.
pub fn intersection_observer(
    threshold: f64,
    root_margin: &str,
    callback: &Closure<dyn FnMut(js_sys::Array)>,
) -> anyhow::Result<web::IntersectionObserver> {
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(js_err)
}

/// Typed view of the entries array handed to an observer callback.
pub fn observer_entries(entries: &js_sys::Array) -> Vec<web::IntersectionObserverEntry> {
    entries
        .iter()
        .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
        .collect()
}
