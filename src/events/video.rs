use crate::constants::{
    EMBLEM_VIDEO_HIDDEN_CLASS, VIDEO_OVERLAY_ID, VIDEO_VERTICAL_ID, VID_FORWARD_ID,
    VID_REVERSE_ID,
};
use crate::core::LoopPhase;
use crate::dom;
use crate::overlay;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

fn video_by_id(document: &web::Document, id: &str) -> Option<web::HtmlVideoElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())
}

fn on_ended(video: &web::HtmlVideoElement, handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    _ = video.add_event_listener_with_callback("ended", closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn wire_video_vertical(document: &web::Document) -> anyhow::Result<()> {
    let (Some(video), Some(cover)) = (
        video_by_id(document, VIDEO_VERTICAL_ID),
        document.get_element_by_id(VIDEO_OVERLAY_ID),
    ) else {
        log::debug!("[video] vertical video or overlay missing; skipping");
        return Ok(());
    };

    let (video_click, cover_click) = (video.clone(), cover.clone());
    dom::add_click_listener(&cover, move || {
        overlay::toggle_playback(&video_click, &cover_click)
    });
    on_ended(&video, move || overlay::show(&cover));
    Ok(())
}

/// Forward and reverse clips of the logo, played alternately so the loop
/// never has to seek backwards.
#[derive(Clone)]
struct PingPong {
    forward: web::HtmlVideoElement,
    reverse: web::HtmlVideoElement,
    phase: Rc<RefCell<LoopPhase>>,
}

impl PingPong {
    fn clip(&self, phase: LoopPhase) -> &web::HtmlVideoElement {
        match phase {
            LoopPhase::Forward => &self.forward,
            LoopPhase::Reverse => &self.reverse,
        }
    }

    fn advance(&self) {
        let current = *self.phase.borrow();
        let next = current.next();
        _ = self
            .clip(current)
            .class_list()
            .add_1(EMBLEM_VIDEO_HIDDEN_CLASS);
        let incoming = self.clip(next);
        _ = incoming.class_list().remove_1(EMBLEM_VIDEO_HIDDEN_CLASS);
        incoming.set_current_time(0.0);
        _ = incoming.play();
        *self.phase.borrow_mut() = next;
    }
}

pub fn wire_ping_pong(document: &web::Document) -> anyhow::Result<()> {
    let (Some(forward), Some(reverse)) = (
        video_by_id(document, VID_FORWARD_ID),
        video_by_id(document, VID_REVERSE_ID),
    ) else {
        log::debug!("[logo] forward/reverse clips missing; skipping");
        return Ok(());
    };
    let pp = PingPong {
        forward,
        reverse,
        phase: Rc::new(RefCell::new(LoopPhase::Forward)),
    };
    for phase in [LoopPhase::Forward, LoopPhase::Reverse] {
        let pp_end = pp.clone();
        on_ended(pp.clip(phase), move || {
            // Ignore a stale `ended` from the clip that is already hidden.
            if *pp_end.phase.borrow() == phase {
                pp_end.advance();
            }
        });
    }
    _ = pp.forward.play();
    log::info!("[logo] ping-pong loop started");
    Ok(())
}
