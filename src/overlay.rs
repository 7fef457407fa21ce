use crate::constants::HIDDEN_CLASS;
use web_sys as web;

// Play/pause overlay drawn over the vertical video.

#[inline]
pub fn show(overlay: &web::Element) {
    _ = overlay.class_list().remove_1(HIDDEN_CLASS);
}

#[inline]
pub fn hide(overlay: &web::Element) {
    _ = overlay.class_list().add_1(HIDDEN_CLASS);
}

#[inline]
pub fn is_hidden(overlay: &web::Element) -> bool {
    overlay.class_list().contains(HIDDEN_CLASS)
}

/// Play the video when paused (hiding the overlay), otherwise pause it and
/// bring the overlay back.
pub fn toggle_playback(video: &web::HtmlVideoElement, overlay: &web::Element) {
    if video.paused() {
        _ = video.play();
        hide(overlay);
    } else {
        _ = video.pause();
        show(overlay);
    }
    log::debug!(
        "[video] paused={} overlay_hidden={}",
        video.paused(),
        is_hidden(overlay)
    );
}
