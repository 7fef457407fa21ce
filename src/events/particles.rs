use crate::constants::{PARTICLES_ID, PARTICLE_CLASS};
use crate::core::particles;
use crate::dom::js_err;
use web_sys as web;

pub fn spawn_particles(document: &web::Document) -> anyhow::Result<()> {
    let Some(container) = document.get_element_by_id(PARTICLES_ID) else {
        log::debug!("[particles] no #{}; skipping", PARTICLES_ID);
        return Ok(());
    };
    let mut rng = rand::thread_rng();
    let layout = particles::generate(&mut rng);
    for p in &layout {
        let el = document.create_element("div").map_err(js_err)?;
        el.set_class_name(PARTICLE_CLASS);
        el.set_attribute("style", &p.css_text()).map_err(js_err)?;
        container.append_child(&el).map_err(js_err)?;
    }
    log::info!("[particles] spawned {}", layout.len());
    Ok(())
}
