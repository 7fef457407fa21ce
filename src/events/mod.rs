pub mod gallery;
pub mod header;
pub mod menu;
pub mod particles;
pub mod reveal;
pub mod sections;
pub mod video;

pub use gallery::wire_gallery;
pub use header::wire_header;
pub use menu::wire_burger;
pub use particles::spawn_particles;
pub use reveal::wire_reveal;
pub use sections::{inject_section_lines, wire_active_nav, wire_float_button};
pub use video::{wire_ping_pong, wire_video_vertical};
