pub mod constants;
pub mod counter;
pub mod gallery;
pub mod page;
pub mod particles;
pub mod reveal;

pub use counter::{parse_count_target, CounterTween};
pub use gallery::{GalleryMetrics, GalleryScrollSync};
pub use page::{LoopPhase, MenuState};
pub use reveal::{
    AnimateMode, IntersectionEntry, ObservationSource, ObserverOptions, RevealEffect,
    RevealEngine, RevealTarget, WatchKind,
};
