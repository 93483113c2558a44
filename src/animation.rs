//! Entrance animations: an offset + fade primitive, a timeline to stagger
//! it across sibling elements, and a scoped context that plays a timeline
//! over DOM elements and reverts them on teardown.

pub mod context;
pub mod ease;
pub mod hooks;
pub mod timeline;
pub mod tween;

pub use ease::Ease;
pub use hooks::use_entrance;
pub use timeline::Timeline;
pub use tween::Tween;
