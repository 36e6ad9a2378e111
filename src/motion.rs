//! Scroll and entrance choreography for the page.
//!
//! Everything in here is plain state and arithmetic; the components under
//! `app` wire it to browser events. `deliver_delay` is the one piece that
//! touches the reactive owner, so unmount behaviour can be tested here.

mod interpolate;
mod nav;
mod pose;
mod reveal;
mod scroll;
mod timeline;
mod visibility;

pub use interpolate::{interpolate, ScrollTransform, HERO_FADE, HERO_SCALE};
pub use nav::{NavConfig, NavController, NavVisibility};
pub use pose::{AnimationSpec, Easing, Pose};
pub use reveal::{deliver_delay, RevealAction, RevealAnimator};
pub use scroll::{ScrollMetrics, ScrollSample};
pub use timeline::{RowEmphasis, Timeline};
pub use visibility::{intersects, ViewportMargin, VisibilityRecord};
