//! Testing harness for the rangeslider widgets.
//!
//! The harnesses drive a widget through mount and pointer gestures without a
//! rendering shell, routing moves and releases through a [`ListenerRegistry`]
//! the way a page routes them through its document listeners.
//!
//! [`ListenerRegistry`]: rangeslider_core::ListenerRegistry

mod harness;
mod recorder;

pub use harness::{RangeHarness, SliderHarness};
pub use recorder::{Recorded, StoreWrite};
