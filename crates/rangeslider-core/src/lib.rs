//! Core types and collaborator traits for the rangeslider widgets.
//!
//! This crate provides the pieces the slider widgets consume but do not own:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Mouse input: [`Event`], [`MouseButton`]
//! - The value domain: [`ValueRange`]
//! - Shared value stores: [`ValueStore`], [`EndsStore`], [`Store`]
//! - Shell capabilities: [`ElementMeasure`], [`InputSurface`]

mod error;
mod event;
mod geometry;
mod measure;
mod range;
mod store;
mod surface;

pub use error::SliderError;
pub use event::{Event, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use measure::{ElementMeasure, MountedElements};
pub use range::ValueRange;
pub use store::{EndIndex, EndsStore, RangeState, SliderState, Store, ValueStore};
pub use surface::{InputSurface, ListenerId, ListenerRegistry, PointerPhase};
