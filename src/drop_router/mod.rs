//! Drop routing
//!
//! Turns an external drag-and-drop payload into exactly one new scene
//! object under the root, with its paired render object.
//!
//! Payload kinds form a closed enum; anything the router cannot place is
//! reported as an error and leaves both trees unchanged.

mod payload;
mod router;

pub use payload::{DropObjectType, DropPayload};
pub use router::{place_basic_shape, place_light, place_model, route};
