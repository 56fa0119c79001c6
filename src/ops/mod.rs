//! Primitive operation library
//!
//! The primitives (long shadow, linear motion blur, atop compositing,
//! hue/chroma) are external collaborators. Only their parameter schemas
//! and pads are known here; their pixel processing lives in the host.

mod descriptor;
mod library;

pub use descriptor::{OperationDescriptor, PrimitiveNode};
pub use library::{
    OperationLibrary, OP_HUE_CHROMA, OP_LONG_SHADOW, OP_MOTION_BLUR_LINEAR, OP_SRC_ATOP,
};
