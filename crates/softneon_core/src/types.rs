pub mod elem_type;
pub mod element;
pub mod float16;

pub use elem_type::ElemType;
pub use element::{Element, FloatElement, IntElement, LaneArray, MaskElement, Narrow, SignedElement, Widen};
pub use float16::Float16;
