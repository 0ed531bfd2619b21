pub mod color;
pub mod geometry;
pub mod seal;

pub use color::Color;
pub use geometry::{Point, Rect, Size};
pub use seal::{CompanyLabelInfo, Instruction, InstructionSet, SealData};
