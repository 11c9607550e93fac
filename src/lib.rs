#![deny(warnings)]

pub mod errors;
pub mod height_field;
pub mod hillshading;
pub mod input;
pub mod rgba_bitmap;
pub mod testing;
pub mod trig;
