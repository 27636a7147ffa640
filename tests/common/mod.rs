#![allow(dead_code)]

pub mod backends;
pub mod synthetic_image;
