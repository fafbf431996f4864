// not every test binary uses every helper
#![allow(dead_code)]

mod ring_test_properties;

pub use ring_test_properties::*;
