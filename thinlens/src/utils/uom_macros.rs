#![warn(missing_docs)]
//! Module for uom macros that facilitate the creation of single lengths in cm or `Vec`s of them
/// helper macro to create the units
#[macro_export]
macro_rules! uom_unit_creator {
    ($unit:ident, $unit_type:ident, $val1:expr) => {
        $unit_type::new::<$unit>($val1)
    };
    ($unit:ident, $unit_type:ident, $( $x:expr ),*) => {
        {
            use std::vec::Vec;
            let mut temp_vec = Vec::new();
            $(
                temp_vec.push($unit_type::new::<$unit>($x));
            )*
            temp_vec
        }
    };
}
///macro to create a Length in centimeter
#[macro_export]
macro_rules! centimeter {
    ($( $x:expr ),*) =>{{
        use uom::si::{f64::Length, length::centimeter};
        $crate::uom_unit_creator![centimeter, Length, $( $x ),*]
    }};
}
