// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The concrete unit families. Every entry is a plain atom constructor,
//! a suffix and a scale factor against the family base, with no
//! algebraic logic of its own; compounds like velocity are built by
//! client code out of these (`meters() / seconds()`).

use crate::types::Unit;
use std::f64::consts::PI;

// Length, based on the meter.

pub fn meters() -> Unit {
    Unit::base("length", "m")
}

pub fn kilometers() -> Unit {
    Unit::atom("length", "km", 1000.0)
}

pub fn centimeters() -> Unit {
    Unit::atom("length", "cm", 0.01)
}

pub fn millimeters() -> Unit {
    Unit::atom("length", "mm", 0.001)
}

pub fn miles() -> Unit {
    Unit::atom("length", "mi", 1609.344)
}

pub fn yards() -> Unit {
    Unit::atom("length", "yd", 0.9144)
}

pub fn feet() -> Unit {
    Unit::atom("length", "ft", 0.3048)
}

pub fn inches() -> Unit {
    Unit::atom("length", "in", 0.0254)
}

// Time, based on the second.

pub fn seconds() -> Unit {
    Unit::base("time", "s")
}

pub fn milliseconds() -> Unit {
    Unit::atom("time", "ms", 0.001)
}

pub fn minutes() -> Unit {
    Unit::atom("time", "min", 60.0)
}

pub fn hours() -> Unit {
    Unit::atom("time", "h", 3600.0)
}

pub fn days() -> Unit {
    Unit::atom("time", "d", 86400.0)
}

// Mass, based on the gram.

pub fn grams() -> Unit {
    Unit::base("mass", "g")
}

pub fn kilograms() -> Unit {
    Unit::atom("mass", "kg", 1000.0)
}

pub fn milligrams() -> Unit {
    Unit::atom("mass", "mg", 0.001)
}

pub fn tonnes() -> Unit {
    Unit::atom("mass", "t", 1e6)
}

pub fn pounds() -> Unit {
    Unit::atom("mass", "lb", 453.59237)
}

pub fn ounces() -> Unit {
    Unit::atom("mass", "oz", 28.349523125)
}

// Angle, based on the radian. Degrees render flush against the amount.

pub fn radians() -> Unit {
    Unit::base("angle", "rad")
}

pub fn degrees() -> Unit {
    Unit::atom_unspaced("angle", "°", PI / 180.0)
}

pub fn turns() -> Unit {
    Unit::atom("angle", "turns", 2.0 * PI)
}

// Binary size, based on the byte.

pub fn bytes() -> Unit {
    Unit::base("binary-size", "B")
}

pub fn bits() -> Unit {
    Unit::atom("binary-size", "bit", 0.125)
}

pub fn kibibytes() -> Unit {
    Unit::atom("binary-size", "KiB", 1024.0)
}

pub fn mebibytes() -> Unit {
    Unit::atom("binary-size", "MiB", 1024.0 * 1024.0)
}

pub fn gibibytes() -> Unit {
    Unit::atom("binary-size", "GiB", 1024.0 * 1024.0 * 1024.0)
}

// Display length, based on the pixel.

pub fn pixels() -> Unit {
    Unit::base("display-length", "px")
}

pub fn points() -> Unit {
    Unit::atom("display-length", "pt", 96.0 / 72.0)
}
