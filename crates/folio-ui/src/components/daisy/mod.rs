#![doc(hidden)]

//! DaisyUI-inspired form atoms used by the settings panel.

pub(crate) mod atoms;
pub(crate) mod foundations;

pub(crate) use atoms::*;
pub(crate) use foundations::*;
