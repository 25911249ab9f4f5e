//! Core, DOM-free primitives for the reader settings panel.
pub mod article;
pub mod outside;
pub mod panel;
pub mod store;
pub mod toggle;
