//! Dioxus components and server-side rendering

pub mod components;
pub mod pages;
pub mod render;
pub mod theme;
