//! Leadform UI Components
//!
//! Dioxus primitives the contact dialog is built from: a modal
//! [`Dialog`], a [`Form`] that swallows default submission, labeled
//! [`Input`] / [`TextArea`] fields and [`Button`]s.
//!
//! The primitives know nothing about leads. They take values and emit
//! events; the caller owns all state, including whether the dialog is open.
//!
//! ## Visual Language
//!
//! - **Zinc (#18181b)**: dialog surface, dark inputs
//! - **White**: titles, primary action
//! - **Red (#ef4444)**: required-field marker

pub mod components;

pub use components::*;
