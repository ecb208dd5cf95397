//! Client-side state models.
//!
//! DESIGN
//! ======
//! Models here are plain values with no reactive machinery. The store and the
//! hook layer decide how they are shared and observed.

pub mod chat;
