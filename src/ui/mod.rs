//! UI module - contains UI rendering components

pub mod cell;
