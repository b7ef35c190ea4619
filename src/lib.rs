//! vinfra-leads — lead-capture service for V Infra Engineers.
//!
//! The enquiry wizard collects a Lead Record across four gated steps and
//! submits it to the notification dispatcher, which emails an operator
//! alert and a submitter confirmation.

pub mod assets;
pub mod config;
pub mod error;
pub mod labels;
pub mod lead;
pub mod notify;
pub mod theme;
pub mod wizard;
