//! Protocol layer for receiver communication.
//!
//! This module handles building action requests and inspecting receiver responses.

pub mod action;
pub mod response;

pub use action::{receiver_url, Action, ActionRequest, FileDescriptor, RECEIVER_PORT};
pub use response::ReceiverResponse;
