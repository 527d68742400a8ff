//! Aptos Health Test Suite
//!
//! End-to-end scenarios driven through the public controllers:
//! - Provider initialization lifecycle
//! - Patient registration and selection
//! - Medical record filtering and refresh
//! - Appointment scheduling and status changes
//! - Wallet session and network selection
//! - Chat widget conversations against a scripted agent
//!
//! Chain scenarios run against `MockLedger`, an in-memory emulation of the
//! healthcare module.

pub mod fixtures;

pub mod provider;
pub mod patient;
pub mod records;
pub mod appointments;
pub mod session;
pub mod chat;
