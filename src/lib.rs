/// Account state, withdrawal policies and the rules that keep the balance
/// non-negative. Checking accounts layer their own gates on top of the
/// base rules.
pub mod account;

/// Registered clients and their account references.
pub mod client;

/// Append-only per-account log of applied transactions.
pub mod history;

/// Deposit/withdrawal transactions and the register protocol that keeps
/// balance and history consistent.
pub mod transaction;

/// Registry of all clients and accounts, plus operation routing.
/// Replaces shared global state with an explicitly owned structure.
pub mod registry;

/// Ideally, this module should exist in its own crate, as a way to
/// bootstrap core logic. However, I want to use it for integration tests
/// so I put it here.
pub mod bin_utils;
