//! Single-task state machine and reward-release protocol.
//!
//! A task instance owns one durable record and walks it forward through
//! `open → in progress → waiting for review → completed`. Completion is
//! asynchronous: the owner's `complete` call schedules the reward
//! transfer and the terminal status is only persisted when the runtime
//! delivers a successful outcome to the transfer callback. The module
//! follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
