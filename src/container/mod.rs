//! Task container: index of confirmed task instances and the
//! asynchronous creation protocol.
//!
//! A container instance owns the set of task addresses created under it.
//! `add_task` only schedules the creation chain (account creation,
//! payload deployment, key grant, initialization); the address joins the
//! index when — and only when — the runtime confirms the chain succeeded.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Orchestration service in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
