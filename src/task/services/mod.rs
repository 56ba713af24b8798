//! Orchestration service exposing the task entry points.

pub mod contract;

pub use contract::{TaskContract, TaskContractError, TaskContractResult};
