//! Agora: orchestration core for a two-tier on-chain task marketplace.
//!
//! A container contract creates and indexes per-task sub-contracts; each
//! task contract tracks a single task through its lifecycle and releases
//! an escrowed reward on completion. Cross-contract steps (task creation,
//! reward transfer) are asynchronous promise chains whose outcome is only
//! known in a later callback invocation, so local state advances only
//! once the runtime confirms success.
//!
//! # Architecture
//!
//! Agora follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (test runtimes, etc.)
//!
//! # Modules
//!
//! - [`ledger`]: Ledger/runtime value types, ports, and test adapters
//! - [`task`]: Single-task state machine and reward-release protocol
//! - [`container`]: Task index and the asynchronous creation protocol

pub mod container;
pub mod ledger;
pub mod task;
