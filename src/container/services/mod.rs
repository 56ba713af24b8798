//! Orchestration service exposing the container entry points.

pub mod contract;

pub use contract::{
    ContainerContract, ContainerContractError, ContainerContractResult, TaskCreatedArgs,
    TaskInitArgs,
};
