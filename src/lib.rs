#![cfg_attr(not(test), no_std)]

mod error;
#[macro_use]
mod log;

pub mod config;
pub mod control;
pub mod device;
pub mod device_id;
pub mod interface;
pub mod registers;

pub use crate::config::{BusConfig, RetryPolicy};
pub use crate::control::{ControlResponse, Opcode};
pub use crate::device::Rm3100;
pub use crate::device_id::{BusType, DeviceId};
pub use crate::error::{Error, Result};
pub use crate::interface::{BusTopology, BusTransfer, RegisterDevice};
