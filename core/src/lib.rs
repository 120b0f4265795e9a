#![no_std]

extern crate alloc;

pub use board::*;
pub use dealer::*;
pub use error::*;
pub use manager::*;
pub use store::*;
pub use types::*;
pub use victory::*;
pub use win::*;

mod board;
mod dealer;
mod error;
mod manager;
mod store;
mod types;
mod victory;
mod win;
