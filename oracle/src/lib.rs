#![no_std]

pub mod contract;
mod events;
mod identity;
mod registry;
mod storage;
