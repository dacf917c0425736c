#![no_std]

pub mod oracle {
    pub mod interface;
    pub mod types;
}
