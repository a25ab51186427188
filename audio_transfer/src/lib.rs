mod buffer;
mod config;
mod error;
mod gain;
mod process;
mod stats;
mod transfer;

#[cfg(test)]
mod fakes;

pub use self::{
    buffer::*, config::*, error::*, gain::*, process::*, stats::*, transfer::*,
};
