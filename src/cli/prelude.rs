#![allow(unused_imports)]

pub use anyhow::{Context, Error, bail, ensure};
pub use arcomp::prelude::*;

pub type Result<T = (), E = Error> = anyhow::Result<T, E>;
