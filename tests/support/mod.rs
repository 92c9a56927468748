#![allow(dead_code)]

pub mod dataset;
pub mod emoquote_env;
