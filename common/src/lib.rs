//! Types shared between the character generator client and the API it talks to.

pub mod model;
pub mod requests;
