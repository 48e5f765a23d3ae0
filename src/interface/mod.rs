//! Interface layer
//! 데모 CLI와 조립(composition root)을 담는다.

pub mod cli;
pub mod composition;
