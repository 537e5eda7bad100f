//! Core monetary algorithms for Coinage.
//!
//! Pure, synchronous computations over [`coinage_shared::Money`]. Nothing in
//! this crate performs I/O or owns global state; random strategies take an
//! explicit generator.
//!
//! # Modules
//!
//! - `allocation` - Even and pro-rata splitting with remainder distribution
//! - `change` - Greedy and optimal change-making, way counting
//! - `exchange` - Exchange rates and currency conversion

pub mod allocation;
pub mod change;
pub mod exchange;
