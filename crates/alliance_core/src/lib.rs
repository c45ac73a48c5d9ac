//! Alliance tournament scheduling core
//!
//! This crate builds a round-by-round schedule where every round pits two
//! alliances of a fixed size against each other:
//! - The balancer picks who plays next, lagging entrants first
//! - The partitioner splits the picked entrants into two alliances,
//!   avoiding partnerships that already happened
//! - The scheduler loops until everyone reached the minimum round count
//!
//! # Usage
//!
//! ```
//! use alliance_core::{Scheduler, Termination};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let outcome = Scheduler::new(6, 2, 3).run(&mut rng);
//! assert_eq!(outcome.termination, Termination::Complete);
//! ```

pub mod balancer;
pub mod config;
pub mod partitioner;
pub mod scheduler;
pub mod types;

pub use balancer::*;
pub use config::*;
pub use partitioner::*;
pub use scheduler::*;
pub use types::*;
