//! `fh-sim`: mission driver for the fharvest coverage simulator.
//!
//! # Step loop
//!
//! ```text
//! for t in 1..steps:
//!   time_left = steps - t
//!   for robot in 0..N (ascending RobotId):
//!     ① Decide   MovePolicy::decide_move sees the fleet as it is *now*:
//!                 robots < robot already at step t, robots > robot at t-1.
//!     ② Record   coverage.record_move(from, to); traveled += (to != from).
//!     ③ Apply    fleet[robot] = to; trajectories[t][robot] = to.
//! ```
//!
//! The loop is strictly sequential.  Deciding all robots in parallel against
//! a snapshot would change results.
//!
//! # Lifecycle
//!
//! `Initialized → Running → Finished`.  A [`Mission`] runs exactly once; the
//! report and coverage stay queryable afterwards.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fh_core::{GridPoint, MissionConfig};
//! use fh_sim::{MissionBuilder, NoopObserver};
//!
//! let starts = vec![GridPoint::new(0, 0), GridPoint::new(10, 0)];
//! let mut mission = MissionBuilder::from_initial_positions(100, &starts, config)
//!     .policy_name("heuristic")
//!     .build()?;
//! let report = mission.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod mission;
pub mod observer;


pub use builder::MissionBuilder;
pub use error::{SimError, SimResult};
pub use mission::{Diagnostic, Mission, MissionPhase, MissionReport};
pub use observer::{MissionObserver, NoopObserver};
