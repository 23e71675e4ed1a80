//! 5/3/1 program calculations.
//!
//! Pure functions deriving training maxes, set weights and session plans
//! from explicit inputs. Nothing here touches storage.

pub mod cycle;
pub mod error;
pub mod estimate;
pub mod lift;
pub mod rounding;
pub mod session;
pub mod training_max;
pub mod week;

pub use cycle::{amrap_failed, CyclePosition};
pub use error::{ProgramError, ProgramResult};
pub use estimate::epley_one_rep_max;
pub use lift::{Lift, LiftMap};
pub use rounding::{round_to_increment, round_weight, DEFAULT_INCREMENT};
pub use session::{
    generate_session_sets, AssistanceConfig, PlannedSet, SessionPlan, SetKind, WarmupConfig,
    WarmupSet,
};
pub use training_max::{
    resolve_training_max, training_maxes, try_resolve_training_max, TrainingMaxInputs,
};
pub use week::{weight_for_set, CycleWeek, SET_PERCENTAGES};
