//! Simulation module
//!
//! All gameplay logic lives here. It never talks to a window or input device
//! directly, only to the `engine::Surface` and `engine::Input` traits:
//! - Objects are unplaced until `reset`
//! - One update then one draw per tick
//! - Seeded RNG only

pub mod fruit;
pub mod object;
pub mod paddle;
pub mod state;
pub mod tick;

pub use fruit::Fruit;
pub use object::{GameObject, Placement, SimError};
pub use paddle::{Paddle, settle_ticks};
pub use state::{Catcher, ObjectParams};
pub use tick::TickInput;
