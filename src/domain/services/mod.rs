mod app_state;
mod bubble;
mod bubble_list;
mod detection;
pub mod events;
pub mod relay;
mod scroll;

pub use app_state::*;
pub use bubble::*;
pub use bubble_list::*;
pub use detection::*;
pub use scroll::*;
