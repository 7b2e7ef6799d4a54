pub mod events;
pub mod scores;
pub mod systems;
