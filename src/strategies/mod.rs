pub mod cpu;
pub mod random;
pub mod registry;

pub use cpu::CpuStrategy;
pub use random::RandomStrategy;
pub use registry::{create_player_from_spec, label_for_spec};
