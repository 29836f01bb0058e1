pub mod redis_utils;
pub mod scan;
pub mod stats;
pub mod synth;
pub mod utils;
