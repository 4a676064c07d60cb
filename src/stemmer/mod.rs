// Russian stemmer — RV region detection plus ordered suffix stripping.

pub mod engine;
pub mod region;
pub mod rules;

pub use engine::stem;
