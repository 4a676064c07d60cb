// Extractive annotations — sentence splitting, title-driven scoring, and
// assembly of the best sentences in reading order.

pub mod annotator;
pub mod assembler;
pub mod scorer;
pub mod splitter;
