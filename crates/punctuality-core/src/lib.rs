pub mod pipeline;

pub use pipeline::{process_batch, process_line};
