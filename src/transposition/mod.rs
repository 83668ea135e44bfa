pub mod chord_transpose;

pub use chord_transpose::{transpose, transpose_label};
