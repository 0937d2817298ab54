pub mod directory;

pub use directory::{ActivityDirectory, DirectoryError};
