pub mod fixtures;
pub mod assertions;
