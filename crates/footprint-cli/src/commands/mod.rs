pub mod compute;
pub mod factors;
