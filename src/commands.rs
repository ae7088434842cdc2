pub mod arithmetic;
pub mod configure;
pub mod greet;
