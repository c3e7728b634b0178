pub mod assumptions_reader;
pub mod response;
pub mod stream;
