pub mod coordinator;
pub mod observer;
