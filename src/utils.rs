//! Internal building blocks shared by the containers.

pub mod capacity;
pub mod raw;
pub mod root;

#[cfg(test)]
pub mod tester;
