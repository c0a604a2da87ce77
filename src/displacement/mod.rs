pub(crate) mod calculator;
pub(crate) mod compose;
pub mod library;
pub(crate) mod model;
