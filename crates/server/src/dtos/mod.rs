pub mod club;
pub mod course;
pub mod plan;
