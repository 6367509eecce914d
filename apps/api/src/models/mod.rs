pub mod feedback;
pub mod internship;
