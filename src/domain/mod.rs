pub mod estimate;
pub mod question;
pub mod responses;
pub mod team;
pub mod time_projection;
