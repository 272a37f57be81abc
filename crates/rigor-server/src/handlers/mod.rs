pub mod assist;
pub mod submissions;
