pub mod calendar;
pub mod delete;
pub mod list;
pub mod memo;
pub mod mirror;
pub mod show;
