pub mod attendance;
pub mod booking;
pub mod business;
pub mod faq;
pub mod insights;
pub mod lead;
pub mod staff;
