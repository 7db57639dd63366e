// Mock authentication gate in front of the questionnaire.
// Accounts and sessions live in memory only.

pub mod handlers;
pub mod session;
pub mod users;
