//! different utility modules used throughout the project
/// tiny module to set up terminal logging with a level given as a string
pub mod logger;
