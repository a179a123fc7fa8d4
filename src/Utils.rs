//! different utility modules used throughout the project
/// logger setup on top of simplelog and cleanup of old log files
pub mod logger;
/// parse document with structure like " title1 key1: value1, value2 key2: value2 title2 key3:value3, value4" into HashMap
/// and read the example driver settings from it
pub mod task_parser;
