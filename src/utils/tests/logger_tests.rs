//! Tests for logger level selection

extern crate std;

use crate::utils::logger::Logger;
use log::LevelFilter;

#[test]
fn test_verbose_flag_selects_debug_level() {
    std::assert_eq!(Logger::level_for(true), LevelFilter::Debug);
}

#[test]
fn test_default_level_is_info() {
    std::assert_eq!(Logger::level_for(false), LevelFilter::Info);
}
