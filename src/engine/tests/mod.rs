mod scale_tests;
mod extract_tests;
