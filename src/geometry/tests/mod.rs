mod rect_tests;
mod overlap_tests;
