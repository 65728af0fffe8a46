mod except_tests;
mod flatten_tests;
mod group_by_tests;
