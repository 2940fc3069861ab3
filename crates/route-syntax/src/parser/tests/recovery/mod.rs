mod coverage_tests;
mod invalid_tests;
mod unclosed_tests;
