mod literals_tests;
mod parameters_tests;
mod policies_tests;
mod replacements_tests;
mod segments_tests;
