mod refine_tests;
mod utils;
