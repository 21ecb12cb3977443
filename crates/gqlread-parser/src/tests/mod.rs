mod document_tests;
mod numeric_tests;
mod utils;
