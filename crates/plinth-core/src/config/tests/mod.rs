pub mod holder_tests;
