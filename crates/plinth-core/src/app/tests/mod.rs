pub mod dispatcher_tests;
