mod frontend_tests;
