mod primitives_tests;
