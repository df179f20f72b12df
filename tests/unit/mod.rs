mod parity_tests;
mod solver_tests;
