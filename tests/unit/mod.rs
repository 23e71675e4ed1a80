//! Unit test modules.

mod session_plan_test;
mod training_max_test;
mod week_table_test;
