pub mod set_input;
