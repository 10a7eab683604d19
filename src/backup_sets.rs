pub mod set_namer;
