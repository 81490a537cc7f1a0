pub mod programmer_handler;
