pub mod copy_file;
