pub mod codes;
pub mod init;
pub mod validate;
