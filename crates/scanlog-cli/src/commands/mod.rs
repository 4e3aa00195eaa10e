pub mod doctor;
pub mod init;
pub mod journal;
pub mod record;
pub mod settings;
